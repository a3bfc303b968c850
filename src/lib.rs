//! graphwalk - 无向图路径查询库
//!
//! 基于单链表容器实现的无向图与两种遍历算法：
//! - Bag / Queue / Stack 三种链式容器
//! - 邻接表表示的无向图，支持平行边与自环
//! - 广度优先搜索：按边数计的最短路径（单源或多源）
//! - 深度优先搜索：连通性与路径重建
//!
//! 搜索在构造时一次性完成，之后只提供只读查询。

pub mod algorithm;
pub mod cli;
pub mod collection;
pub mod error;
pub mod graph;
pub mod import;

// 重导出常用类型
pub use algorithm::{BreadthFirstPaths, DepthFirstPaths, Path};
pub use collection::{Bag, Queue, Stack};
pub use error::{Error, Result};
pub use graph::{Graph, Vertex};
pub use import::{load_graph, parse_graph, GraphReader};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
