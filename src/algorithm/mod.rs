//! 图算法模块
//!
//! 包含广度优先与深度优先两种路径搜索

mod bfs;
mod dfs;
mod path;

pub use bfs::BreadthFirstPaths;
pub use dfs::DepthFirstPaths;
pub use path::Path;
