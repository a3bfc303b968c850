//! 图核心模块
//!
//! 定义无向图及顶点校验

mod graph;

pub use graph::{validate_vertex, Graph, GraphSummary, Vertex};
