//! 深度优先搜索
//!
//! 求与源点连通的顶点，并给出源点到这些顶点的一条路径（不一定最短）。
//! 以显式工作栈代替递归，调用栈深度与图规模无关。

use super::path::Path;
use crate::collection::iter::BagIter;
use crate::collection::Stack;
use crate::error::Result;
use crate::graph::{validate_vertex, Graph, Vertex};
use tracing::debug;

/// 深度优先搜索结果
#[derive(Debug, Clone)]
pub struct DepthFirstPaths {
    /// marked[v]：是否存在源点到 v 的路径
    marked: Vec<bool>,
    /// edge_to[v]：发现 v 时所经过的边的另一端
    edge_to: Vec<Vertex>,
    /// 与源点连通的顶点数
    count: usize,
    source: Vertex,
}

impl DepthFirstPaths {
    /// 从 `source` 出发搜索
    pub fn new(graph: &Graph, source: Vertex) -> Result<Self> {
        let n = graph.vertex_count();
        validate_vertex(source, n)?;

        let mut paths = Self {
            marked: vec![false; n],
            edge_to: vec![0; n],
            count: 0,
            source,
        };
        paths.dfs(graph, source)?;

        debug!(source, reached = paths.count, vertices = n, "深度优先搜索完成");
        Ok(paths)
    }

    /// 栈帧为（顶点，其尚未检查的邻居），访问顺序与递归版本一致
    fn dfs(&mut self, graph: &Graph, source: Vertex) -> Result<()> {
        let mut frames: Stack<(Vertex, BagIter<'_, Vertex>)> = Stack::new();
        self.visit(source);
        frames.push((source, graph.adj(source)?.iter()));

        while let Some((v, neighbors)) = frames.peek_mut() {
            let v = *v;
            match neighbors.find(|&&u| !self.marked[u]) {
                Some(&u) => {
                    self.edge_to[u] = v;
                    self.visit(u);
                    frames.push((u, graph.adj(u)?.iter()));
                }
                None => {
                    frames.pop();
                }
            }
        }
        Ok(())
    }

    fn visit(&mut self, v: Vertex) {
        self.marked[v] = true;
        self.count += 1;
    }

    /// 是否存在源点到 `v` 的路径
    pub fn has_path(&self, v: Vertex) -> Result<bool> {
        Ok(self.marked[validate_vertex(v, self.marked.len())?])
    }

    /// 源点到 `v` 的一条路径；不连通时为 `None`
    pub fn path(&self, v: Vertex) -> Result<Option<Path>> {
        if !self.has_path(v)? {
            return Ok(None);
        }
        let source = self.source;
        Ok(Some(Path::trace_back(v, &self.edge_to, |u| u == source)))
    }

    /// 与源点连通的顶点数（含源点）
    pub fn reachable_count(&self) -> usize {
        self.count
    }

    pub fn source(&self) -> Vertex {
        self.source
    }
}
