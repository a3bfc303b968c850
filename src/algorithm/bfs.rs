//! 广度优先搜索
//!
//! 计算单源或多源到每个顶点的最短路径（按边数计）。
//! 构造时一次性完成遍历，耗时 Θ(V + E)；之后的查询均为 O(1)，
//! 路径重建与路径长度成正比。

use super::path::Path;
use crate::collection::Queue;
use crate::error::Result;
use crate::graph::{validate_vertex, Graph, Vertex};
use tracing::{debug, warn};

/// 未到达顶点的距离
const UNREACHABLE: usize = usize::MAX;

/// 广度优先搜索结果
#[derive(Debug, Clone)]
pub struct BreadthFirstPaths {
    /// marked[v]：是否存在源点到 v 的路径
    marked: Vec<bool>,
    /// edge_to[v]：最短路径上 v 的前驱
    edge_to: Vec<Vertex>,
    /// dist_to[v]：最短路径的边数
    dist_to: Vec<usize>,
    /// 到达的顶点数
    reached: usize,
}

impl BreadthFirstPaths {
    /// 从单个源点搜索
    pub fn new(graph: &Graph, source: Vertex) -> Result<Self> {
        Self::from_sources(graph, [source])
    }

    /// 从一组源点同时搜索
    ///
    /// 所有源点先校验，任一越界则不做任何遍历。
    pub fn from_sources<I>(graph: &Graph, sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vertex>,
    {
        let n = graph.vertex_count();
        let sources = sources
            .into_iter()
            .map(|s| validate_vertex(s, n))
            .collect::<Result<Vec<_>>>()?;

        let mut paths = Self {
            marked: vec![false; n],
            edge_to: vec![0; n],
            dist_to: vec![UNREACHABLE; n],
            reached: 0,
        };
        paths.bfs(graph, &sources)?;

        debug!(
            sources = ?sources,
            reached = paths.reached,
            vertices = n,
            "广度优先搜索完成"
        );
        debug_assert!(paths.check(graph));
        Ok(paths)
    }

    fn bfs(&mut self, graph: &Graph, sources: &[Vertex]) -> Result<()> {
        let mut queue = Queue::new();
        for &s in sources {
            if !self.marked[s] {
                self.marked[s] = true;
                self.dist_to[s] = 0;
                self.reached += 1;
                queue.enqueue(s);
            }
        }

        while let Some(u) = queue.dequeue() {
            for &v in graph.adj(u)? {
                if !self.marked[v] {
                    self.marked[v] = true;
                    self.edge_to[v] = u;
                    self.dist_to[v] = self.dist_to[u] + 1;
                    self.reached += 1;
                    queue.enqueue(v);
                }
            }
        }
        Ok(())
    }

    fn validate(&self, v: Vertex) -> Result<Vertex> {
        validate_vertex(v, self.marked.len())
    }

    /// 是否存在源点到 `v` 的路径
    pub fn has_path(&self, v: Vertex) -> Result<bool> {
        Ok(self.marked[self.validate(v)?])
    }

    /// 源点到 `v` 的最短路径边数；不可达时为 `None`
    pub fn dist(&self, v: Vertex) -> Result<Option<usize>> {
        let v = self.validate(v)?;
        Ok(self.marked[v].then_some(self.dist_to[v]))
    }

    /// 最短路径上 `v` 的前驱；源点与不可达顶点为 `None`
    pub fn edge_to(&self, v: Vertex) -> Result<Option<Vertex>> {
        let v = self.validate(v)?;
        Ok((self.marked[v] && self.dist_to[v] != 0).then_some(self.edge_to[v]))
    }

    /// 源点到 `v` 的一条最短路径；不可达时为 `None`
    pub fn path(&self, v: Vertex) -> Result<Option<Path>> {
        let v = self.validate(v)?;
        if !self.marked[v] {
            return Ok(None);
        }
        Ok(Some(Path::trace_back(v, &self.edge_to, |u| {
            self.dist_to[u] == 0
        })))
    }

    /// 可达顶点数（含源点）
    pub fn reachable_count(&self) -> usize {
        self.reached
    }

    /// 校验最优性条件
    ///
    /// - 源点距离为 0
    /// - 每条边 u-v 两端的可达性一致，且 dist[v] <= dist[u] + 1
    /// - 对非源点 v，dist[v] == dist[edge_to[v]] + 1
    pub fn check(&self, graph: &Graph) -> bool {
        if graph.vertex_count() != self.marked.len() {
            warn!(
                expected = self.marked.len(),
                actual = graph.vertex_count(),
                "图的顶点数与搜索结果不一致"
            );
            return false;
        }

        for u in graph.vertices() {
            let Ok(neighbors) = graph.adj(u) else {
                return false;
            };
            for &v in neighbors {
                if self.marked[u] != self.marked[v] {
                    warn!(u, v, "边两端可达性不一致");
                    return false;
                }
                if self.marked[u] && self.dist_to[v] > self.dist_to[u] + 1 {
                    warn!(
                        u,
                        v,
                        dist_u = self.dist_to[u],
                        dist_v = self.dist_to[v],
                        "边违反三角不等式"
                    );
                    return false;
                }
            }
        }

        for v in graph.vertices() {
            if !self.marked[v] || self.dist_to[v] == 0 {
                continue;
            }
            let u = self.edge_to[v];
            if self.dist_to[v] != self.dist_to[u] + 1 {
                warn!(
                    u,
                    v,
                    dist_u = self.dist_to[u],
                    dist_v = self.dist_to[v],
                    "最短路径树的边不紧"
                );
                return false;
            }
        }
        true
    }
}
