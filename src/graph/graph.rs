//! 无向图数据结构
//!
//! 顶点编号为 `0..V`，每个顶点的邻居以 [`Bag`] 保存。
//! 允许平行边与自环；自环 `v-v` 在 `v` 的邻接表中出现两次，度数计 2。
//!
//! 空间 Θ(V + E)；除遍历邻接表外，所有操作 O(1)。

use crate::collection::Bag;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// 顶点编号
pub type Vertex = usize;

/// 校验顶点是否在 `[0, vertex_count)` 内
///
/// 所有接受顶点参数的操作都经由此函数报告越界。
pub fn validate_vertex(v: Vertex, vertex_count: usize) -> Result<Vertex> {
    if v < vertex_count {
        Ok(v)
    } else {
        Err(out_of_range(v, vertex_count))
    }
}

fn out_of_range(v: impl fmt::Display, vertex_count: usize) -> Error {
    let upper = match vertex_count.checked_sub(1) {
        Some(max) => max.to_string(),
        None => "-1".to_string(),
    };
    Error::InvalidArgument(format!("顶点 {} 不在 0 到 {} 之间", v, upper))
}

/// 图的规模摘要
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub min_degree: usize,
    pub max_degree: usize,
    pub average_degree: f64,
}

/// 无向图（邻接表表示）
#[derive(Debug, Clone)]
pub struct Graph {
    /// 顶点数，构造后不变
    vertex_count: usize,
    /// 边数
    edge_count: usize,
    /// 邻接表
    adj: Vec<Bag<Vertex>>,
}

impl Graph {
    /// 创建含 `vertex_count` 个顶点、0 条边的图
    pub fn new(vertex_count: i64) -> Result<Self> {
        let vertex_count = usize::try_from(vertex_count).map_err(|_| {
            Error::InvalidArgument(format!("顶点数不能为负: {}", vertex_count))
        })?;
        Self::with_vertices(vertex_count)
    }

    /// 以非负顶点数创建图；邻接表无法分配时返回参数错误
    pub fn with_vertices(vertex_count: usize) -> Result<Self> {
        let mut adj = Vec::new();
        adj.try_reserve_exact(vertex_count)
            .map_err(|_| Error::InvalidArgument(format!("顶点数过大: {}", vertex_count)))?;
        adj.resize_with(vertex_count, Bag::new);
        Ok(Self {
            vertex_count,
            edge_count: 0,
            adj,
        })
    }

    /// 将有符号编号转换为合法顶点
    pub fn vertex(&self, raw: i64) -> Result<Vertex> {
        match usize::try_from(raw) {
            Ok(v) => validate_vertex(v, self.vertex_count),
            Err(_) => Err(out_of_range(raw, self.vertex_count)),
        }
    }

    // ==================== 边操作 ====================

    /// 添加无向边 `u-v`
    ///
    /// 两个端点都先校验，失败时图保持不变。
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> Result<()> {
        validate_vertex(u, self.vertex_count)?;
        validate_vertex(v, self.vertex_count)?;
        self.edge_count += 1;
        self.adj[u].add(v);
        self.adj[v].add(u);
        Ok(())
    }

    /// 顶点的度数
    pub fn degree(&self, v: Vertex) -> Result<usize> {
        Ok(self.adj(v)?.len())
    }

    /// 顶点的邻居（只读）
    pub fn adj(&self, v: Vertex) -> Result<&Bag<Vertex>> {
        validate_vertex(v, self.vertex_count)?;
        Ok(&self.adj[v])
    }

    // ==================== 统计 ====================

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// 全部顶点
    pub fn vertices(&self) -> Range<Vertex> {
        0..self.vertex_count
    }

    /// 度数统计
    pub fn summary(&self) -> GraphSummary {
        let degrees = self.adj.iter().map(Bag::len);
        let average_degree = if self.vertex_count == 0 {
            0.0
        } else {
            2.0 * self.edge_count as f64 / self.vertex_count as f64
        };
        GraphSummary {
            vertex_count: self.vertex_count,
            edge_count: self.edge_count,
            min_degree: degrees.clone().min().unwrap_or(0),
            max_degree: degrees.max().unwrap_or(0),
            average_degree,
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.vertex_count, self.edge_count)?;
        for (v, bag) in self.adj.iter().enumerate() {
            if bag.is_empty() {
                writeln!(f, "{}:", v)?;
            } else {
                writeln!(f, "{}: {}", v, bag)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_graph_basic() {
        let mut graph = Graph::new(4).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 0);

        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();
        graph.add_edge(2, 3).unwrap();

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.degree(0).unwrap(), 2);
        assert_eq!(graph.degree(3).unwrap(), 1);
        assert_eq!(
            graph.adj(0).unwrap().iter().copied().collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(
            graph.adj(2).unwrap().iter().copied().collect::<Vec<_>>(),
            vec![0, 3]
        );
    }

    #[test]
    fn test_self_loop_and_parallel_edges() {
        let mut graph = Graph::new(2).unwrap();
        graph.add_edge(1, 1).unwrap();
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 1).unwrap();

        // 自环计两次
        assert_eq!(graph.degree(1).unwrap(), 4);
        assert_eq!(graph.degree(0).unwrap(), 2);
        assert_eq!(
            graph.adj(1).unwrap().iter().filter(|&&n| n == 1).count(),
            2
        );
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(Graph::new(-1).unwrap_err().is_invalid_argument());

        let mut graph = Graph::new(3).unwrap();
        assert!(graph.add_edge(0, 3).unwrap_err().is_invalid_argument());
        assert!(graph.add_edge(7, 0).unwrap_err().is_invalid_argument());
        // 失败的插入不改变图
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.adj(0).unwrap().is_empty());

        assert!(graph.degree(3).unwrap_err().is_invalid_argument());
        assert!(graph.adj(usize::MAX).is_err());
        assert!(graph.vertex(-1).unwrap_err().is_invalid_argument());
        assert!(graph.vertex(3).is_err());
        assert_eq!(graph.vertex(2).unwrap(), 2);
    }

    #[test]
    fn test_empty_graph() {
        let mut graph = Graph::new(0).unwrap();
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.degree(0).is_err());
        assert!(graph.adj(0).is_err());
        assert!(graph.add_edge(0, 0).is_err());
        assert_eq!(graph.vertices().count(), 0);

        let err = graph.degree(0).unwrap_err();
        assert_eq!(err.to_string(), "无效参数: 顶点 0 不在 0 到 -1 之间");
    }

    #[test]
    fn test_oversized_vertex_count() {
        let err = Graph::new(i64::MAX).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            format!("无效参数: 顶点数过大: {}", i64::MAX)
        );
        assert!(Graph::with_vertices(usize::MAX)
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_out_of_range_message() {
        let graph = Graph::new(3).unwrap();
        assert_eq!(
            graph.degree(usize::MAX).unwrap_err().to_string(),
            format!("无效参数: 顶点 {} 不在 0 到 2 之间", usize::MAX)
        );
        assert_eq!(
            graph.vertex(-4).unwrap_err().to_string(),
            "无效参数: 顶点 -4 不在 0 到 2 之间"
        );
    }

    #[test]
    fn test_handshake_random() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let n = rng.gen_range(1..40usize);
            let mut graph = Graph::with_vertices(n).unwrap();
            for _ in 0..rng.gen_range(0..120) {
                let u = rng.gen_range(0..n);
                let v = rng.gen_range(0..n);
                graph.add_edge(u, v).unwrap();
            }

            let total: usize = graph.vertices().map(|v| graph.degree(v).unwrap()).sum();
            assert_eq!(total, 2 * graph.edge_count());
            for v in graph.vertices() {
                assert_eq!(graph.degree(v).unwrap(), graph.adj(v).unwrap().iter().count());
            }
        }
    }

    #[test]
    fn test_display_and_summary() {
        let mut graph = Graph::new(3).unwrap();
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();

        assert_eq!(
            graph.to_string(),
            "3 vertices, 2 edges\n0: 1\n1: 0 2\n2: 1\n"
        );

        let summary = graph.summary();
        assert_eq!(summary.min_degree, 1);
        assert_eq!(summary.max_degree, 2);
        assert!((summary.average_degree - 4.0 / 3.0).abs() < 1e-9);

        let isolated = Graph::new(2).unwrap();
        assert_eq!(isolated.to_string(), "2 vertices, 0 edges\n0:\n1:\n");
    }
}
