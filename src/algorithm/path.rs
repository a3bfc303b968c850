//! 路径结果

use crate::collection::Stack;
use crate::error::Error;
use crate::graph::Vertex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 从源点到目标顶点的路径
///
/// 顶点序列非空，且 `length == vertices.len() - 1`；反序列化时同样校验。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPath")]
pub struct Path {
    /// 路径上的顶点序列（源点在前）
    vertices: Vec<Vertex>,
    /// 路径长度（边数）
    length: usize,
}

/// 未校验的序列化形式
#[derive(Deserialize)]
struct RawPath {
    vertices: Vec<Vertex>,
    length: usize,
}

impl TryFrom<RawPath> for Path {
    type Error = Error;

    fn try_from(raw: RawPath) -> Result<Self, Self::Error> {
        match raw.vertices.len().checked_sub(1) {
            Some(length) if length == raw.length => Ok(Self {
                vertices: raw.vertices,
                length,
            }),
            Some(length) => Err(Error::ParseError(format!(
                "路径长度 {} 与顶点数 {} 不符",
                raw.length,
                length + 1
            ))),
            None => Err(Error::ParseError("路径至少包含一个顶点".to_string())),
        }
    }
}

impl Path {
    /// 沿前驱表从 `target` 回溯，直到 `is_root` 成立的顶点
    ///
    /// 回溯顺序经由栈反转为源点在前的顺序。
    pub(crate) fn trace_back(
        target: Vertex,
        edge_to: &[Vertex],
        is_root: impl Fn(Vertex) -> bool,
    ) -> Self {
        let mut stack = Stack::new();
        let mut current = target;
        while !is_root(current) {
            stack.push(current);
            current = edge_to[current];
        }
        stack.push(current);

        let vertices: Vec<Vertex> = stack.into_iter().collect();
        Self {
            length: vertices.len() - 1,
            vertices,
        }
    }

    /// 顶点序列（源点在前）
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// 路径长度（边数）
    pub fn length(&self) -> usize {
        self.length
    }

    /// 起点
    pub fn source(&self) -> Vertex {
        self.vertices.first().copied().unwrap_or_default()
    }

    /// 终点
    pub fn target(&self) -> Vertex {
        self.vertices.last().copied().unwrap_or_default()
    }

    pub fn contains(&self, v: Vertex) -> bool {
        self.vertices.contains(&v)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Vertex;
    type IntoIter = std::slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}
