//! 数据导入模块
//!
//! 从文本读取无向图，格式为：
//!
//! ```text
//! V
//! E
//! u v
//! ...
//! ```
//!
//! 空白分隔；空行与 `#` 开头的行被忽略。

use crate::error::{Error, Result};
use crate::graph::Graph;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// 文本图读取器
#[derive(Debug, Clone)]
pub struct GraphReader {
    /// 边行数必须与头部声明的边数一致
    strict: bool,
}

impl Default for GraphReader {
    fn default() -> Self {
        Self { strict: true }
    }
}

/// 行号与去除空白后的内容
type Line = (usize, String);

impl GraphReader {
    /// 创建读取器（默认严格模式）
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置是否严格校验边数
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// 从文件读取
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Graph> {
        let file = File::open(path.as_ref())?;
        let graph = self.parse(BufReader::new(file))?;
        debug!(path = %path.as_ref().display(), "图文件已加载");
        Ok(graph)
    }

    /// 从任意输入读取
    pub fn parse<R: BufRead>(&self, reader: R) -> Result<Graph> {
        let mut lines = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            lines.push((i + 1, trimmed.to_string()));
        }
        let mut lines = lines.into_iter();

        let vertex_count = parse_header(lines.next(), "顶点数")?;
        let declared_edges = parse_header(lines.next(), "边数")?;
        let mut graph = Graph::new(vertex_count)?;

        for (line_no, line) in lines {
            let mut tokens = line.split_whitespace();
            let (Some(u), Some(v), None) = (tokens.next(), tokens.next(), tokens.next()) else {
                return Err(Error::ParseError(format!(
                    "第 {} 行: 边应为两个顶点编号: {}",
                    line_no, line
                )));
            };
            let u = graph.vertex(parse_int(u, line_no)?)?;
            let v = graph.vertex(parse_int(v, line_no)?)?;
            graph.add_edge(u, v)?;
        }

        if self.strict && graph.edge_count() as i64 != declared_edges {
            return Err(Error::ParseError(format!(
                "声明了 {} 条边, 实际读取 {} 条",
                declared_edges,
                graph.edge_count()
            )));
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "图解析完成"
        );
        Ok(graph)
    }
}

fn parse_header(line: Option<Line>, what: &str) -> Result<i64> {
    let (line_no, text) =
        line.ok_or_else(|| Error::ParseError(format!("缺少{}", what)))?;
    parse_int(&text, line_no)
}

fn parse_int(token: &str, line_no: usize) -> Result<i64> {
    token
        .parse::<i64>()
        .map_err(|e| Error::ParseError(format!("第 {} 行: 无效整数 '{}': {}", line_no, token, e)))
}

/// 以严格模式解析
pub fn parse_graph<R: BufRead>(reader: R) -> Result<Graph> {
    GraphReader::new().parse(reader)
}

/// 以严格模式从文件加载
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<Graph> {
    GraphReader::new().load(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    const TINY: &str = "6\n5\n0 1\n1 2\n2 3\n0 3\n3 4\n";

    #[test]
    fn test_parse_graph() {
        let graph = parse_graph(Cursor::new(TINY)).unwrap();
        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.edge_count(), 5);
        assert_eq!(graph.degree(3).unwrap(), 3);
        assert_eq!(graph.degree(5).unwrap(), 0);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let input = "# 示例图\n\n3\n  2 \n0 1\n\n# 第二条边\n1   2\n";
        let graph = parse_graph(Cursor::new(input)).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.to_string(), "3 vertices, 2 edges\n0: 1\n1: 0 2\n2: 1\n");
    }

    #[test]
    fn test_edge_count_mismatch() {
        let input = "3\n3\n0 1\n1 2\n";
        let err = parse_graph(Cursor::new(input)).unwrap_err();
        assert!(matches!(err, Error::ParseError(_)));

        let graph = GraphReader::new()
            .strict(false)
            .parse(Cursor::new(input))
            .unwrap();
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_malformed_input() {
        let cases = [
            "",
            "3\n",
            "x\n0\n",
            "3\n1\n0\n",
            "3\n1\n0 1 2\n",
            "3\n1\n0 b\n",
        ];
        for input in cases {
            let err = parse_graph(Cursor::new(input)).unwrap_err();
            assert!(matches!(err, Error::ParseError(_)), "输入 {:?}: {}", input, err);
        }

        let err = parse_graph(Cursor::new("3\n1\n0 x\n")).unwrap_err();
        assert!(err.to_string().contains("第 3 行"));
    }

    #[test]
    fn test_invalid_vertices() {
        assert!(parse_graph(Cursor::new("-1\n0\n"))
            .unwrap_err()
            .is_invalid_argument());
        assert!(parse_graph(Cursor::new("3\n1\n0 3\n"))
            .unwrap_err()
            .is_invalid_argument());
        assert!(parse_graph(Cursor::new("3\n1\n-2 1\n"))
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_oversized_header() {
        let err = parse_graph(Cursor::new("9223372036854775807\n0\n")).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("顶点数过大"));
    }

    #[test]
    fn test_load_graph_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", TINY).unwrap();

        let graph = load_graph(file.path()).unwrap();
        assert_eq!(graph.edge_count(), 5);

        let missing = load_graph(file.path().with_extension("missing")).unwrap_err();
        assert!(matches!(missing, Error::IoError(_)));
    }
}
