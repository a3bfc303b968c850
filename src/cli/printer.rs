//! 结果打印器
//!
//! 提供表格和 JSON 格式的结果输出

use crate::algorithm::{BreadthFirstPaths, DepthFirstPaths, Path};
use crate::error::Result;
use crate::graph::{GraphSummary, Vertex};
use prettytable::{format, row, Cell, Row, Table};
use serde::Serialize;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// JSON 模式
    Json,
}

/// 单个目标顶点的查询结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathRow {
    pub vertex: Vertex,
    pub reachable: bool,
    /// 仅 BFS 行带此字段；不可达时为 `Some(None)`，序列化为 `null`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<Option<usize>>,
    pub path: Option<Path>,
}

impl PathRow {
    /// 由 BFS 结果构造
    pub fn from_bfs(bfs: &BreadthFirstPaths, v: Vertex) -> Result<Self> {
        Ok(Self {
            vertex: v,
            reachable: bfs.has_path(v)?,
            distance: Some(bfs.dist(v)?),
            path: bfs.path(v)?,
        })
    }

    /// 由 DFS 结果构造
    pub fn from_dfs(dfs: &DepthFirstPaths, v: Vertex) -> Result<Self> {
        Ok(Self {
            vertex: v,
            reachable: dfs.has_path(v)?,
            distance: None,
            path: dfs.path(v)?,
        })
    }
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> PrintMode {
        self.mode
    }

    /// 打印图统计信息
    pub fn print_stats(&self, summary: &GraphSummary) -> String {
        match self.mode {
            PrintMode::Json => to_json(summary),
            PrintMode::Table => {
                let mut table = new_table();
                table.set_titles(row!["Property", "Value"]);
                table.add_row(row!["Vertex Count", summary.vertex_count]);
                table.add_row(row!["Edge Count", summary.edge_count]);
                table.add_row(row!["Min Degree", summary.min_degree]);
                table.add_row(row!["Max Degree", summary.max_degree]);
                table.add_row(row![
                    "Average Degree",
                    format!("{:.2}", summary.average_degree)
                ]);
                table.to_string()
            }
        }
    }

    /// 打印路径查询结果
    pub fn print_paths(&self, rows: &[PathRow], with_distance: bool) -> String {
        match self.mode {
            PrintMode::Json => to_json(rows),
            PrintMode::Table => {
                if rows.is_empty() {
                    return "Empty set\n".to_string();
                }
                let mut table = new_table();
                let mut header = vec![Cell::new("Vertex"), Cell::new("Reachable")];
                if with_distance {
                    header.push(Cell::new("Distance"));
                }
                header.push(Cell::new("Path"));
                table.set_titles(Row::new(header));

                for r in rows {
                    let mut cells = vec![
                        Cell::new(&r.vertex.to_string()),
                        Cell::new(if r.reachable { "yes" } else { "no" }),
                    ];
                    if with_distance {
                        let dist = r
                            .distance
                            .flatten()
                            .map(|d| d.to_string())
                            .unwrap_or_else(|| "-".into());
                        cells.push(Cell::new(&dist));
                    }
                    let path = r.path.as_ref().map(Path::to_string).unwrap_or_else(|| "-".into());
                    cells.push(Cell::new(&path));
                    table.add_row(Row::new(cells));
                }
                format!("{}{} row(s) in set\n", table, rows.len())
            }
        }
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(s) => s + "\n",
        Err(e) => format!("{{\"error\": \"{}\"}}\n", e),
    }
}
