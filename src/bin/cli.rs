//! graphwalk 命令行工具
//!
//! 加载文本格式的图文件，执行一次 BFS/DFS 查询后输出结果

use anyhow::Context;
use clap::{Parser, Subcommand};
use graphwalk::algorithm::{BreadthFirstPaths, DepthFirstPaths};
use graphwalk::cli::{PathRow, PrintMode, Printer};
use graphwalk::graph::{Graph, Vertex};
use graphwalk::import::GraphReader;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graphwalk-cli")]
#[command(about = "无向图路径查询工具")]
struct Args {
    /// 图文件路径（首行顶点数，次行边数，其后每行一条边）
    #[arg(short, long)]
    input: PathBuf,

    /// 不校验边行数与声明的边数是否一致
    #[arg(long)]
    lenient: bool,

    /// 以 JSON 输出
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 显示图统计信息
    Stats,
    /// 显示邻接表
    Show,
    /// 广度优先最短路径
    Bfs {
        /// 源点（可多次指定）
        #[arg(short, long, required = true, num_args = 1..)]
        source: Vec<Vertex>,
        /// 目标顶点；省略时列出所有顶点
        #[arg(short, long)]
        target: Vec<Vertex>,
    },
    /// 深度优先连通性与路径
    Dfs {
        /// 源点
        #[arg(short, long)]
        source: Vertex,
        /// 目标顶点；省略时列出所有顶点
        #[arg(short, long)]
        target: Vec<Vertex>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let graph = GraphReader::new()
        .strict(!args.lenient)
        .load(&args.input)
        .with_context(|| format!("无法加载图文件 {}", args.input.display()))?;

    let printer = Printer::new(if args.json {
        PrintMode::Json
    } else {
        PrintMode::Table
    });

    match args.command {
        Command::Stats => print!("{}", printer.print_stats(&graph.summary())),
        Command::Show => print!("{}", graph),
        Command::Bfs { source, target } => {
            let bfs = BreadthFirstPaths::from_sources(&graph, source)?;
            let rows = targets(&graph, target)
                .into_iter()
                .map(|v| PathRow::from_bfs(&bfs, v))
                .collect::<graphwalk::Result<Vec<_>>>()?;
            print!("{}", printer.print_paths(&rows, true));
        }
        Command::Dfs { source, target } => {
            let dfs = DepthFirstPaths::new(&graph, source)?;
            let rows = targets(&graph, target)
                .into_iter()
                .map(|v| PathRow::from_dfs(&dfs, v))
                .collect::<graphwalk::Result<Vec<_>>>()?;
            if printer.mode() == PrintMode::Table {
                println!("与 {} 连通的顶点数: {}", source, dfs.reachable_count());
            }
            print!("{}", printer.print_paths(&rows, false));
        }
    }

    Ok(())
}

/// 未指定目标时查询全部顶点
fn targets(graph: &Graph, target: Vec<Vertex>) -> Vec<Vertex> {
    if target.is_empty() {
        graph.vertices().collect()
    } else {
        target
    }
}
