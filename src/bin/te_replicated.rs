//! 复制式形态的流量工程仿真
//!
//! 模拟多进程部署：拓扑整体复制，每个 worker 私有负载矩阵，
//! 事件下标轮转分配，结束时归并流量总量。

use std::path::PathBuf;

use clap::Parser;
use tesim_rs::run::{DeployMode, RunCoordinator, ScenarioSpec};

#[derive(Debug, Parser)]
#[command(
    name = "te-replicated",
    about = "复制式形态：各 worker 独立记账的流量准入仿真"
)]
struct Args {
    /// Scenario JSON file; CLI flags below override individual fields
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Number of nodes in the synthetic topology
    #[arg(long)]
    nodes: Option<usize>,

    /// Uniform link bandwidth (also the packet size upper bound)
    #[arg(long)]
    max_bandwidth: Option<u32>,

    /// Number of traffic demand events
    #[arg(long)]
    simulations: Option<u64>,

    /// Worker count (stands in for process ranks)
    #[arg(long)]
    workers: Option<usize>,

    /// Base seed for topology and demand streams
    #[arg(long)]
    seed: Option<u64>,

    /// Probability that a directed edge exists
    #[arg(long)]
    edge_probability: Option<f64>,
}

fn main() {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    let mut spec = match &args.scenario {
        Some(path) => match ScenarioSpec::load(path) {
            Ok(spec) => spec,
            Err(err) => {
                eprintln!("failed to load scenario: {err}");
                std::process::exit(2);
            }
        },
        None => ScenarioSpec::default(),
    };
    if let Some(nodes) = args.nodes {
        spec.nodes = nodes;
    }
    if let Some(max_bandwidth) = args.max_bandwidth {
        spec.max_bandwidth = max_bandwidth;
    }
    if let Some(simulations) = args.simulations {
        spec.simulations = simulations;
    }
    if let Some(workers) = args.workers {
        spec.workers = workers;
    }
    if let Some(seed) = args.seed {
        spec.seed = seed;
    }
    if let Some(edge_probability) = args.edge_probability {
        spec.edge_probability = edge_probability;
    }
    // 复制式形态没有全局负载矩阵，不产出 CSV 工件
    spec.csv_out = None;

    let report = RunCoordinator::new(spec, DeployMode::Replicated).run();

    println!(
        "shortest paths: {:.4?}, total: {:.4?}",
        report.path_elapsed, report.total_elapsed
    );
    println!("Total Traffic Routed: {}", report.stats.routed_total);
}
