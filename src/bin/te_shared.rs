//! 共享内存形态的流量工程仿真
//!
//! 线程共享一个负载矩阵；最短路按行划分并行，每轮 k 屏障同步。

use std::path::PathBuf;

use clap::Parser;
use tesim_rs::run::{DeployMode, RunCoordinator, ScenarioSpec};

#[derive(Debug, Parser)]
#[command(name = "te-shared", about = "共享内存形态：全源最短路 + 并发流量准入仿真")]
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

    /// Worker thread count
    #[arg(long)]
    workers: Option<usize>,

    /// Base seed for topology and demand streams
    #[arg(long)]
    seed: Option<u64>,

    /// Probability that a directed edge exists
    #[arg(long)]
    edge_probability: Option<f64>,

    /// Write the final load matrix to this CSV file
    #[arg(long)]
    csv_out: Option<PathBuf>,
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
    if let Some(csv_out) = args.csv_out {
        spec.csv_out = Some(csv_out);
    }

    let report = RunCoordinator::new(spec, DeployMode::Shared).run();

    println!(
        "shortest paths: {:.4?}, total: {:.4?}",
        report.path_elapsed, report.total_elapsed
    );
    println!(
        "Total Traffic Routed: {} (primary={}, rerouted={}, dropped={}, skipped={})",
        report.stats.routed_total,
        report.stats.primary,
        report.stats.rerouted,
        report.stats.dropped,
        report.stats.skipped
    );
}
