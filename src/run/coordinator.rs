//! 运行协调器
//!
//! 按固定顺序编排一次完整运行：拓扑初始化 → 最短路计算（计时）
//! → 流量仿真（计时）→ 统计归并 → 报告与 CSV 工件。自身不产生
//! 错误：唯一的 I/O 故障（CSV 写入失败）记日志后继续。

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use super::scenario::ScenarioSpec;
use crate::graph::{GraphStore, SquareMatrix, TopologyOpts, build_random_topology};
use crate::report::{render_matrix, write_matrix_csv};
use crate::route::{shortest_paths, shortest_paths_parallel};
use crate::traffic::{LoadTracker, SimOpts, TrafficStats, run_replicated, run_shared};

/// 部署形态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployMode {
    /// 线程共享一个负载矩阵；最短路按行划分并行
    Shared,
    /// 每 worker 私有负载矩阵；最短路单处计算后只读共享
    Replicated,
}

/// 一次运行的产出
#[derive(Debug)]
pub struct RunReport {
    /// 最短路计算耗时
    pub path_elapsed: Duration,
    /// 全程耗时（含仿真）
    pub total_elapsed: Duration,
    /// 归并后的流量统计
    pub stats: TrafficStats,
    /// 最终负载矩阵快照；复制式形态没有全局负载矩阵，为 None
    pub load: Option<SquareMatrix>,
}

/// 运行协调器
#[derive(Debug)]
pub struct RunCoordinator {
    spec: ScenarioSpec,
    mode: DeployMode,
}

impl RunCoordinator {
    pub fn new(spec: ScenarioSpec, mode: DeployMode) -> Self {
        Self { spec, mode }
    }

    /// 执行完整运行
    #[tracing::instrument(skip(self), fields(mode = ?self.mode, nodes = self.spec.nodes))]
    pub fn run(&self) -> RunReport {
        let spec = &self.spec;
        let total_start = Instant::now();

        let mut store = build_random_topology(&TopologyOpts {
            nodes: spec.nodes,
            max_weight: spec.max_weight,
            edge_probability: spec.edge_probability,
            max_bandwidth: spec.max_bandwidth,
            seed: spec.seed,
        });
        info!(
            nodes = spec.nodes,
            max_bandwidth = spec.max_bandwidth,
            simulations = spec.simulations,
            workers = spec.workers,
            "拓扑初始化完成"
        );

        let path_start = Instant::now();
        match self.mode {
            DeployMode::Shared => {
                shortest_paths_parallel(store.dist_mut(), spec.workers);
            }
            // 复制式形态不切分松弛本身：单处计算后只读共享，
            // 与各进程冗余计算在观测上等价
            DeployMode::Replicated => shortest_paths(store.dist_mut()),
        }
        let path_elapsed = path_start.elapsed();
        info!(?path_elapsed, "最短路计算完成");
        debug!("{}", render_matrix(store.dist(), "Shortest Distance Matrix"));

        let sim_opts = SimOpts {
            simulations: spec.simulations,
            workers: spec.workers,
            max_packet: spec.max_bandwidth,
            seed: spec.seed,
        };
        let (stats, load) = self.simulate(&store, &sim_opts);

        if let Some(load) = &load {
            debug!("{}", render_matrix(load, "Final Traffic Load Matrix"));
            if let Some(path) = &spec.csv_out {
                match write_matrix_csv(load, path) {
                    Ok(()) => info!(path = %path.display(), "负载矩阵已导出 CSV"),
                    // 工件写入失败不致命，记日志后继续
                    Err(err) => warn!(error = %err, "CSV 工件写入失败，继续运行"),
                }
            }
        }

        let total_elapsed = total_start.elapsed();
        info!(
            routed_total = stats.routed_total,
            primary = stats.primary,
            rerouted = stats.rerouted,
            dropped = stats.dropped,
            skipped = stats.skipped,
            ?total_elapsed,
            "运行结束"
        );

        RunReport {
            path_elapsed,
            total_elapsed,
            stats,
            load,
        }
    }

    fn simulate(
        &self,
        store: &GraphStore,
        sim_opts: &SimOpts,
    ) -> (TrafficStats, Option<SquareMatrix>) {
        match self.mode {
            DeployMode::Shared => {
                let load = LoadTracker::new(store.node_count());
                let stats = run_shared(store.dist(), store.capacity(), &load, sim_opts);
                (stats, Some(load.snapshot()))
            }
            DeployMode::Replicated => {
                let (stats, _per_worker) = run_replicated(store.dist(), store.capacity(), sim_opts);
                (stats, None)
            }
        }
    }
}
