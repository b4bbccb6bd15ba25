//! 流量准入仿真
//!
//! 按最短距离矩阵的可达性生成合成需求，对每条需求依次尝试：
//! 直连链路准入 → 单跳改道（按下标序首个可行中转，只预约第一跳）
//! → 静默丢弃。链路预约通过 [`LoadTracker`] 的原子检查-预约完成，
//! 任何调度下负载都不会超过容量。
//!
//! 支持两种部署形态：
//! - 共享内存：全部线程共享一个负载矩阵，事件下标按区间划分；
//! - 复制式：每个 worker 持有私有负载矩阵（对应多进程各自记账的
//!   简化模型），事件下标按 `worker, worker+size, ...` 轮转分配，
//!   结束时只归并各 worker 的流量总量。

use tracing::{debug, trace};

use super::demand::{Demand, DemandGen};
use super::load::LoadTracker;
use crate::graph::{INF, NodeId, SquareMatrix};

/// 流量仿真配置选项
#[derive(Debug, Clone)]
pub struct SimOpts {
    /// 需求事件总数
    pub simulations: u64,
    /// worker（线程）数
    pub workers: usize,
    /// 包大小上限（含）
    pub max_packet: u32,
    /// 需求流基础种子
    pub seed: u64,
}

impl Default for SimOpts {
    fn default() -> Self {
        Self {
            simulations: 5000,
            workers: 2,
            max_packet: 100,
            seed: 0,
        }
    }
}

/// 单条需求的处置结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 直连链路承载
    Primary,
    /// 经指定中转节点单跳改道（只预约了第一跳）
    Rerouted(NodeId),
    /// 无可行链路，静默丢弃
    Dropped,
    /// 源等于目的或目的不可达，无副作用跳过
    Skipped,
}

/// 仿真统计。`merge` 是可结合可交换的归并，与 worker 数量和
/// 调度顺序无关。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TrafficStats {
    /// 所有被准入需求的大小之和
    pub routed_total: u64,
    pub primary: u64,
    pub rerouted: u64,
    pub dropped: u64,
    pub skipped: u64,
}

impl TrafficStats {
    fn record(&mut self, outcome: Outcome, size: u32) {
        match outcome {
            Outcome::Primary => {
                self.routed_total += size as u64;
                self.primary += 1;
            }
            Outcome::Rerouted(_) => {
                self.routed_total += size as u64;
                self.rerouted += 1;
            }
            Outcome::Dropped => self.dropped += 1,
            Outcome::Skipped => self.skipped += 1,
        }
    }

    /// 归并另一份局部统计
    pub fn merge(&mut self, other: &TrafficStats) {
        self.routed_total += other.routed_total;
        self.primary += other.primary;
        self.rerouted += other.rerouted;
        self.dropped += other.dropped;
        self.skipped += other.skipped;
    }
}

/// 处理单条需求：先直连，失败则按下标序扫描中转节点首次适配，
/// 仍失败则丢弃。改道只预约 `(src, i)` 一跳。
pub fn admit(
    demand: Demand,
    dist: &SquareMatrix,
    capacity: &SquareMatrix,
    load: &LoadTracker,
) -> Outcome {
    let Demand { src, dst, size } = demand;
    if src == dst || dist.get(src.0, dst.0) == INF {
        return Outcome::Skipped;
    }

    if load.try_reserve(src, dst, size, capacity.get(src.0, dst.0)) {
        trace!(src = src.0, dst = dst.0, size, load = load.current(src, dst), "主路径承载流量");
        return Outcome::Primary;
    }

    for i in 0..dist.n() {
        if i == src.0 {
            continue;
        }
        if dist.get(src.0, i) == INF || dist.get(i, dst.0) == INF {
            continue;
        }
        let via = NodeId(i);
        if load.try_reserve(src, via, size, capacity.get(src.0, i)) {
            trace!(
                src = src.0,
                via = i,
                dst = dst.0,
                size,
                load = load.current(src, via),
                "单跳改道承载流量"
            );
            return Outcome::Rerouted(via);
        }
    }

    Outcome::Dropped
}

/// 共享内存形态：`workers` 个线程共享一个负载矩阵，事件下标按
/// 连续区间静态划分。返回归并后的全局统计。
pub fn run_shared(
    dist: &SquareMatrix,
    capacity: &SquareMatrix,
    load: &LoadTracker,
    opts: &SimOpts,
) -> TrafficStats {
    let workers = opts.workers.max(1);
    let chunk = opts.simulations.div_ceil(workers as u64);

    let locals: Vec<TrafficStats> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|w| {
                scope.spawn(move || {
                    let lo = w as u64 * chunk;
                    let hi = opts.simulations.min(lo + chunk);
                    let mut demands =
                        DemandGen::for_worker(opts.seed, w, dist.n(), opts.max_packet);
                    let mut local = TrafficStats::default();
                    for _ in lo..hi {
                        let demand = demands.next();
                        local.record(admit(demand, dist, capacity, load), demand.size);
                    }
                    debug!(worker = w, events = hi.saturating_sub(lo), routed = local.routed_total, "worker 局部统计");
                    local
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().expect("traffic worker panicked")).collect()
    });

    let mut total = TrafficStats::default();
    for local in &locals {
        total.merge(local);
    }
    total
}

/// 复制式形态：每个 worker 独立记账（私有负载矩阵），事件下标
/// 轮转分配。返回 (归并统计, 各 worker 的负载快照)。
pub fn run_replicated(
    dist: &SquareMatrix,
    capacity: &SquareMatrix,
    opts: &SimOpts,
) -> (TrafficStats, Vec<SquareMatrix>) {
    let workers = opts.workers.max(1);

    let locals: Vec<(TrafficStats, SquareMatrix)> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|w| {
                scope.spawn(move || {
                    let load = LoadTracker::new(dist.n());
                    let mut demands =
                        DemandGen::for_worker(opts.seed, w, dist.n(), opts.max_packet);
                    let mut local = TrafficStats::default();
                    for _ in (w as u64..opts.simulations).step_by(workers) {
                        let demand = demands.next();
                        local.record(admit(demand, dist, capacity, &load), demand.size);
                    }
                    debug!(worker = w, routed = local.routed_total, "worker 局部统计");
                    (local, load.snapshot())
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().expect("traffic worker panicked")).collect()
    });

    let mut total = TrafficStats::default();
    let mut snapshots = Vec::with_capacity(locals.len());
    for (local, snap) in locals {
        total.merge(&local);
        snapshots.push(snap);
    }
    (total, snapshots)
}
