//! 需求生成
//!
//! 每个 worker 持有独立的伪随机源，种子由基础种子与 worker 编号
//! 确定性推导，保证相同配置下整条需求流可复现，且 worker 之间
//! 不共享生成器（避免无谓的争用与调度噪声）。

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::NodeId;

/// 一次流量需求：(源, 目的, 包大小)。即用即弃，不存储。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Demand {
    pub src: NodeId,
    pub dst: NodeId,
    pub size: u32,
}

/// 单 worker 需求生成器
#[derive(Debug)]
pub struct DemandGen {
    rng: StdRng,
    nodes: usize,
    max_packet: u32,
}

impl DemandGen {
    /// 以 (基础种子, worker 编号) 派生生成器
    pub fn for_worker(seed: u64, worker: usize, nodes: usize, max_packet: u32) -> Self {
        let derived = seed ^ (worker as u64).wrapping_mul(0x9E3779B97F4A7C15);
        Self {
            rng: StdRng::seed_from_u64(derived),
            nodes,
            max_packet,
        }
    }

    /// 抽取下一条需求：源/目的均匀取自节点空间（可能相等，由
    /// 准入流程按跳过处理），大小在 `[1, max_packet]` 内均匀取值。
    pub fn next(&mut self) -> Demand {
        Demand {
            src: NodeId(self.rng.gen_range(0..self.nodes)),
            dst: NodeId(self.rng.gen_range(0..self.nodes)),
            size: self.rng.gen_range(1..=self.max_packet),
        }
    }
}
