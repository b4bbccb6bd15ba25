//! 随机拓扑生成
//!
//! 以确定性种子生成合成网络拓扑：对角线为 0，边权在
//! `[1, max_weight]` 内均匀取值，按 `edge_probability` 决定
//! 链路是否存在（缺失的链路记为 `INF`）；容量矩阵统一填充
//! `max_bandwidth`。

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::matrix::{INF, SquareMatrix};
use super::store::GraphStore;

/// 随机拓扑配置选项
#[derive(Debug, Clone)]
pub struct TopologyOpts {
    pub nodes: usize,
    /// 边权上限（含）
    pub max_weight: u32,
    /// 每条有向边存在的概率；1.0 表示全连通
    pub edge_probability: f64,
    /// 所有链路的统一带宽容量
    pub max_bandwidth: u32,
    pub seed: u64,
}

impl Default for TopologyOpts {
    fn default() -> Self {
        Self {
            nodes: 150,
            max_weight: 20,
            edge_probability: 1.0,
            max_bandwidth: 100,
            seed: 0,
        }
    }
}

/// 生成随机拓扑
///
/// 相同的 `TopologyOpts`（含种子）总是生成相同的图。
pub fn build_random_topology(opts: &TopologyOpts) -> GraphStore {
    let n = opts.nodes;
    let mut rng = StdRng::seed_from_u64(opts.seed);
    let mut dist = SquareMatrix::filled(n, INF);

    for i in 0..n {
        for j in 0..n {
            if i == j {
                dist.set(i, j, 0);
                continue;
            }
            if opts.edge_probability >= 1.0 || rng.gen_bool(opts.edge_probability) {
                dist.set(i, j, rng.gen_range(1..=opts.max_weight));
            }
        }
    }

    let capacity = SquareMatrix::filled(n, opts.max_bandwidth);
    GraphStore::new(dist, capacity)
}
