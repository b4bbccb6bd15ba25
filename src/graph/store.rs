//! 图数据存储
//!
//! 持有一次运行的有向带权邻接矩阵（距离/成本）与并行的容量矩阵
//! （每条有向链路的最大可容纳累计负载）。纯数据，仅提供访问器。

use super::NodeId;
use super::matrix::SquareMatrix;

/// 图数据存储：距离矩阵 + 容量矩阵。
///
/// 距离矩阵在最短路计算时被原地改写；容量矩阵在整个运行期间不变。
#[derive(Debug, Clone)]
pub struct GraphStore {
    dist: SquareMatrix,
    capacity: SquareMatrix,
}

impl GraphStore {
    /// 由距离矩阵与容量矩阵构造；两者边长必须一致。
    pub fn new(dist: SquareMatrix, capacity: SquareMatrix) -> Self {
        assert_eq!(
            dist.n(),
            capacity.n(),
            "distance and capacity matrices must agree on node count"
        );
        Self { dist, capacity }
    }

    /// 节点数
    pub fn node_count(&self) -> usize {
        self.dist.n()
    }

    /// 距离矩阵（只读）
    pub fn dist(&self) -> &SquareMatrix {
        &self.dist
    }

    /// 距离矩阵（可变，供最短路引擎原地松弛）
    pub fn dist_mut(&mut self) -> &mut SquareMatrix {
        &mut self.dist
    }

    /// 容量矩阵（只读；运行期间固定）
    pub fn capacity(&self) -> &SquareMatrix {
        &self.capacity
    }

    /// 单条有向链路的容量
    pub fn link_capacity(&self, from: NodeId, to: NodeId) -> u32 {
        self.capacity.get(from.0, to.0)
    }
}
