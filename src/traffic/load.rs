//! 链路负载跟踪
//!
//! 每条有向链路一个原子计数器，记录当前已预约的累计负载。
//! 预约采用"读取-比较-交换"循环：容量检查与自增是同一个
//! 原子步骤，并发竞争同一链路的两个 worker 不可能都通过
//! 检查而合计超出容量。

use std::sync::atomic::{AtomicU32, Ordering};

use crate::graph::{NodeId, SquareMatrix};

/// 链路负载矩阵（共享可变，按单元原子更新）。
#[derive(Debug)]
pub struct LoadTracker {
    n: usize,
    cells: Vec<AtomicU32>,
}

impl LoadTracker {
    /// 创建 n×n 全零负载矩阵
    pub fn new(n: usize) -> Self {
        let mut cells = Vec::with_capacity(n * n);
        cells.resize_with(n * n, || AtomicU32::new(0));
        Self { n, cells }
    }

    /// 节点数
    pub fn n(&self) -> usize {
        self.n
    }

    /// 当前负载（瞬时读取）
    pub fn current(&self, from: NodeId, to: NodeId) -> u32 {
        self.cells[from.0 * self.n + to.0].load(Ordering::Relaxed)
    }

    /// 原子检查并预约：若 `当前负载 + size ≤ cap` 则预约成功。
    ///
    /// 失败不留任何副作用。任何时刻单元值都不会超过该链路容量。
    pub fn try_reserve(&self, from: NodeId, to: NodeId, size: u32, cap: u32) -> bool {
        let cell = &self.cells[from.0 * self.n + to.0];
        let mut cur = cell.load(Ordering::Relaxed);
        loop {
            if size > cap || cur > cap - size {
                return false;
            }
            match cell.compare_exchange_weak(cur, cur + size, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return true,
                Err(seen) => cur = seen,
            }
        }
    }

    /// 拍一份普通矩阵快照（仿真结束后用于报告与校验）
    pub fn snapshot(&self) -> SquareMatrix {
        let flat: Vec<u32> = self
            .cells
            .iter()
            .map(|c| c.load(Ordering::Relaxed))
            .collect();
        SquareMatrix::from_rows(self.n, flat)
    }
}
