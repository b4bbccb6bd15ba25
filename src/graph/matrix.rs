//! 方阵存储
//!
//! 定义按行优先平铺存储的 N×N 整数方阵，是距离矩阵、
//! 容量矩阵与负载快照共用的底层结构。

use std::ops::{Index, IndexMut};

/// 不可达距离哨兵值。
///
/// 参与松弛前必须显式判有限性；`saturating_add` 保证任何含 INF
/// 的求和不会回绕成一个"更短"的假路径。
pub const INF: u32 = u32::MAX;

/// 行优先平铺的 N×N 方阵。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareMatrix {
    n: usize,
    cells: Vec<u32>,
}

impl SquareMatrix {
    /// 创建全部填充 `fill` 的 n×n 方阵
    pub fn filled(n: usize, fill: u32) -> Self {
        Self {
            n,
            cells: vec![fill; n * n],
        }
    }

    /// 由平铺数据构造；`cells.len()` 必须等于 `n * n`。
    pub fn from_rows(n: usize, cells: Vec<u32>) -> Self {
        assert_eq!(cells.len(), n * n, "cell count must be n*n");
        Self { n, cells }
    }

    /// 节点数（矩阵边长）
    pub fn n(&self) -> usize {
        self.n
    }

    /// 按 (行, 列) 读取
    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.n + j]
    }

    /// 按 (行, 列) 写入
    pub fn set(&mut self, i: usize, j: usize, v: u32) {
        self.cells[i * self.n + j] = v;
    }

    /// 平铺只读视图
    pub fn as_slice(&self) -> &[u32] {
        &self.cells
    }

    /// 消费自身，取出平铺数据
    pub fn into_cells(self) -> Vec<u32> {
        self.cells
    }

    /// 所有单元之和（用于负载矩阵与总流量的守恒校验）
    pub fn cell_sum(&self) -> u64 {
        self.cells.iter().map(|&v| v as u64).sum()
    }
}

impl Index<(usize, usize)> for SquareMatrix {
    type Output = u32;

    fn index(&self, (i, j): (usize, usize)) -> &u32 {
        &self.cells[i * self.n + j]
    }
}

impl IndexMut<(usize, usize)> for SquareMatrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut u32 {
        &mut self.cells[i * self.n + j]
    }
}
