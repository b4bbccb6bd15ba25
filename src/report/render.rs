//! 矩阵文本渲染
//!
//! 按行渲染整数方阵：有限值固定 4 位宽，不可达哨兵渲染为 INF。

use std::fmt::Write as _;

use crate::graph::{INF, SquareMatrix};

/// 渲染带标题的矩阵文本
pub fn render_matrix(matrix: &SquareMatrix, label: &str) -> String {
    let n = matrix.n();
    let mut out = String::new();
    let _ = writeln!(out, "\n{label}:");
    for i in 0..n {
        for j in 0..n {
            let v = matrix.get(i, j);
            if v == INF {
                out.push_str(" INF ");
            } else {
                let _ = write!(out, "{v:4} ");
            }
        }
        out.push('\n');
    }
    out
}
