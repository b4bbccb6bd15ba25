//! CSV 导出
//!
//! 负载矩阵的 CSV 工件：每个节点一行，单元为逗号分隔的整数。

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use super::ReportError;
use crate::graph::SquareMatrix;

/// 将矩阵写为 CSV 文件：`v,v,...,v\n` 逐行重复。
pub fn write_matrix_csv(matrix: &SquareMatrix, path: &Path) -> Result<(), ReportError> {
    let n = matrix.n();
    let mut out = String::new();
    for i in 0..n {
        for j in 0..n {
            if j > 0 {
                out.push(',');
            }
            let _ = write!(out, "{}", matrix.get(i, j));
        }
        out.push('\n');
    }

    fs::write(path, out).map_err(|source| ReportError::CsvWrite {
        path: path.to_path_buf(),
        source,
    })
}
