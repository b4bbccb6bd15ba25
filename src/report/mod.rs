//! 报告模块
//!
//! 矩阵的人类可读渲染与 CSV 工件导出。CSV 写入失败是本 crate
//! 唯一的 I/O 故障：上层记日志后继续运行，不中止。

// 子模块声明
mod csv;
mod render;

// 重新导出公共接口
pub use csv::write_matrix_csv;
pub use render::render_matrix;

use std::path::PathBuf;

/// 报告工件错误
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("unable to write CSV artifact {}: {source}", .path.display())]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
