//! 场景配置
//!
//! 一次运行的全部参数，可由 JSON 文件加载，命令行逐项覆盖。

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// 场景加载错误
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("unable to read scenario file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scenario JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 场景规格
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    /// 节点数
    #[serde(default = "default_nodes")]
    pub nodes: usize,
    /// 统一链路带宽容量（同时是包大小上限）
    #[serde(default = "default_max_bandwidth")]
    pub max_bandwidth: u32,
    /// 边权上限（含）
    #[serde(default = "default_max_weight")]
    pub max_weight: u32,
    /// 每条有向边存在的概率
    #[serde(default = "default_edge_probability")]
    pub edge_probability: f64,
    /// 需求事件总数
    #[serde(default = "default_simulations")]
    pub simulations: u64,
    /// worker（线程）数
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// 拓扑与需求流的基础种子
    #[serde(default)]
    pub seed: u64,
    /// 负载矩阵 CSV 工件输出路径；缺省不导出
    #[serde(default)]
    pub csv_out: Option<PathBuf>,
}

fn default_nodes() -> usize {
    150
}
fn default_max_bandwidth() -> u32 {
    100
}
fn default_max_weight() -> u32 {
    20
}
fn default_edge_probability() -> f64 {
    1.0
}
fn default_simulations() -> u64 {
    5000
}
fn default_workers() -> usize {
    2
}

impl Default for ScenarioSpec {
    fn default() -> Self {
        Self {
            nodes: default_nodes(),
            max_bandwidth: default_max_bandwidth(),
            max_weight: default_max_weight(),
            edge_probability: default_edge_probability(),
            simulations: default_simulations(),
            workers: default_workers(),
            seed: 0,
            csv_out: None,
        }
    }
}

impl ScenarioSpec {
    /// 从 JSON 文件加载
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ScenarioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ScenarioError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
