//! 运行编排模块
//!
//! 此模块包含场景配置（JSON 可加载）与运行协调器：
//! 拓扑初始化 → 最短路计算（计时）→ 流量仿真（计时）→
//! 归并与报告。

// 子模块声明
mod coordinator;
mod scenario;

// 重新导出公共接口
pub use coordinator::{DeployMode, RunCoordinator, RunReport};
pub use scenario::{ScenarioError, ScenarioSpec};
