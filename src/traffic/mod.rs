//! 流量仿真模块
//!
//! 此模块包含流量仿真的核心组件：链路负载跟踪（原子预约）、
//! 每 worker 独立种子的需求生成，以及两种部署形态的准入仿真。

// 子模块声明
mod demand;
mod load;
mod sim;

// 重新导出公共接口
pub use demand::{Demand, DemandGen};
pub use load::LoadTracker;
pub use sim::{Outcome, SimOpts, TrafficStats, admit, run_replicated, run_shared};
