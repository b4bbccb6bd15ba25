//! 网络图模块
//!
//! 此模块包含合成网络图的核心数据：节点标识、方阵存储、
//! 距离/容量矩阵以及随机拓扑生成。

// 子模块声明
mod id;
mod matrix;
mod store;
mod topology;

// 重新导出公共接口
pub use id::NodeId;
pub use matrix::{INF, SquareMatrix};
pub use store::GraphStore;
pub use topology::{TopologyOpts, build_random_topology};
