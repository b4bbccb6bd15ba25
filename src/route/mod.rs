//! 最短路模块
//!
//! 对距离矩阵做全源最短路（Floyd–Warshall 三重松弛）。外层 k
//! 迭代之间存在严格的顺序依赖，并行只能发生在单个 k 迭代内部：
//! 共享内存形态按行划分给工作线程，每轮 k 结束后以屏障同步。
//!
//! 复制形态（模拟多进程部署）不切分松弛本身：全矩阵在启动时
//! 整体复制给每个 worker，最短路在单处计算后只读共享，下游的
//! 流量仿真才是该形态真正并行化的部分。这是有意保留的取舍，
//! 不是待修复的缺陷。

mod floyd;

pub use floyd::{shortest_paths, shortest_paths_parallel};
