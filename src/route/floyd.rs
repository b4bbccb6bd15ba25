//! Floyd–Warshall 松弛
//!
//! 原地将距离矩阵改写为全源最短距离。无负权；恰好执行 N 轮
//! 松弛后必然终止，无错误路径。

use std::sync::Barrier;
use std::sync::atomic::{AtomicU32, Ordering};

use tracing::debug;

use crate::graph::{INF, SquareMatrix};

/// 串行全源最短路
///
/// 对每个中转点 k、每个有序点对 (i, j)：若 `dist[i][k]` 与
/// `dist[k][j]` 均有限，则用两段之和尝试收紧 `dist[i][j]`。
/// 幂等：对已是最短的矩阵再跑一遍不产生任何变化。
pub fn shortest_paths(dist: &mut SquareMatrix) {
    let n = dist.n();
    for k in 0..n {
        for i in 0..n {
            let dik = dist.get(i, k);
            if dik == INF {
                continue;
            }
            for j in 0..n {
                let dkj = dist.get(k, j);
                if dkj == INF {
                    continue;
                }
                let relaxed = dik.saturating_add(dkj);
                if relaxed < dist.get(i, j) {
                    dist.set(i, j, relaxed);
                }
            }
        }
    }
}

/// 共享内存并行全源最短路
///
/// 行区间静态划分给 `workers` 个线程；矩阵单元转为 `AtomicU32`
/// 以便跨线程读取第 k 行。每轮 k 内：
/// - 每个单元只被其行的属主线程写入，写写无竞争；
/// - 第 k 行在本轮内不会被改写（对角线恒为 0，松弛不可能再
///   收紧 `dist[k][j]`），跨线程读取无竞争；
/// - 轮末屏障保证第 k+1 轮能看到第 k 轮的全部更新。
///
/// 输出与串行版逐位一致。
pub fn shortest_paths_parallel(dist: &mut SquareMatrix, workers: usize) {
    let n = dist.n();
    let workers = workers.clamp(1, n.max(1));
    if workers <= 1 || n < 2 {
        shortest_paths(dist);
        return;
    }

    debug!(n, workers, "并行最短路：按行划分 + 每轮 k 屏障");

    let flat = std::mem::replace(dist, SquareMatrix::filled(0, 0)).into_cells();
    let cells: Vec<AtomicU32> = flat.into_iter().map(AtomicU32::new).collect();

    let rows_per_worker = n.div_ceil(workers);
    let barrier = Barrier::new(workers);

    std::thread::scope(|scope| {
        for w in 0..workers {
            let cells = &cells;
            let barrier = &barrier;
            scope.spawn(move || {
                let lo = w * rows_per_worker;
                let hi = n.min(lo + rows_per_worker);
                for k in 0..n {
                    for i in lo..hi {
                        let dik = cells[i * n + k].load(Ordering::Relaxed);
                        if dik != INF {
                            for j in 0..n {
                                let dkj = cells[k * n + j].load(Ordering::Relaxed);
                                if dkj == INF {
                                    continue;
                                }
                                let relaxed = dik.saturating_add(dkj);
                                let cell = &cells[i * n + j];
                                if relaxed < cell.load(Ordering::Relaxed) {
                                    cell.store(relaxed, Ordering::Relaxed);
                                }
                            }
                        }
                    }
                    // k+1 轮依赖本轮全部行的更新，必须在此会合
                    barrier.wait();
                }
            });
        }
    });

    let flat: Vec<u32> = cells.into_iter().map(AtomicU32::into_inner).collect();
    *dist = SquareMatrix::from_rows(n, flat);
}
