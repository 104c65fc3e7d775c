//! 随机数来源 - 基础设施层
//!
//! 持有随机数生成器，只暴露"抽一个数"的能力

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 随机数来源
///
/// 职责：
/// - 提供 `[0, 1)` 区间的均匀浮点数
/// - 提供 `[0, upper)` 区间的均匀整数
/// - 不认识答案表 / 分数区间
pub trait RandomSource {
    /// 抽取 `[0, 1)` 内的均匀浮点数
    fn next_unit(&mut self) -> f64;

    /// 抽取 `[0, upper)` 内的均匀整数，`upper` 必须大于 0
    fn next_index(&mut self, upper: usize) -> usize;
}

/// 基于 `rand` 的随机数来源
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// 包装已有的随机数生成器
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// 使用固定种子创建（可复现）
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// 使用系统熵创建
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn next_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }
}

/// 预设序列的随机数来源
///
/// 按顺序循环返回预先给定的值，用于复现某一次作答或在测试中精确控制分支
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    units: Vec<f64>,
    indices: Vec<usize>,
    unit_pos: usize,
    index_pos: usize,
}

impl ScriptedSource {
    /// 创建预设序列
    ///
    /// 空序列分别视为 `[0.0]` 和 `[0]`
    pub fn new(units: Vec<f64>, indices: Vec<usize>) -> Self {
        let units = if units.is_empty() { vec![0.0] } else { units };
        let indices = if indices.is_empty() { vec![0] } else { indices };
        Self {
            units,
            indices,
            unit_pos: 0,
            index_pos: 0,
        }
    }

    /// 已消耗的浮点数个数
    pub fn units_drawn(&self) -> usize {
        self.unit_pos
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let value = self.units[self.unit_pos % self.units.len()];
        self.unit_pos += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }

    fn next_index(&mut self, upper: usize) -> usize {
        let value = self.indices[self.index_pos % self.indices.len()];
        self.index_pos += 1;
        value % upper.max(1)
    }
}
