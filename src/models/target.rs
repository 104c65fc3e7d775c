use crate::error::{ConfigError, SelectionError};
use crate::infrastructure::RandomSource;
use std::fmt::Display;

/// 目标分数区间（闭区间）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetWindow {
    min_score: usize,
    max_score: usize,
}

impl TargetWindow {
    /// 创建目标分数区间
    ///
    /// 要求 `min_score <= max_score <= total`
    pub fn new(min_score: usize, max_score: usize, total: usize) -> Result<Self, SelectionError> {
        if min_score > max_score || max_score > total {
            return Err(SelectionError::InfeasibleWindow {
                min_score,
                max_score,
                total,
            });
        }
        Ok(Self {
            min_score,
            max_score,
        })
    }

    pub fn min_score(&self) -> usize {
        self.min_score
    }

    pub fn max_score(&self) -> usize {
        self.max_score
    }

    /// 分数是否落在区间内
    pub fn contains(&self, score: usize) -> bool {
        (self.min_score..=self.max_score).contains(&score)
    }
}

impl Display for TargetWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min_score, self.max_score)
    }
}

/// 目标正确率
///
/// 未触发边界约束时，每道题答对的概率。每次作答只抽取一次。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetAccuracy(f64);

impl TargetAccuracy {
    /// 使用固定正确率，取值范围 `[0, 1]`
    pub fn new(value: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::InvalidAccuracyRange {
                min: value,
                max: value,
            });
        }
        Ok(Self(value))
    }

    /// 在 `[min, max]` 内均匀抽取正确率
    pub fn sample(min: f64, max: f64, rng: &mut dyn RandomSource) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&min) || !(0.0..=1.0).contains(&max) || min > max {
            return Err(ConfigError::InvalidAccuracyRange { min, max });
        }
        Ok(Self(min + (max - min) * rng.next_unit()))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Display for TargetAccuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
