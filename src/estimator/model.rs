use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Probability that a censored transaction lands within `blocks`
/// consecutive blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InclusionPoint {
    pub blocks: u32,
    pub probability: f64,
}

/// Minimal number of blocks after which cumulative inclusion probability
/// reaches `target_rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitingPoint {
    pub target_rate: f64,
    pub blocks: u64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    /// Compliance rate outside [0, 1]. Never clamped.
    #[error("compliance rate {0} is outside [0, 1]")]
    InvalidRate(f64),

    /// Target inclusion probability outside the open interval (0, 1).
    #[error("target inclusion rate {0} is outside (0, 1)")]
    InvalidTarget(f64),

    /// A block count of zero; inclusion is defined from the first block on.
    #[error("block count must be >= 1")]
    InvalidBlockCount,

    /// Rate of 1 (or within epsilon of it): every producer censors, so no
    /// finite waiting period reaches any target.
    #[error("waiting period is undefined at compliance rate {0}")]
    UndefinedWaitingPeriod(f64),
}
