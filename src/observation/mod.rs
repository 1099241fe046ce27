use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Block production attributed to one relay over the observation window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayStat {
    pub num_blocks: u64,
    pub is_censoring: bool,
}

/// Aggregate per-relay block statistics for one observation window, as
/// supplied by the upstream data provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockStats {
    pub total_blocks: u64,
    pub relay_stats: Vec<RelayStat>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObservationError {
    /// Window with no blocks at all; the rate is undefined and the
    /// estimator must not be invoked for it.
    #[error("observation window contains no blocks")]
    EmptyWindow,

    /// Censoring relays claim more blocks than the window holds.
    #[error("censored block count {censored} exceeds total {total}")]
    CensoredExceedsTotal { censored: u128, total: u64 },
}

impl BlockStats {
    /// Reduce the window to a compliance rate: the fraction of blocks
    /// produced by censoring relays.
    pub fn compliance_rate(&self) -> Result<f64, ObservationError> {
        if self.total_blocks == 0 {
            return Err(ObservationError::EmptyWindow);
        }

        // Sum in u128: wire-supplied counts may overflow u64 in aggregate.
        let censored: u128 = self
            .relay_stats
            .iter()
            .filter(|s| s.is_censoring)
            .map(|s| s.num_blocks as u128)
            .sum();

        if censored > self.total_blocks as u128 {
            return Err(ObservationError::CensoredExceedsTotal {
                censored,
                total: self.total_blocks,
            });
        }

        Ok(censored as f64 / self.total_blocks as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(total: u64, relays: &[(u64, bool)]) -> BlockStats {
        BlockStats {
            total_blocks: total,
            relay_stats: relays
                .iter()
                .map(|&(num_blocks, is_censoring)| RelayStat {
                    num_blocks,
                    is_censoring,
                })
                .collect(),
        }
    }

    #[test]
    fn rate_is_censored_over_total() {
        let s = stats(100, &[(40, true), (13, true), (47, false)]);
        assert_eq!(s.compliance_rate(), Ok(0.53));
    }

    #[test]
    fn no_censoring_relays_means_zero_rate() {
        let s = stats(50, &[(30, false), (20, false)]);
        assert_eq!(s.compliance_rate(), Ok(0.0));

        let s = stats(50, &[]);
        assert_eq!(s.compliance_rate(), Ok(0.0));
    }

    #[test]
    fn all_censoring_means_full_rate() {
        let s = stats(10, &[(10, true)]);
        assert_eq!(s.compliance_rate(), Ok(1.0));
    }

    #[test]
    fn empty_window_is_refused() {
        let s = stats(0, &[(1, true)]);
        assert_eq!(s.compliance_rate(), Err(ObservationError::EmptyWindow));
    }

    #[test]
    fn inconsistent_counts_are_refused() {
        let s = stats(10, &[(7, true), (8, true)]);
        assert_eq!(
            s.compliance_rate(),
            Err(ObservationError::CensoredExceedsTotal {
                censored: 15,
                total: 10
            })
        );
    }

    #[test]
    fn censored_sum_past_u64_is_refused_not_wrapped() {
        // A wrapped u64 sum would slip back under total_blocks.
        let s = stats(10, &[(u64::MAX, true), (2, true)]);
        assert_eq!(
            s.compliance_rate(),
            Err(ObservationError::CensoredExceedsTotal {
                censored: u64::MAX as u128 + 2,
                total: 10
            })
        );
    }
}
