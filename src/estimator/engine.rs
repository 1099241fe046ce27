use super::RATE_EPSILON;
use super::model::{EstimateError, InclusionPoint, WaitingPoint};

/// Probability of inclusion within each requested block count, assuming a
/// fraction `rate` of block producers censors the transaction in every
/// block independently: `1 - rate^n`.
///
/// Preserves the order of `block_counts`; an empty slice yields an empty
/// table.
pub fn inclusion_probability(
    rate: f64,
    block_counts: &[u32],
) -> Result<Vec<InclusionPoint>, EstimateError> {
    check_rate(rate)?;

    let mut points = Vec::with_capacity(block_counts.len());
    for &blocks in block_counts {
        if blocks == 0 {
            return Err(EstimateError::InvalidBlockCount);
        }
        points.push(InclusionPoint {
            blocks,
            probability: 1.0 - rate.powf(f64::from(blocks)),
        });
    }
    Ok(points)
}

/// Minimal number of blocks to wait for each target inclusion probability:
/// the smallest integer `n >= 0` with `1 - rate^n >= target`, solved as
/// `ceil(ln(1 - target) / ln(rate))` and corrected to exact minimality.
///
/// Fails with `UndefinedWaitingPeriod` when `rate` is 1 (or within
/// `RATE_EPSILON` of it): no finite wait reaches any target. A `rate` of 0
/// yields 0 blocks for every target.
pub fn waiting_period(
    rate: f64,
    target_rates: &[f64],
) -> Result<Vec<WaitingPoint>, EstimateError> {
    check_rate(rate)?;
    if rate >= 1.0 - RATE_EPSILON {
        return Err(EstimateError::UndefinedWaitingPeriod(rate));
    }

    let mut points = Vec::with_capacity(target_rates.len());
    for &target in target_rates {
        if !(target > 0.0 && target < 1.0) {
            return Err(EstimateError::InvalidTarget(target));
        }
        points.push(WaitingPoint {
            target_rate: target,
            blocks: solve_blocks(rate, target),
        });
    }
    Ok(points)
}

fn check_rate(rate: f64) -> Result<(), EstimateError> {
    if !(0.0..=1.0).contains(&rate) {
        return Err(EstimateError::InvalidRate(rate));
    }
    Ok(())
}

/// Smallest `n` with `1 - rate^n >= target`, for `rate` in [0, 1-eps).
fn solve_blocks(rate: f64, target: f64) -> u64 {
    if rate == 0.0 {
        return 0;
    }

    let reaches = |n: u64| 1.0 - rate.powf(n as f64) >= target;

    // Closed form, then nudge: the ceiling can land one block off when the
    // ratio is within rounding error of an integer.
    let mut n = ((1.0 - target).ln() / rate.ln()).ceil() as u64;
    while n > 0 && reaches(n - 1) {
        n -= 1;
    }
    while !reaches(n) {
        n += 1;
    }
    n
}
