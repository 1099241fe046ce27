pub mod engine;
pub mod model;

pub use engine::{inclusion_probability, waiting_period};
pub use model::{EstimateError, InclusionPoint, WaitingPoint};

/// Block-count columns of the inclusion table.
pub const DEFAULT_BLOCK_COUNTS: [u32; 4] = [1, 5, 10, 25];

/// Target inclusion probabilities of the waiting-period table.
pub const DEFAULT_TARGET_RATES: [f64; 4] = [0.25, 0.5, 0.75, 0.9999];

/// Rates at or above `1 - RATE_EPSILON` leave `ln(p)` too close to zero
/// to solve for a finite waiting period.
pub const RATE_EPSILON: f64 = 1e-12;
