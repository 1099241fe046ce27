use crate::estimator::{InclusionPoint, WaitingPoint};
use crate::observation::RelayStat;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Latest estimate, recomputed in full on every ingested observation.
/// Only the previous window's rate survives a rotation (for the delta
/// figure); nothing older is kept.
#[derive(Debug, Clone)]
pub struct EstimateSnapshot {
    pub rate: f64,
    pub previous_rate: Option<f64>,
    pub observed_at: i64,
    pub window_start: Option<i64>,
    pub window_end: Option<i64>,
    pub inclusion: Vec<InclusionPoint>,
    /// None when the rate is 1: no finite waiting period exists.
    pub waiting: Option<Vec<WaitingPoint>>,
}

/// Shared application state: the latest snapshot, nothing else.
#[derive(Default)]
pub struct AppState {
    pub snapshot: Mutex<Option<EstimateSnapshot>>,
}

/* ---------- Observation API Models ---------- */

#[derive(Deserialize)]
pub struct ObservationRequest {
    /// Window bounds as Unix timestamps (informational, echoed back).
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub total_blocks: u64,
    pub relay_stats: Vec<RelayStat>,
}

#[derive(Serialize)]
pub struct ObservationResponse {
    pub rate: f64,
    pub previous_rate: Option<f64>,
    pub delta: Option<f64>,
}

/* ---------- Estimate API Models ---------- */

/// One waiting-period row with the block count converted to wall-clock
/// seconds for display.
#[derive(Serialize, Deserialize)]
pub struct WaitingRow {
    pub target_rate: f64,
    pub blocks: u64,
    pub wait_secs: u64,
}

#[derive(Serialize, Deserialize)]
pub struct EstimateResponse {
    pub rate: f64,
    pub previous_rate: Option<f64>,
    pub delta: Option<f64>,
    pub observed_at: i64,
    pub window_start: Option<i64>,
    pub window_end: Option<i64>,
    pub inclusion: Vec<InclusionPoint>,
    pub waiting: Option<Vec<WaitingRow>>,
}

#[derive(Deserialize)]
pub struct AdhocEstimateRequest {
    pub rate: f64,
    pub block_counts: Option<Vec<u32>>,
    pub target_rates: Option<Vec<f64>>,
}

#[derive(Serialize, Deserialize)]
pub struct AdhocEstimateResponse {
    pub rate: f64,
    pub inclusion: Vec<InclusionPoint>,
    pub waiting: Vec<WaitingRow>,
}
