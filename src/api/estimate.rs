use actix_web::{HttpResponse, Responder, get, post, web};
use log::debug;

use super::SECONDS_PER_BLOCK;
use super::models::{
    AdhocEstimateRequest, AdhocEstimateResponse, AppState, EstimateResponse, WaitingRow,
};
use crate::estimator::{
    DEFAULT_BLOCK_COUNTS, DEFAULT_TARGET_RATES, WaitingPoint, inclusion_probability,
    waiting_period,
};

fn to_rows(waiting: &[WaitingPoint]) -> Vec<WaitingRow> {
    waiting
        .iter()
        .map(|w| WaitingRow {
            target_rate: w.target_rate,
            blocks: w.blocks,
            wait_secs: w.blocks * SECONDS_PER_BLOCK,
        })
        .collect()
}

/// Latest estimate, as computed from the most recent observation.
#[get("/estimate/")]
pub async fn get_estimate(state: web::Data<AppState>) -> impl Responder {
    let snapshot = state.snapshot.lock().expect("mutex poisoned");
    let Some(snap) = snapshot.as_ref() else {
        return HttpResponse::NotFound().body("no observation ingested yet");
    };

    HttpResponse::Ok().json(EstimateResponse {
        rate: snap.rate,
        previous_rate: snap.previous_rate,
        delta: snap.previous_rate.map(|prev| snap.rate - prev),
        observed_at: snap.observed_at,
        window_start: snap.window_start,
        window_end: snap.window_end,
        inclusion: snap.inclusion.clone(),
        waiting: snap.waiting.as_deref().map(to_rows),
    })
}

/// Stateless estimate for a caller-supplied rate (e.g. a what-if slider),
/// with optional custom block counts and target rates. Does not touch the
/// ingested snapshot.
#[post("/estimate/")]
pub async fn post_estimate(body: web::Json<AdhocEstimateRequest>) -> impl Responder {
    let block_counts = body
        .block_counts
        .clone()
        .unwrap_or_else(|| DEFAULT_BLOCK_COUNTS.to_vec());
    let target_rates = body
        .target_rates
        .clone()
        .unwrap_or_else(|| DEFAULT_TARGET_RATES.to_vec());

    debug!(
        "POST /estimate/ - rate={}, counts={}, targets={}",
        body.rate,
        block_counts.len(),
        target_rates.len()
    );

    let inclusion = match inclusion_probability(body.rate, &block_counts) {
        Ok(table) => table,
        Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
    };
    let waiting = match waiting_period(body.rate, &target_rates) {
        Ok(table) => table,
        Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
    };

    HttpResponse::Ok().json(AdhocEstimateResponse {
        rate: body.rate,
        inclusion,
        waiting: to_rows(&waiting),
    })
}
