use actix_web::{HttpResponse, Responder, post, web};
use chrono::Utc;
use log::{debug, info, warn};

use super::models::{AppState, EstimateSnapshot, ObservationRequest, ObservationResponse};
use crate::estimator::{
    DEFAULT_BLOCK_COUNTS, DEFAULT_TARGET_RATES, EstimateError, inclusion_probability,
    waiting_period,
};
use crate::observation::BlockStats;

/// Ingest one observation window: reduce the per-relay stats to a
/// compliance rate, recompute both tables and rotate the snapshot. A bad
/// window is rejected and the previous snapshot stays in place.
#[post("/observation/")]
pub async fn post_observation(
    state: web::Data<AppState>,
    body: web::Json<ObservationRequest>,
) -> impl Responder {
    debug!(
        "POST /observation/ - total_blocks={}, relays={}",
        body.total_blocks,
        body.relay_stats.len()
    );

    let stats = BlockStats {
        total_blocks: body.total_blocks,
        relay_stats: body.relay_stats.clone(),
    };

    let rate = match stats.compliance_rate() {
        Ok(rate) => rate,
        Err(e) => {
            warn!("POST /observation/ - rejected: {e}");
            return HttpResponse::BadRequest().body(e.to_string());
        }
    };

    let inclusion = match inclusion_probability(rate, &DEFAULT_BLOCK_COUNTS) {
        Ok(table) => table,
        Err(e) => {
            warn!("POST /observation/ - estimate failed: {e}");
            return HttpResponse::BadRequest().body(e.to_string());
        }
    };

    // A fully censoring window has no finite waiting period; keep the
    // snapshot without that table rather than failing the whole cycle.
    let waiting = match waiting_period(rate, &DEFAULT_TARGET_RATES) {
        Ok(table) => Some(table),
        Err(EstimateError::UndefinedWaitingPeriod(_)) => {
            warn!("POST /observation/ - rate={rate}: waiting period undefined");
            None
        }
        Err(e) => {
            warn!("POST /observation/ - estimate failed: {e}");
            return HttpResponse::BadRequest().body(e.to_string());
        }
    };

    let previous_rate = {
        let mut snapshot = state.snapshot.lock().expect("mutex poisoned");
        let previous_rate = snapshot.as_ref().map(|s| s.rate);
        *snapshot = Some(EstimateSnapshot {
            rate,
            previous_rate,
            observed_at: Utc::now().timestamp(),
            window_start: body.start_time,
            window_end: body.end_time,
            inclusion,
            waiting,
        });
        previous_rate
    };

    info!("POST /observation/ - rate={rate} (previous={previous_rate:?})");

    HttpResponse::Ok().json(ObservationResponse {
        rate,
        previous_rate,
        delta: previous_rate.map(|prev| rate - prev),
    })
}
