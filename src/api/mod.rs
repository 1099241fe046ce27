mod estimate;
mod health;
pub mod models;
mod observe;

use actix_web::web::{self, ServiceConfig};

pub use models::AppState;

/// Wall-clock seconds per block in the observed deployment; presentation
/// only, the estimator itself deals in block counts.
pub const SECONDS_PER_BLOCK: u64 = 12;

pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(health::health_check)
            .service(observe::post_observation)
            .service(estimate::get_estimate)
            .service(estimate::post_estimate),
    );
}
