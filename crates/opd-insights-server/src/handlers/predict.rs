//! Prediction handlers.

use axum::Json;
use opd_insights_core::{OpdLoadForecast, Sample};
use tracing::debug;

/// GET /predict/opd-load - Simulated current and next-hour OPD load.
pub async fn opd_load() -> Json<OpdLoadForecast> {
    let forecast = OpdLoadForecast::sample(&mut rand::thread_rng());

    debug!(
        current_load = forecast.current_load,
        predicted_next_hour = forecast.predicted_next_hour,
        status = ?forecast.status,
        "Sampled OPD load"
    );

    Json(forecast)
}
