//! Trend analysis handlers.

use axum::Json;
use opd_insights_core::{DoshaTrends, RemedyTrends, Sample};
use tracing::debug;

/// GET /analyze/dosha-trends - Simulated dosha distribution.
pub async fn dosha_trends() -> Json<DoshaTrends> {
    let trends = DoshaTrends::sample(&mut rand::thread_rng());
    debug!(vata = trends.vata, pitta = trends.pitta, kapha = trends.kapha, "Sampled dosha trends");
    Json(trends)
}

/// GET /analyze/remedy-trends - Simulated remedy effectiveness.
pub async fn remedy_trends() -> Json<RemedyTrends> {
    let trends = RemedyTrends::sample(&mut rand::thread_rng());
    debug!(
        top_remedy = %trends.top_remedy,
        effectiveness = trends.effectiveness,
        cases_treated = trends.cases_treated,
        "Sampled remedy trends"
    );
    Json(trends)
}
