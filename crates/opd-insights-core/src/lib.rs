//! Payload types and samplers for the OPD insights gateway.
//!
//! Every response the gateway serves is synthesized from uniform random
//! draws. This crate owns the shapes of those payloads and the bounds each
//! numeric field is drawn from:
//!
//! - [`OpdLoadForecast`] — simulated out-patient department load
//! - [`DoshaTrends`] — simulated vata/pitta/kapha distribution
//! - [`RemedyTrends`] — simulated remedy effectiveness
//!
//! # Example
//!
//! ```rust
//! use opd_insights_core::{OpdLoadForecast, Sample, CURRENT_LOAD_RANGE};
//!
//! let forecast = OpdLoadForecast::sample(&mut rand::thread_rng());
//! assert!(CURRENT_LOAD_RANGE.contains(&forecast.current_load));
//! ```

mod dosha;
mod opd;
mod remedy;

pub use dosha::{
    Dosha, DoshaInput, DoshaTrends, KAPHA_RANGE, PITTA_RANGE, REPORTED_DOMINANT, VATA_RANGE,
};
pub use opd::{
    LoadStatus, OpdLoadForecast, CURRENT_LOAD_RANGE, HIGH_LOAD_THRESHOLD, NEXT_HOUR_LOAD_RANGE,
};
pub use remedy::{Remedy, RemedyTrends, CASES_TREATED_RANGE, EFFECTIVENESS_RANGE};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Message reported by the status endpoint.
pub const SERVICE_RUNNING: &str = "ML Service Running";

/// A payload that can be drawn from a random source.
///
/// Implementations draw every field independently; nothing is carried over
/// between calls.
pub trait Sample: Sized {
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

/// Liveness payload returned by the root route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
}

impl ServiceStatus {
    pub fn running() -> Self {
        Self { status: SERVICE_RUNNING.to_string() }
    }
}
