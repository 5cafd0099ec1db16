//! Simulated OPD load forecast.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Sample;

/// Bounds for the simulated number of patients currently waiting.
pub const CURRENT_LOAD_RANGE: RangeInclusive<u32> = 30..=60;

/// Bounds for the simulated load expected over the next hour.
pub const NEXT_HOUR_LOAD_RANGE: RangeInclusive<u32> = 20..=50;

/// Loads strictly above this value are reported as [`LoadStatus::High`].
pub const HIGH_LOAD_THRESHOLD: u32 = 45;

/// Coarse label attached to the current load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadStatus {
    High,
    Normal,
}

impl LoadStatus {
    pub fn for_load(current_load: u32) -> Self {
        if current_load > HIGH_LOAD_THRESHOLD {
            LoadStatus::High
        } else {
            LoadStatus::Normal
        }
    }
}

/// Response of `GET /predict/opd-load`.
///
/// `predicted_next_hour` is drawn on its own and does not depend on
/// `current_load`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpdLoadForecast {
    pub current_load: u32,
    pub predicted_next_hour: u32,
    pub status: LoadStatus,
}

impl Sample for OpdLoadForecast {
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let predicted_next_hour = rng.gen_range(NEXT_HOUR_LOAD_RANGE);
        let current_load = rng.gen_range(CURRENT_LOAD_RANGE);

        Self {
            current_load,
            predicted_next_hour,
            status: LoadStatus::for_load(current_load),
        }
    }
}
