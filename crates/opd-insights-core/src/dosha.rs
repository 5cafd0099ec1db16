//! Simulated dosha distribution.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Sample;

pub const VATA_RANGE: RangeInclusive<u32> = 30..=60;
pub const PITTA_RANGE: RangeInclusive<u32> = 20..=40;
pub const KAPHA_RANGE: RangeInclusive<u32> = 10..=30;

/// The dominant dosha reported by every trends response. It is not derived
/// from the sampled values.
pub const REPORTED_DOMINANT: Dosha = Dosha::Vata;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

/// Questionnaire answers for a dosha assessment.
///
/// Accepted as an input shape only; no route reads it yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoshaInput {
    pub answers: Vec<i64>,
}

/// Response of `GET /analyze/dosha-trends`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoshaTrends {
    pub vata: u32,
    pub pitta: u32,
    pub kapha: u32,
    pub dominant: Dosha,
}

impl Sample for DoshaTrends {
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            vata: rng.gen_range(VATA_RANGE),
            pitta: rng.gen_range(PITTA_RANGE),
            kapha: rng.gen_range(KAPHA_RANGE),
            dominant: REPORTED_DOMINANT,
        }
    }
}
