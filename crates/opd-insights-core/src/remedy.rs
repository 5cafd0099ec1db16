//! Simulated remedy effectiveness.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Sample;

pub const EFFECTIVENESS_RANGE: RangeInclusive<u32> = 70..=95;
pub const CASES_TREATED_RANGE: RangeInclusive<u32> = 10..=50;

/// Closed set of remedies a trends response can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Remedy {
    #[serde(rename = "Arnica Montana")]
    ArnicaMontana,
    #[serde(rename = "Nux Vomica")]
    NuxVomica,
    #[serde(rename = "Belladonna")]
    Belladonna,
    #[serde(rename = "Rhus Tox")]
    RhusTox,
}

impl Remedy {
    pub const ALL: [Remedy; 4] = [
        Remedy::ArnicaMontana,
        Remedy::NuxVomica,
        Remedy::Belladonna,
        Remedy::RhusTox,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Remedy::ArnicaMontana => "Arnica Montana",
            Remedy::NuxVomica => "Nux Vomica",
            Remedy::Belladonna => "Belladonna",
            Remedy::RhusTox => "Rhus Tox",
        }
    }
}

impl std::fmt::Display for Remedy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response of `GET /analyze/remedy-trends`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemedyTrends {
    pub top_remedy: Remedy,
    pub effectiveness: u32,
    pub cases_treated: u32,
}

impl Sample for RemedyTrends {
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let top_remedy = Remedy::ALL[rng.gen_range(0..Remedy::ALL.len())];

        Self {
            top_remedy,
            effectiveness: rng.gen_range(EFFECTIVENESS_RANGE),
            cases_treated: rng.gen_range(CASES_TREATED_RANGE),
        }
    }
}
