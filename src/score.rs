//! Score Calculator - Fixed Additive Penalties
//!
//! Penalties are additive and independent; no interaction terms. The gate's
//! 60/80 band thresholds were tuned against this additive model, so any
//! non-linear combination here is a behavior change that must be reflected
//! in the band policy too.

use crate::analysis::{Warning, WarningSet};

pub const MAX_SCORE: u32 = 100;

impl Warning {
    /// Fixed deduction when this flag is raised.
    pub fn penalty(self) -> u32 {
        match self {
            Warning::LogoTooLarge => 30,
            Warning::LowContrast => 25,
            Warning::ComplexGradient => 15,
            Warning::CornerPositionRisk => 10,
            Warning::SmallQrSize => 15,
        }
    }
}

/// Map a warning set to a 0-100 score. With the current penalties the worst
/// case is 5, so the floor never engages; the saturation keeps the bound
/// explicit for any future penalty change.
pub fn score(warnings: &WarningSet) -> u32 {
    Warning::ALL
        .iter()
        .filter(|w| warnings.contains(**w))
        .fold(MAX_SCORE, |acc, w| acc.saturating_sub(w.penalty()))
}
