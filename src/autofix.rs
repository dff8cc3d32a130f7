//! Auto-Fixer - Minimal Repairs for Raised Warnings
//!
//! Applies only the corrections the current warning set calls for, in a
//! fixed order, and returns a new config. An empty warning set must come
//! back untouched with `changed = false`; the UI relies on that to decide
//! whether to offer a "review changes" step.

use serde::{Deserialize, Serialize};

use crate::analysis::WarningSet;
use crate::color::Color;
use crate::constraints::{AUTO_FIX_LOGO_PERCENT, MIN_RECOMMENDED_SIZE_PX};
use crate::design::{DesignConfig, LogoPosition};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoFixOutcome {
    pub fixed: DesignConfig,
    pub changed: bool,
}

/// Repair the config for every currently-raised warning.
///
/// Order matters only for readability; the rules touch disjoint fields.
/// The logo clamp targets 25% of the side, below the 30% hard stop, so a
/// repaired logo keeps decode margin. Gradients are discarded rather than
/// contrast-repaired: a gradient forced to black-on-white has lost its
/// visual purpose anyway.
pub fn auto_fix(config: &DesignConfig, warnings: &WarningSet) -> AutoFixOutcome {
    let mut fixed = config.clone();
    let mut changed = false;

    if warnings.logo_too_large {
        if let Some(logo) = fixed.logo.as_mut() {
            logo.size_px = (fixed.qr_size_px as f64 * AUTO_FIX_LOGO_PERCENT) as u32;
            changed = true;
        }
    }

    if warnings.corner_position_risk {
        if let Some(logo) = fixed.logo.as_mut() {
            logo.position = LogoPosition::Center;
            changed = true;
        }
    }

    if warnings.small_qr_size {
        fixed.qr_size_px = MIN_RECOMMENDED_SIZE_PX;
        changed = true;
    }

    if warnings.low_contrast || warnings.complex_gradient {
        fixed.foreground_color = Color::BLACK;
        fixed.background_color = Color::WHITE;
        fixed.gradient = None;
        changed = true;
    }

    AutoFixOutcome { fixed, changed }
}
