//! Design Configuration - The Object Under Evaluation
//!
//! A `DesignConfig` is a plain value built by the producing layer (color
//! pickers, size sliders, logo upload). The engine never mutates one; every
//! pipeline stage takes a config in and hands new values out, so callers can
//! diff before/after and offer an explicit review step.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DesignError {
    #[error("QR size must be positive, got {0}")]
    ZeroQrSize(u32),

    #[error("Logo ({logo_px}px) cannot exceed the QR canvas ({qr_px}px)")]
    LogoExceedsCanvas { logo_px: u32, qr_px: u32 },
}

/// QR error-correction level, ordered by increasing redundancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EcLevel {
    L,
    M,
    Q,
    H,
}

impl EcLevel {
    /// Advisory maximum logo occlusion for this level, as a fraction of the
    /// QR side. Guidance for future per-level tightening and for sizing
    /// hints in the producing layer; the analyzer enforces the flat
    /// [`crate::constraints::MAX_LOGO_PERCENT`] hard stop instead.
    pub fn max_logo_occlusion(self) -> f64 {
        match self {
            EcLevel::L => 0.07,
            EcLevel::M => 0.15,
            EcLevel::Q => 0.25,
            EcLevel::H => 0.30,
        }
    }
}

/// Two-stop gradient substituting for a flat foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    pub start: Color,
    pub end: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogoPosition {
    Center,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    pub size_px: u32,
    pub position: LogoPosition,
    #[serde(default)]
    pub has_white_background: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignConfig {
    /// Rendered QR side length in device-independent pixels.
    pub qr_size_px: u32,
    pub foreground_color: Color,
    pub background_color: Color,
    pub error_correction_level: EcLevel,
    #[serde(default)]
    pub gradient: Option<Gradient>,
    #[serde(default)]
    pub logo: Option<Logo>,
}

impl DesignConfig {
    /// Structural invariants the producing layer must guarantee before the
    /// engine sees the config. Scannability rules live in the analyzer, not
    /// here; this only rejects configs that are geometrically nonsensical.
    pub fn validate(&self) -> Result<(), DesignError> {
        if self.qr_size_px == 0 {
            return Err(DesignError::ZeroQrSize(self.qr_size_px));
        }
        if let Some(logo) = &self.logo {
            if logo.size_px > self.qr_size_px {
                return Err(DesignError::LogoExceedsCanvas {
                    logo_px: logo.size_px,
                    qr_px: self.qr_size_px,
                });
            }
        }
        Ok(())
    }

    /// Fraction of the QR side occluded by the logo, 0.0 when there is none.
    pub fn logo_occlusion(&self) -> f64 {
        match &self.logo {
            Some(logo) => logo.size_px as f64 / self.qr_size_px as f64,
            None => 0.0,
        }
    }
}
