//! Scannability Analysis - Rules Produce Warnings
//!
//! Each rule inspects the current config independently; policy (banding,
//! blocking) lives in the gate. All rules run unconditionally on every
//! analysis, so multiple flags may be true at once.

use serde::{Deserialize, Serialize};

use crate::color::contrast_ratio;
use crate::constraints::{
    CORNER_LOGO_MAX_PERCENT, MAX_LOGO_PERCENT, MIN_FLAT_CONTRAST, MIN_GRADIENT_CONTRAST,
    MIN_QR_SIZE_PX,
};
use crate::design::{DesignConfig, LogoPosition};

/// One named scannability hazard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Warning {
    LogoTooLarge,
    LowContrast,
    ComplexGradient,
    CornerPositionRisk,
    SmallQrSize,
}

impl Warning {
    pub const ALL: [Warning; 5] = [
        Warning::LogoTooLarge,
        Warning::LowContrast,
        Warning::ComplexGradient,
        Warning::CornerPositionRisk,
        Warning::SmallQrSize,
    ];

    pub fn rule_name(self) -> &'static str {
        match self {
            Warning::LogoTooLarge => "logo_too_large",
            Warning::LowContrast => "low_contrast",
            Warning::ComplexGradient => "complex_gradient",
            Warning::CornerPositionRisk => "corner_position_risk",
            Warning::SmallQrSize => "small_qr_size",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Warning::LogoTooLarge => "Logo covers too much of the symbol to decode reliably",
            Warning::LowContrast => "Foreground/background contrast is below the scannable floor",
            Warning::ComplexGradient => "Gradient fill leaves too little contrast against the background",
            Warning::CornerPositionRisk => "Off-center logo of this size occludes low-redundancy modules",
            Warning::SmallQrSize => "Rendered size is too small for dependable scanner lock-on",
        }
    }

    pub fn remediation(self) -> &'static str {
        match self {
            Warning::LogoTooLarge => "Shrink the logo to at most 25% of the QR side",
            Warning::LowContrast => "Pick darker foreground / lighter background colors",
            Warning::ComplexGradient => "Use higher-contrast gradient stops or a flat foreground",
            Warning::CornerPositionRisk => "Move the logo to the center or shrink it below 15%",
            Warning::SmallQrSize => "Render the QR at 240px or larger",
        }
    }
}

/// Membership set over the five warning flags. No ordering; membership,
/// not sequence, is the contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarningSet {
    pub logo_too_large: bool,
    pub low_contrast: bool,
    pub complex_gradient: bool,
    pub corner_position_risk: bool,
    pub small_qr_size: bool,
}

impl WarningSet {
    pub fn contains(&self, warning: Warning) -> bool {
        match warning {
            Warning::LogoTooLarge => self.logo_too_large,
            Warning::LowContrast => self.low_contrast,
            Warning::ComplexGradient => self.complex_gradient,
            Warning::CornerPositionRisk => self.corner_position_risk,
            Warning::SmallQrSize => self.small_qr_size,
        }
    }

    pub fn insert(&mut self, warning: Warning) {
        match warning {
            Warning::LogoTooLarge => self.logo_too_large = true,
            Warning::LowContrast => self.low_contrast = true,
            Warning::ComplexGradient => self.complex_gradient = true,
            Warning::CornerPositionRisk => self.corner_position_risk = true,
            Warning::SmallQrSize => self.small_qr_size = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == WarningSet::default()
    }

    /// Flags currently raised, for itemized presentation.
    pub fn raised(&self) -> Vec<Warning> {
        Warning::ALL.iter().copied().filter(|w| self.contains(*w)).collect()
    }
}

/// Scannability rule - decides whether one warning applies.
pub trait ScanRule {
    fn warning(&self) -> Warning;
    fn applies(&self, config: &DesignConfig) -> bool;
}

struct LogoSizeRule;

impl ScanRule for LogoSizeRule {
    fn warning(&self) -> Warning {
        Warning::LogoTooLarge
    }

    // Flat hard stop regardless of EC level. The per-level table on EcLevel
    // is advisory only; beyond 30% no level reliably decodes.
    fn applies(&self, config: &DesignConfig) -> bool {
        config.logo.is_some() && config.logo_occlusion() > MAX_LOGO_PERCENT
    }
}

struct FlatContrastRule;

impl ScanRule for FlatContrastRule {
    fn warning(&self) -> Warning {
        Warning::LowContrast
    }

    fn applies(&self, config: &DesignConfig) -> bool {
        contrast_ratio(config.foreground_color, config.background_color) < MIN_FLAT_CONTRAST
    }
}

struct GradientContrastRule;

impl ScanRule for GradientContrastRule {
    fn warning(&self) -> Warning {
        Warning::ComplexGradient
    }

    // The start stop stands in for the worst-case flat contrast. No
    // gradient means no warning here; the flat rule covers that config.
    fn applies(&self, config: &DesignConfig) -> bool {
        match &config.gradient {
            Some(gradient) => {
                contrast_ratio(gradient.start, config.background_color) < MIN_GRADIENT_CONTRAST
            }
            None => false,
        }
    }
}

struct CornerLogoRule;

impl ScanRule for CornerLogoRule {
    fn warning(&self) -> Warning {
        Warning::CornerPositionRisk
    }

    fn applies(&self, config: &DesignConfig) -> bool {
        match &config.logo {
            Some(logo) => {
                logo.position != LogoPosition::Center
                    && config.logo_occlusion() > CORNER_LOGO_MAX_PERCENT
            }
            None => false,
        }
    }
}

struct MinSizeRule;

impl ScanRule for MinSizeRule {
    fn warning(&self) -> Warning {
        Warning::SmallQrSize
    }

    fn applies(&self, config: &DesignConfig) -> bool {
        config.qr_size_px < MIN_QR_SIZE_PX
    }
}

/// Analyzer folds the rule set into a `WarningSet`.
pub struct Analyzer {
    rules: Vec<Box<dyn ScanRule>>,
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(LogoSizeRule),
                Box::new(FlatContrastRule),
                Box::new(GradientContrastRule),
                Box::new(CornerLogoRule),
                Box::new(MinSizeRule),
            ],
        }
    }

    pub fn analyze(&self, config: &DesignConfig) -> WarningSet {
        let mut warnings = WarningSet::default();
        for rule in &self.rules {
            if rule.applies(config) {
                warnings.insert(rule.warning());
            }
        }
        warnings
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze with the standard rule set.
pub fn analyze(config: &DesignConfig) -> WarningSet {
    Analyzer::new().analyze(config)
}
