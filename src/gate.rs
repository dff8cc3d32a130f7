//! Validation Gate - Accept / Warn / Block Policy
//!
//! The gate is the single evaluation entry point for the creation workflow:
//! every decision routes through the analyzer and the scorer, and blocking
//! is a policy outcome carried in the decision value, never an error. The
//! dialog flow around a warned or blocked design (auto-fix / proceed /
//! cancel) is a caller-side presentation concern.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::{Analyzer, Warning, WarningSet};
use crate::autofix::auto_fix;
use crate::design::DesignConfig;
use crate::fingerprint::design_fingerprint;
use crate::score::score;

/// Score band boundaries. Tuned against the additive penalty model in the
/// scorer; do not move one without the other.
pub const CLEAN_THRESHOLD: u32 = 80;
pub const BLOCK_THRESHOLD: u32 = 60;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Policy band. Bands are driven by cumulative score, not by flag
/// presence alone; a single minor flag can still land in Clean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Band {
    /// Creation proceeds; nothing the caller must act on.
    Clean,
    /// Creation permitted; the caller must surface the itemized warnings
    /// and offer both auto-fix and proceed-anyway.
    Warned,
    /// Creation refused. Auto-fix or manual edits only; there is no
    /// proceed-anyway path below the block threshold.
    Blocked,
}

impl Band {
    pub fn from_score(score: u32) -> Band {
        if score >= CLEAN_THRESHOLD {
            Band::Clean
        } else if score >= BLOCK_THRESHOLD {
            Band::Warned
        } else {
            Band::Blocked
        }
    }
}

/// Derived per evaluation, never stored or mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannabilityReport {
    pub warnings: WarningSet,
    pub score: u32,
}

/// Itemized warning for presentation. The engine never reads these back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarningDetail {
    pub rule: String,
    pub message: String,
    pub remediation: String,
    pub penalty: u32,
}

impl WarningDetail {
    fn from_warning(warning: Warning) -> Self {
        Self {
            rule: warning.rule_name().to_string(),
            message: warning.message().to_string(),
            remediation: warning.remediation().to_string(),
            penalty: warning.penalty(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateDecision {
    pub report: ScannabilityReport,
    pub band: Band,
    /// False only when blocked.
    pub can_proceed: bool,
    pub details: Vec<WarningDetail>,
    /// Canonical-JSON SHA-256 of the evaluated config, so callers can
    /// dedupe re-validation and diff against an auto-fixed variant.
    pub config_fingerprint: String,
}

/// Result of evaluate-fix-reevaluate. A still-blocked `after` is an
/// expected terminal outcome (repair was insufficient), not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairOutcome {
    pub before: GateDecision,
    pub fixed: DesignConfig,
    pub after: GateDecision,
    pub changed: bool,
    /// True when the repaired design is at least out of the blocked band.
    pub repair_sufficient: bool,
}

/// The validation gate - composes analyzer, scorer, and (on demand) the
/// auto-fixer. Stateless: every call re-derives everything from the input.
pub struct ValidationGate {
    analyzer: Analyzer,
}

impl ValidationGate {
    pub fn new() -> Self {
        Self { analyzer: Analyzer::new() }
    }

    /// Evaluate a design against the accept/warn/block policy.
    pub fn evaluate(&self, config: &DesignConfig) -> Result<GateDecision, EngineError> {
        let warnings = self.analyzer.analyze(config);
        let score = score(&warnings);
        let band = Band::from_score(score);
        Ok(GateDecision {
            details: warnings.raised().into_iter().map(WarningDetail::from_warning).collect(),
            report: ScannabilityReport { warnings, score },
            band,
            can_proceed: band != Band::Blocked,
            config_fingerprint: design_fingerprint(config)?,
        })
    }

    /// Evaluate, repair, and re-evaluate. The caller decides what to do
    /// with an insufficient repair (typically: ask for a manual edit).
    pub fn evaluate_with_auto_fix(
        &self,
        config: &DesignConfig,
    ) -> Result<RepairOutcome, EngineError> {
        let before = self.evaluate(config)?;
        let outcome = auto_fix(config, &before.report.warnings);
        let after = self.evaluate(&outcome.fixed)?;
        Ok(RepairOutcome {
            repair_sufficient: after.band != Band::Blocked,
            before,
            fixed: outcome.fixed,
            after,
            changed: outcome.changed,
        })
    }
}

impl Default for ValidationGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::design::EcLevel;

    #[test]
    fn band_boundaries_are_exact() {
        assert_eq!(Band::from_score(100), Band::Clean);
        assert_eq!(Band::from_score(80), Band::Clean);
        assert_eq!(Band::from_score(79), Band::Warned);
        assert_eq!(Band::from_score(60), Band::Warned);
        assert_eq!(Band::from_score(59), Band::Blocked);
        assert_eq!(Band::from_score(0), Band::Blocked);
    }

    #[test]
    fn decision_carries_itemized_details() {
        let config = DesignConfig {
            qr_size_px: 180,
            foreground_color: Color::BLACK,
            background_color: Color::WHITE,
            error_correction_level: EcLevel::M,
            gradient: None,
            logo: None,
        };
        let decision = ValidationGate::new().evaluate(&config).unwrap();
        assert_eq!(decision.report.score, 85);
        assert_eq!(decision.band, Band::Clean);
        assert_eq!(decision.details.len(), 1);
        assert_eq!(decision.details[0].rule, "small_qr_size");
        assert!(!decision.config_fingerprint.is_empty());
    }
}
