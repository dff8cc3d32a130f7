//! Scanguard Core - QR Design Scannability Engine
//!
//! # The Contract
//! 1. Every Decision Routes Through The Gate
//! 2. Rules Warn, Policy Blocks
//! 3. Configs Are Immutable Values
//! 4. Heuristic Constants Are Frozen
//! 5. Blocked Is An Outcome, Not An Error
//!
//! The engine is pure and synchronous: no I/O, no shared state. It consumes
//! a [`design::DesignConfig`], produces a [`gate::ScannabilityReport`] with
//! an accept/warn/block band, and on demand an auto-corrected config. QR
//! symbol encoding and rasterization are downstream consumers, out of scope.

pub mod analysis;
pub mod autofix;
pub mod color;
pub mod constraints;
pub mod design;
pub mod fingerprint;
pub mod gate;
pub mod score;

pub use analysis::{analyze, Analyzer, ScanRule, Warning, WarningSet};
pub use autofix::{auto_fix, AutoFixOutcome};
pub use color::{contrast_ratio, relative_luminance, Color, ColorParseError};
pub use design::{DesignConfig, DesignError, EcLevel, Gradient, Logo, LogoPosition};
pub use fingerprint::{canonical_json, design_fingerprint, sha256_hex};
pub use gate::{Band, EngineError, GateDecision, RepairOutcome, ScannabilityReport, ValidationGate};
pub use score::{score, MAX_SCORE};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
