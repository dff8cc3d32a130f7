//! Constraint Table - Scannability Thresholds
//!
//! Static numbers, not behavior. These are product-tuned heuristics, not
//! values derived from a formal decodability model; the score bands in the
//! gate were calibrated against exactly these constants. Changing any of
//! them is a behavior change, not a bug fix.

/// Below this rendered size, scanners start missing the finder patterns.
pub const MIN_QR_SIZE_PX: u32 = 200;

/// Auto-fix target size. Stricter than the bare minimum to leave margin.
pub const MIN_RECOMMENDED_SIZE_PX: u32 = 240;

/// Minimum foreground/background contrast for a flat fill (WCAG large-text floor).
pub const MIN_FLAT_CONTRAST: f64 = 3.0;

/// Minimum contrast for gradient fills. Stricter than flat because a
/// gradient reduces effective contrast across the symbol.
pub const MIN_GRADIENT_CONTRAST: f64 = 4.5;

/// Universal hard stop on logo occlusion. Beyond this no error-correction
/// level reliably decodes, so the analyzer applies it regardless of level.
pub const MAX_LOGO_PERCENT: f64 = 0.30;

/// Off-center logos must stay smaller: corner modules carry less redundancy
/// than the center in most encoders' module layout.
pub const CORNER_LOGO_MAX_PERCENT: f64 = 0.15;

/// Auto-fix clamps logos to this fraction of the QR side, below the hard
/// stop so a repaired design keeps margin.
pub const AUTO_FIX_LOGO_PERCENT: f64 = 0.25;
