//! Contract Invariant Tests
//!
//! These tests verify the non-negotiable guarantees: auto-fix idempotence
//! and monotonicity, score bounds, and the literal boundary scenarios the
//! band policy was tuned against.

use scanguard_core::{
    analyze, auto_fix, contrast_ratio, design_fingerprint, score, Band, Color, DesignConfig,
    EcLevel, Gradient, Logo, LogoPosition, ValidationGate, Warning, WarningSet,
};

fn design(qr_size_px: u32, fg: &str, bg: &str) -> DesignConfig {
    DesignConfig {
        qr_size_px,
        foreground_color: Color::from_hex(fg).unwrap(),
        background_color: Color::from_hex(bg).unwrap(),
        error_correction_level: EcLevel::M,
        gradient: None,
        logo: None,
    }
}

fn with_logo(mut config: DesignConfig, size_px: u32, position: LogoPosition) -> DesignConfig {
    config.logo = Some(Logo { size_px, position, has_white_background: false });
    config
}

/// A spread of configs from pristine to badly broken, for property checks.
fn corpus() -> Vec<DesignConfig> {
    let mut configs = vec![
        design(240, "#000000", "#FFFFFF"),
        design(180, "#000000", "#FFFFFF"),
        design(240, "#777777", "#888888"),
        with_logo(design(240, "#000000", "#FFFFFF"), 90, LogoPosition::Center),
        with_logo(design(240, "#000000", "#FFFFFF"), 45, LogoPosition::TopLeft),
        with_logo(design(150, "#999999", "#AAAAAA"), 120, LogoPosition::BottomRight),
    ];
    let mut gradient = design(240, "#000000", "#FFFFFF");
    gradient.gradient = Some(Gradient {
        start: Color::from_hex("#BBBBBB").unwrap(),
        end: Color::from_hex("#DDDDDD").unwrap(),
    });
    configs.push(gradient);
    configs
}

#[test]
fn invariant_autofix_idempotent_on_clean_configs() {
    for config in corpus() {
        let warnings = analyze(&config);
        if !warnings.is_empty() {
            continue;
        }
        let outcome = auto_fix(&config, &warnings);
        assert!(!outcome.changed);
        assert_eq!(outcome.fixed, config);
        assert_eq!(
            design_fingerprint(&outcome.fixed).unwrap(),
            design_fingerprint(&config).unwrap(),
        );
    }
}

#[test]
fn invariant_autofix_never_lowers_score() {
    for config in corpus() {
        let before = score(&analyze(&config));
        let outcome = auto_fix(&config, &analyze(&config));
        let after = score(&analyze(&outcome.fixed));
        assert!(after >= before, "auto-fix regressed {} -> {}", before, after);
    }
}

#[test]
fn invariant_autofix_converges_in_one_pass() {
    // A second round of repair on an already-clean repaired config is a no-op.
    for config in corpus() {
        let once = auto_fix(&config, &analyze(&config)).fixed;
        if analyze(&once).is_empty() {
            let twice = auto_fix(&once, &analyze(&once));
            assert!(!twice.changed);
            assert_eq!(twice.fixed, once);
        }
    }
}

#[test]
fn invariant_contrast_symmetric_and_reflexive() {
    let palette = ["#000000", "#FFFFFF", "#777777", "#FF0000", "#1E293B", "#A1A1AA"];
    for a in palette {
        let ca = Color::from_hex(a).unwrap();
        assert!((contrast_ratio(ca, ca) - 1.0).abs() < 1e-12);
        for b in palette {
            let cb = Color::from_hex(b).unwrap();
            assert!((contrast_ratio(ca, cb) - contrast_ratio(cb, ca)).abs() < 1e-12);
            assert!(contrast_ratio(ca, cb) >= 1.0);
        }
    }
}

#[test]
fn invariant_score_bounded_for_every_warning_combination() {
    for bits in 0u32..32 {
        let mut warnings = WarningSet::default();
        for (i, warning) in Warning::ALL.iter().enumerate() {
            if bits & (1 << i) != 0 {
                warnings.insert(*warning);
            }
        }
        let s = score(&warnings);
        assert!(s <= 100);
        // worst case with current penalties is 5; the 0 floor never engages
        if bits == 0b11111 {
            assert_eq!(s, 5);
        }
    }
}

// --- Boundary scenarios (literal) ---

#[test]
fn scenario_pristine_design_is_clean() {
    let config = design(240, "#000000", "#FFFFFF");
    let decision = ValidationGate::new().evaluate(&config).unwrap();
    assert!(decision.report.warnings.is_empty());
    assert_eq!(decision.report.score, 100);
    assert_eq!(decision.band, Band::Clean);
    assert!(decision.can_proceed);
    assert!(decision.details.is_empty());
}

#[test]
fn scenario_gray_on_gray_is_warned() {
    let config = design(240, "#777777", "#888888");
    assert!(contrast_ratio(config.foreground_color, config.background_color) < 3.0);
    let decision = ValidationGate::new().evaluate(&config).unwrap();
    assert!(decision.report.warnings.low_contrast);
    assert_eq!(decision.report.score, 75);
    assert_eq!(decision.band, Band::Warned);
    assert!(decision.can_proceed);
}

#[test]
fn scenario_small_size_alone_stays_clean() {
    // Bands are driven by cumulative score, not by flag presence: a single
    // minor flag still lands at 85, inside Clean.
    let config = design(180, "#000000", "#FFFFFF");
    let decision = ValidationGate::new().evaluate(&config).unwrap();
    assert!(decision.report.warnings.small_qr_size);
    assert_eq!(decision.report.score, 85);
    assert_eq!(decision.band, Band::Clean);
}

#[test]
fn scenario_oversized_logo_warned_then_repaired_to_100() {
    let config = with_logo(design(240, "#000000", "#FFFFFF"), 90, LogoPosition::Center);
    let gate = ValidationGate::new();

    let decision = gate.evaluate(&config).unwrap();
    assert!(decision.report.warnings.logo_too_large);
    assert_eq!(decision.report.score, 70);
    assert_eq!(decision.band, Band::Warned);

    let outcome = gate.evaluate_with_auto_fix(&config).unwrap();
    assert!(outcome.changed);
    assert_eq!(outcome.fixed.logo.unwrap().size_px, 60); // 25% of 240
    assert!(!outcome.after.report.warnings.logo_too_large);
    assert_eq!(outcome.after.report.score, 100);
    assert_ne!(outcome.before.config_fingerprint, outcome.after.config_fingerprint);
}

#[test]
fn scenario_corner_logo_just_over_threshold_is_clean() {
    // 45/240 = 18.75% > 15% in a corner: one minor flag, 90, still Clean.
    let config = with_logo(design(240, "#000000", "#FFFFFF"), 45, LogoPosition::TopLeft);
    let decision = ValidationGate::new().evaluate(&config).unwrap();
    assert!(decision.report.warnings.corner_position_risk);
    assert_eq!(decision.report.score, 90);
    assert_eq!(decision.band, Band::Clean);
}

#[test]
fn scenario_combined_worst_case_is_blocked_until_repaired() {
    // low contrast + oversized logo + small size: 100-25-30-15 = 30
    let config = with_logo(design(180, "#777777", "#888888"), 90, LogoPosition::Center);
    let gate = ValidationGate::new();

    let decision = gate.evaluate(&config).unwrap();
    assert_eq!(decision.report.score, 30);
    assert_eq!(decision.band, Band::Blocked);
    assert!(!decision.can_proceed);

    // Repair clears all three flags and unblocks.
    let outcome = gate.evaluate_with_auto_fix(&config).unwrap();
    assert!(outcome.changed);
    assert!(outcome.repair_sufficient);
    assert_eq!(outcome.after.band, Band::Clean);
    assert!(outcome.after.can_proceed);
}

#[test]
fn invariant_gate_reports_itemized_warnings() {
    let config = with_logo(design(180, "#777777", "#888888"), 90, LogoPosition::Center);
    let decision = ValidationGate::new().evaluate(&config).unwrap();
    assert_eq!(decision.details.len(), 3);
    for detail in &decision.details {
        assert!(!detail.rule.is_empty());
        assert!(!detail.message.is_empty());
        assert!(!detail.remediation.is_empty());
    }
    let rules: Vec<&str> = decision.details.iter().map(|d| d.rule.as_str()).collect();
    assert!(rules.contains(&"logo_too_large"));
    assert!(rules.contains(&"low_contrast"));
    assert!(rules.contains(&"small_qr_size"));
}

#[test]
fn invariant_evaluation_is_stateless_and_deterministic() {
    let gate = ValidationGate::new();
    let config = with_logo(design(210, "#123456", "#FEDCBA"), 40, LogoPosition::TopRight);
    let d1 = gate.evaluate(&config).unwrap();
    let d2 = gate.evaluate(&config).unwrap();
    assert_eq!(d1.report.score, d2.report.score);
    assert_eq!(d1.report.warnings, d2.report.warnings);
    assert_eq!(d1.config_fingerprint, d2.config_fingerprint);
}

#[test]
fn invariant_config_roundtrips_through_json() {
    let config = with_logo(design(240, "#0A141E", "#FFFFFF"), 60, LogoPosition::Center);
    let json = serde_json::to_string(&config).unwrap();
    let back: DesignConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
    assert_eq!(
        design_fingerprint(&back).unwrap(),
        design_fingerprint(&config).unwrap(),
    );
}
