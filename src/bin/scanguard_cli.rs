//! Scanguard CLI - Bridge interface for the app layer
//!
//! Commands: evaluate, fix, constraints
//! Outputs JSON to stdout
//! Returns exit code 2 when a design is blocked

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::process::ExitCode;

use scanguard_core::{
    constraints, design::DesignConfig, gate::ValidationGate, Band, EcLevel, ENGINE_VERSION,
};

#[derive(Parser)]
#[command(name = "scanguard-cli")]
#[command(about = "Scanguard CLI - QR Design Scannability Engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a design against the accept/warn/block policy
    Evaluate {
        /// JSON payload (DesignConfig)
        #[arg(short, long)]
        payload: String,
    },

    /// Evaluate, auto-fix, and re-evaluate a design
    Fix {
        /// JSON payload (DesignConfig)
        #[arg(short, long)]
        payload: String,
    },

    /// Print the constraint table
    Constraints,
}

fn parse_config(payload: &str) -> Result<DesignConfig, String> {
    let config: DesignConfig =
        serde_json::from_str(payload).map_err(|e| format!("Invalid payload: {}", e))?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn envelope(body: serde_json::Value) -> serde_json::Value {
    let evaluated_at: DateTime<Utc> = Utc::now();
    serde_json::json!({
        "engineVersion": ENGINE_VERSION,
        "evaluatedAt": evaluated_at,
        "result": body,
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let gate = ValidationGate::new();

    match cli.command {
        Commands::Evaluate { payload } => {
            let config = match parse_config(&payload) {
                Ok(c) => c,
                Err(e) => {
                    println!(r#"{{"error": "{}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            match gate.evaluate(&config) {
                Ok(decision) => {
                    let blocked = decision.band == Band::Blocked;
                    let output = envelope(serde_json::json!(decision));
                    println!("{}", serde_json::to_string_pretty(&output).unwrap());
                    if blocked {
                        ExitCode::from(2) // creation must be refused
                    } else {
                        ExitCode::SUCCESS
                    }
                }
                Err(e) => {
                    println!(r#"{{"error": "{}"}}"#, e);
                    ExitCode::FAILURE
                }
            }
        }

        Commands::Fix { payload } => {
            let config = match parse_config(&payload) {
                Ok(c) => c,
                Err(e) => {
                    println!(r#"{{"error": "{}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            match gate.evaluate_with_auto_fix(&config) {
                Ok(outcome) => {
                    let insufficient = !outcome.repair_sufficient;
                    let output = envelope(serde_json::json!(outcome));
                    println!("{}", serde_json::to_string_pretty(&output).unwrap());
                    if insufficient {
                        ExitCode::from(2) // still blocked; manual edit required
                    } else {
                        ExitCode::SUCCESS
                    }
                }
                Err(e) => {
                    println!(r#"{{"error": "{}"}}"#, e);
                    ExitCode::FAILURE
                }
            }
        }

        Commands::Constraints => {
            let output = serde_json::json!({
                "minQrSizePx": constraints::MIN_QR_SIZE_PX,
                "minRecommendedSizePx": constraints::MIN_RECOMMENDED_SIZE_PX,
                "minFlatContrast": constraints::MIN_FLAT_CONTRAST,
                "minGradientContrast": constraints::MIN_GRADIENT_CONTRAST,
                "maxLogoPercent": constraints::MAX_LOGO_PERCENT,
                "cornerLogoMaxPercent": constraints::CORNER_LOGO_MAX_PERCENT,
                "autoFixLogoPercent": constraints::AUTO_FIX_LOGO_PERCENT,
                "advisoryLogoOcclusion": {
                    "L": EcLevel::L.max_logo_occlusion(),
                    "M": EcLevel::M.max_logo_occlusion(),
                    "Q": EcLevel::Q.max_logo_occlusion(),
                    "H": EcLevel::H.max_logo_occlusion(),
                },
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
            ExitCode::SUCCESS
        }
    }
}
