//! Config Fingerprinting - Canonical JSON + SHA-256
//!
//! Two configs are the same design iff their fingerprints match. Callers
//! use this to dedupe re-validation during live editing and to tell whether
//! an auto-fix actually touched anything.

use serde::Serialize;
use sha2::{Digest, Sha256};
use serde_json::{to_string, Value};

use crate::design::DesignConfig;

/// SHA-256 of bytes as lowercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    hex::encode(result)
}

/// Canonical JSON: sorted keys, no whitespace. Key order in the incoming
/// payload must not change the fingerprint.
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let v: Value = serde_json::to_value(value)?;
    let sorted = sort_value(&v);
    to_string(&sorted)
}

fn sort_value(v: &Value) -> Value {
    match v {
        Value::Object(map) => {
            let mut sorted: Vec<_> = map.iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(b.0));
            let sorted_map: serde_json::Map<String, Value> = sorted
                .into_iter()
                .map(|(k, v)| (k.clone(), sort_value(v)))
                .collect();
            Value::Object(sorted_map)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(sort_value).collect()),
        _ => v.clone(),
    }
}

/// Stable identity for a design configuration.
pub fn design_fingerprint(config: &DesignConfig) -> Result<String, serde_json::Error> {
    let canonical = canonical_json(config)?;
    Ok(sha256_hex(canonical.as_bytes()))
}

mod hex {
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes.as_ref().iter().map(|b| format!("{:02x}", b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::design::{DesignConfig, EcLevel, Logo, LogoPosition};
    use serde_json::json;

    fn config() -> DesignConfig {
        DesignConfig {
            qr_size_px: 240,
            foreground_color: Color::BLACK,
            background_color: Color::WHITE,
            error_correction_level: EcLevel::H,
            gradient: None,
            logo: Some(Logo {
                size_px: 48,
                position: LogoPosition::Center,
                has_white_background: true,
            }),
        }
    }

    #[test]
    fn canonical_json_sorted() {
        let obj = json!({"z": 1, "a": 2, "m": 3});
        let canonical = canonical_json(&obj).unwrap();
        assert_eq!(canonical, r#"{"a":2,"m":3,"z":1}"#);
    }

    #[test]
    fn fingerprint_stable() {
        let c = config();
        assert_eq!(design_fingerprint(&c).unwrap(), design_fingerprint(&c).unwrap());
    }

    #[test]
    fn fingerprint_tracks_content() {
        let a = config();
        let mut b = config();
        b.qr_size_px = 241;
        assert_ne!(design_fingerprint(&a).unwrap(), design_fingerprint(&b).unwrap());
    }
}
