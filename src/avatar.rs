//! Avatar configuration model
//!
//! The record served by `/api/avatar-config`. Built fresh for every request;
//! nothing here is shared or mutated.

use serde::{Deserialize, Serialize, Serializer};

/// Position of the avatar in scene space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(serialize_with = "whole_number")]
    pub x: f64,
    #[serde(serialize_with = "whole_number")]
    pub y: f64,
    #[serde(serialize_with = "whole_number")]
    pub z: f64,
}

impl Position {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
}

/// Static description of a 3D avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarConfig {
    pub id: String,
    pub name: String,
    pub position: Position,
    /// Hex color, not validated
    pub color: String,
    /// Not validated; non-positive values pass through
    #[serde(serialize_with = "whole_number")]
    pub scale: f64,
    pub visible: bool,
}

/// The one avatar this service knows about
pub fn default_avatar() -> AvatarConfig {
    AvatarConfig {
        id: "avatar-001".to_string(),
        name: "Default Avatar".to_string(),
        position: Position::ORIGIN,
        color: "#4F46E5".to_string(),
        scale: 1.0,
        visible: true,
    }
}

/// Largest magnitude where every integer is exactly representable in an f64
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Write integral floats as JSON integers (`1` instead of `1.0`)
#[allow(
    clippy::trivially_copy_pass_by_ref,
    clippy::cast_possible_truncation,
    clippy::float_cmp
)]
fn whole_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: &str = r##"{"id":"avatar-001","name":"Default Avatar","position":{"x":0,"y":0,"z":0},"color":"#4F46E5","scale":1,"visible":true}"##;

    #[test]
    fn test_default_avatar_wire_format() {
        let json = serde_json::to_string(&default_avatar()).unwrap();
        assert_eq!(json, EXPECTED);
    }

    #[test]
    fn test_default_avatar_is_fresh_and_identical() {
        let a = default_avatar();
        let mut b = default_avatar();
        assert_eq!(a, b);
        b.name.push_str(" (edited)");
        assert_ne!(a, b);
        assert_eq!(default_avatar(), a);
    }

    #[test]
    fn test_fractional_values_stay_floats() {
        let mut avatar = default_avatar();
        avatar.position = Position {
            x: 1.5,
            y: -2.0,
            z: 0.25,
        };
        avatar.scale = 0.5;
        let json = serde_json::to_string(&avatar).unwrap();
        assert!(json.contains(r#""position":{"x":1.5,"y":-2,"z":0.25}"#));
        assert!(json.contains(r#""scale":0.5"#));
    }

    #[test]
    fn test_negative_zero_and_unchecked_scale() {
        let mut avatar = default_avatar();
        avatar.position.x = -0.0;
        avatar.scale = -3.0;
        let json = serde_json::to_string(&avatar).unwrap();
        assert!(json.contains(r#""x":0,"#));
        assert!(json.contains(r#""scale":-3"#));
    }

    #[test]
    fn test_parses_back() {
        let parsed: AvatarConfig = serde_json::from_str(EXPECTED).unwrap();
        assert_eq!(parsed, default_avatar());
    }
}
