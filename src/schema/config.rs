//! Configuration types for procedural profile-curve construction.

use serde::{Deserialize, Serialize};

/// Parameters for building a profile curve procedurally.
///
/// The curve runs vertically from y = 0 to y = `height`, pinned to the
/// revolution axis at both ends, with `subdivisions` interior points sitting
/// at roughly `radius` from the axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Nominal distance of interior points from the revolution axis.
    pub radius: f32,
    /// Total height of the curve along the revolution axis.
    pub height: f32,
    /// Number of interior points; the curve ends up with `subdivisions + 2`.
    pub subdivisions: usize,
    /// Half-width of the uniform radius jitter applied to interior points.
    /// Each interior radius lands in `[radius - variance, radius + variance)`.
    #[serde(default = "default_variance")]
    pub variance: f32,
}

fn default_variance() -> f32 {
    0.01
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            height: 10.0,
            subdivisions: 32,
            variance: 0.01,
        }
    }
}

impl ProfileConfig {
    /// Total number of points the generated curve will have.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.subdivisions + 2
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.radius <= 0.0 {
            return Err(ConfigError::InvalidRadius);
        }
        if self.height <= 0.0 {
            return Err(ConfigError::InvalidHeight);
        }
        if self.subdivisions == 0 {
            return Err(ConfigError::InvalidSubdivisions);
        }
        if self.variance < 0.0 {
            return Err(ConfigError::InvalidVariance);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Radius must be positive")]
    InvalidRadius,
    #[error("Height must be positive")]
    InvalidHeight,
    #[error("Subdivision count must be non-zero")]
    InvalidSubdivisions,
    #[error("Variance must be non-negative")]
    InvalidVariance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(ProfileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let mut config = ProfileConfig::default();
        config.height = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidHeight)
        ));

        let mut config = ProfileConfig::default();
        config.subdivisions = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSubdivisions)
        ));

        let mut config = ProfileConfig::default();
        config.variance = -0.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidVariance)
        ));

        let mut config = ProfileConfig::default();
        config.radius = -1.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRadius)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = ProfileConfig {
            radius: 2.5,
            height: 7.0,
            subdivisions: 16,
            variance: 0.02,
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: ProfileConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.radius, config.radius);
        assert_eq!(back.height, config.height);
        assert_eq!(back.subdivisions, config.subdivisions);
        assert_eq!(back.variance, config.variance);
    }

    #[test]
    fn test_variance_defaults_when_omitted() {
        let back: ProfileConfig =
            serde_json::from_str(r#"{"radius":1.0,"height":10.0,"subdivisions":8}"#).unwrap();
        assert_eq!(back.variance, 0.01);
    }
}
