//! Configuration system
//!
//! Holds the tunable tolerances of the narrow-phase and the file loading
//! helpers shared by every configuration type.

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value parsed correctly but is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Default length below which a separating-axis candidate is skipped
pub const DEFAULT_SAT_AXIS_EPSILON: f32 = 1e-6;

/// Default slack for inclusive "distance <= radius" boundary tests
pub const DEFAULT_CONTACT_EPSILON: f32 = 1e-6;

/// Default pair count from which the detector switches to the parallel pass
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Narrow-phase tolerances
///
/// Every geometric test reads its thresholds from here; none of them carries
/// a private epsilon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Candidate SAT axes shorter than this (before normalization) are skipped
    pub sat_axis_epsilon: f32,
    /// Slack for boundary-inclusive distance comparisons and zero-distance guards
    pub contact_epsilon: f32,
    /// Minimum pair count for the parallel pass (ignored without the `parallel` feature)
    pub parallel_threshold: usize,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            sat_axis_epsilon: DEFAULT_SAT_AXIS_EPSILON,
            contact_epsilon: DEFAULT_CONTACT_EPSILON,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl Config for CollisionConfig {}

impl CollisionConfig {
    /// Check that both epsilons are finite and non-negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("sat_axis_epsilon", self.sat_axis_epsilon),
            ("contact_epsilon", self.contact_epsilon),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Load from a `.toml` or `.ron` file and validate the result
    pub fn load_validated(path: &str) -> Result<Self, ConfigError> {
        let config = Self::load_from_file(path)?;
        config.validate()?;
        log::info!("Loaded collision config from {path}: {config:?}");
        Ok(config)
    }
}
