use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Settings for the `vectors-cli` binary, read from a JSON file via `--config`.
///
/// Every field is optional in the file; missing ones take their default.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    /// `env_logger` filter used when `VECTORS_LOG` is not set.
    pub log_level: Option<String>,
    pub angle_unit: AngleUnit,
    /// Absolute tolerance for `equals`. Zero means exact comparison.
    pub tolerance: f64,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    /// Convert an angle given in radians to this unit.
    pub fn convert(&self, radians: f64) -> f64 {
        match self {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        }
    }
}

impl FromStr for AngleUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "radians" | "rad" => Ok(AngleUnit::Radians),
            "degrees" | "deg" => Ok(AngleUnit::Degrees),
            _ => Err(format!(
                "Unknown angle unit: {}. Expected 'radians' or 'degrees'",
                s
            )),
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            angle_unit: AngleUnit::Radians,
            tolerance: 0.0,
        }
    }
}

impl CliConfig {
    pub const DEFAULT_LOG_FILTER: &'static str = "error,vectors=info";

    pub fn log_filter(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or(Self::DEFAULT_LOG_FILTER)
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CliConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: CliConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    validate_tolerance(config.tolerance)?;
    Ok(config)
}

/// Accept a tolerance only if it is finite and not negative.
pub fn validate_tolerance(tolerance: f64) -> Result<f64> {
    if tolerance < 0.0 || !tolerance.is_finite() {
        anyhow::bail!(
            "Tolerance must be a non-negative finite number, got {}",
            tolerance
        );
    }
    Ok(tolerance)
}
