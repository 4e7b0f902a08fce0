use crate::convert::Scale;
use crate::error::{Result, ThermoError};
use crate::format::{NumberFormat, ParsePolicy, DEFAULT_PRECISION, MAX_PRECISION};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // How converted amounts are rounded and shown
    #[serde(default)]
    pub display: DisplayConfig,

    // How typed text is read as a number
    #[serde(default)]
    pub input: InputConfig,

    // Initial state of the calculator
    #[serde(default)]
    pub calculator: CalculatorConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default = "default_precision")]
    pub precision: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct InputConfig {
    #[serde(default)]
    pub parse: ParsePolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub initial_scale: Scale,
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ThermoError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::load_from_str(&content)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn load_from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.display.precision > MAX_PRECISION {
            tracing::warn!(
                precision = self.display.precision,
                "rejecting config precision"
            );
            return Err(ThermoError::InvalidConfig {
                key: "display.precision".to_string(),
                reason: format!(
                    "{} is above the maximum of {}",
                    self.display.precision, MAX_PRECISION
                ),
            });
        }
        Ok(())
    }

    pub fn number_format(&self) -> NumberFormat {
        NumberFormat {
            precision: self.display.precision,
            policy: self.input.parse,
        }
    }
}
