use crate::convert::formulas::{celsius_to_fahrenheit, fahrenheit_to_celsius, Converter};
use crate::error::ThermoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Temperature unit tag carried by every reading and every input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Scale {
    /// Fixed display label used in input legends
    pub fn label(self) -> &'static str {
        match self {
            Scale::Celsius => "Celsius",
            Scale::Fahrenheit => "Fahrenheit",
        }
    }

    /// Converter taking an amount in `self` to an amount in `target`
    pub fn converter_to(self, target: Scale) -> Converter {
        match (self, target) {
            (Scale::Celsius, Scale::Fahrenheit) => celsius_to_fahrenheit,
            (Scale::Fahrenheit, Scale::Celsius) => fahrenheit_to_celsius,
            _ => identity,
        }
    }
}

fn identity(value: f64) -> f64 {
    value
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Scale {
    type Err = ThermoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "celsius" => Ok(Scale::Celsius),
            "f" | "fahrenheit" => Ok(Scale::Fahrenheit),
            _ => Err(ThermoError::UnknownScale(s.to_string())),
        }
    }
}
