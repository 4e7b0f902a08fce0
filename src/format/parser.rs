use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Leading decimal literal: optional sign, digits with optional fraction
    /// (or a bare fraction), optional exponent.
    /// Examples: "10.22abc" -> "10.22", "12xyz" -> "12", "1e" -> "1", ".5" -> ".5"
    static ref LEADING_NUMBER: Regex =
        Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").unwrap();

    /// Same grammar, anchored at both ends
    static ref WHOLE_NUMBER: Regex =
        Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$").unwrap();
}

/// How free-form input text is turned into a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Skip leading whitespace and take the longest numeric prefix
    #[default]
    Lenient,
    /// The whole trimmed text must be a number
    Strict,
}

impl ParsePolicy {
    /// Parse `text` under this policy. Returns `None` for anything that is
    /// not a finite number.
    pub fn parse(self, text: &str) -> Option<f64> {
        let literal = match self {
            ParsePolicy::Lenient => LEADING_NUMBER.find(text.trim_start())?.as_str(),
            ParsePolicy::Strict => {
                let trimmed = text.trim();
                if !WHOLE_NUMBER.is_match(trimmed) {
                    return None;
                }
                trimmed
            }
        };

        literal.parse::<f64>().ok().filter(|value| value.is_finite())
    }
}

/// Lenient parse, the default used by the calculator
pub fn parse_number(text: &str) -> Option<f64> {
    ParsePolicy::Lenient.parse(text)
}
