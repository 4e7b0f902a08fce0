// Parse-and-format helper: free-form text in, display-ready text out.
// Invalid input never errors, it degrades to the empty string.

pub mod parser;
pub mod rounding;


use crate::convert::Converter;

pub use parser::{parse_number, ParsePolicy};
pub use rounding::{format_number, round_to, DEFAULT_PRECISION, MAX_PRECISION};

/// Display string used when the input is empty or not a number
pub const EMPTY_SENTINEL: &str = "";

/// Parsing and rounding settings applied to converted amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub precision: u32,
    pub policy: ParsePolicy,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            policy: ParsePolicy::Lenient,
        }
    }
}

impl NumberFormat {
    pub fn parse(&self, text: &str) -> Option<f64> {
        self.policy.parse(text)
    }

    /// Convert `text` with `convert`, rounded to `self.precision` places.
    /// Returns the empty sentinel when `text` does not parse or the converted
    /// value is out of f64 range.
    pub fn try_convert(&self, text: &str, convert: Converter) -> String {
        match self.parse(text).map(convert) {
            Some(output) if output.is_finite() => format_number(round_to(output, self.precision)),
            _ => EMPTY_SENTINEL.to_string(),
        }
    }
}

/// `try_convert` with the default format (lenient parse, 3 decimals)
pub fn try_convert(text: &str, convert: Converter) -> String {
    NumberFormat::default().try_convert(text, convert)
}
