use crate::calculator::reading::TemperatureReading;
use crate::convert::Scale;
use crate::format::NumberFormat;
use serde::{Deserialize, Serialize};

/// Boiling point of water at sea level, in Celsius
pub const BOILING_POINT_CELSIUS: f64 = 100.0;

/// Everything the inputs and the verdict indicator need, derived from one reading
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CalculatorView {
    /// Scale of the most recently edited input
    pub scale: Scale,
    pub celsius_text: String,
    pub fahrenheit_text: String,
    /// Celsius text read back as a number, when it is one
    pub celsius_amount: Option<f64>,
    /// `None` when the Celsius text is not a number; no verdict is shown then
    pub boiling: Option<bool>,
}

impl CalculatorView {
    /// Derive both display strings and the verdict from `reading`.
    ///
    /// The edited scale shows the raw text. The other scale shows the converted,
    /// rounded amount or the empty sentinel.
    pub fn derive(reading: &TemperatureReading, format: &NumberFormat) -> Self {
        let text_for = |target: Scale| {
            if reading.scale == target {
                reading.amount.clone()
            } else {
                format.try_convert(&reading.amount, reading.scale.converter_to(target))
            }
        };

        let celsius_text = text_for(Scale::Celsius);
        let fahrenheit_text = text_for(Scale::Fahrenheit);
        let celsius_amount = format.parse(&celsius_text);
        let boiling = celsius_amount.map(|celsius| celsius >= BOILING_POINT_CELSIUS);

        Self {
            scale: reading.scale,
            celsius_text,
            fahrenheit_text,
            celsius_amount,
            boiling,
        }
    }

    pub fn text_for(&self, scale: Scale) -> &str {
        match scale {
            Scale::Celsius => &self.celsius_text,
            Scale::Fahrenheit => &self.fahrenheit_text,
        }
    }
}
