use crate::convert::Scale;
use serde::{Deserialize, Serialize};

/// The single source of truth: the text last typed and the scale it was typed in.
///
/// `amount` is stored exactly as entered, even when it is not a number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TemperatureReading {
    pub amount: String,
    pub scale: Scale,
}

impl TemperatureReading {
    pub fn new(amount: impl Into<String>, scale: Scale) -> Self {
        Self {
            amount: amount.into(),
            scale,
        }
    }

    /// Empty amount in the given scale
    pub fn empty(scale: Scale) -> Self {
        Self::new(String::new(), scale)
    }
}
