use crate::calculator::BOILING_POINT_CELSIUS;
use std::fmt;

pub const BOILS_MESSAGE: &str = "The water would boil";
pub const DOES_NOT_BOIL_MESSAGE: &str = "The water would not boil";

/// Stateless indicator saying whether water boils at a Celsius temperature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoilingVerdict {
    pub celsius: f64,
}

impl BoilingVerdict {
    pub fn new(celsius: f64) -> Self {
        Self { celsius }
    }

    pub fn boils(&self) -> bool {
        self.celsius >= BOILING_POINT_CELSIUS
    }

    pub fn message(&self) -> &'static str {
        if self.boils() {
            BOILS_MESSAGE
        } else {
            DOES_NOT_BOIL_MESSAGE
        }
    }
}

impl fmt::Display for BoilingVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
