pub mod calculator;
pub mod config;
pub mod convert;
pub mod error;
pub mod format;
pub mod render;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use calculator::{Calculator, CalculatorView, TemperatureReading};
pub use convert::Scale;
pub use error::{Result, ThermoError};
pub use format::try_convert;
