// Celsius/Fahrenheit conversion: the scale tag and the two linear formulas

pub mod formulas;
pub mod scale;


pub use formulas::{celsius_to_fahrenheit, fahrenheit_to_celsius, Converter};
pub use scale::Scale;
