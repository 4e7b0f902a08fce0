// Synchronized dual-input state owner.
// One reading (amount + scale) is stored; both inputs and the boiling
// verdict are derived from it after every edit.

pub mod observer;
pub mod owner;
pub mod reading;
pub mod view;

#[cfg(test)]
mod tests;

pub use observer::Subscription;
pub use owner::Calculator;
pub use reading::TemperatureReading;
pub use view::{CalculatorView, BOILING_POINT_CELSIUS};
