// Display-only components the calculator renders into.
// They hold no state: values flow down, edits flow back up through callbacks.

pub mod input;
pub mod text;
pub mod verdict;


pub use input::{EditHandler, TemperatureInput};
pub use text::render_text;
pub use verdict::{BoilingVerdict, BOILS_MESSAGE, DOES_NOT_BOIL_MESSAGE};

use crate::calculator::CalculatorView;
use crate::convert::Scale;
use std::rc::Rc;

/// One rendered frame: both inputs and the optional verdict
#[derive(Debug, Clone)]
pub struct CalculatorTree {
    pub celsius: TemperatureInput,
    pub fahrenheit: TemperatureInput,
    pub verdict: Option<BoilingVerdict>,
}

impl CalculatorTree {
    /// Build a frame from `view`, wiring each input to `handler_for(scale)`
    pub fn from_view<F>(view: &CalculatorView, handler_for: F) -> Self
    where
        F: Fn(Scale) -> EditHandler,
    {
        let input =
            |scale: Scale| TemperatureInput::new(view.text_for(scale), scale, handler_for(scale));

        Self {
            celsius: input(Scale::Celsius),
            fahrenheit: input(Scale::Fahrenheit),
            verdict: view.celsius_amount.map(BoilingVerdict::new),
        }
    }

    /// Frame whose inputs are not wired to anything, for display only
    pub fn detached(view: &CalculatorView) -> Self {
        Self::from_view(view, |_| -> EditHandler { Rc::new(|_: &str| {}) })
    }

    pub fn input(&self, scale: Scale) -> &TemperatureInput {
        match scale {
            Scale::Celsius => &self.celsius,
            Scale::Fahrenheit => &self.fahrenheit,
        }
    }
}
