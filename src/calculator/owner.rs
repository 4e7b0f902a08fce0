use crate::calculator::observer::{Subscribers, Subscription};
use crate::calculator::reading::TemperatureReading;
use crate::calculator::view::CalculatorView;
use crate::config::Config;
use crate::convert::Scale;
use crate::format::NumberFormat;
use crate::render::{CalculatorTree, EditHandler};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

struct State {
    reading: TemperatureReading,
    initial_scale: Scale,
    format: NumberFormat,
}

/// Owner of the one temperature reading shared by both inputs.
///
/// Cloning gives another handle to the same state. Every edit replaces the
/// stored reading, re-derives the view and notifies subscribers before
/// returning.
#[derive(Clone)]
pub struct Calculator {
    state: Rc<RefCell<State>>,
    subscribers: Rc<Subscribers>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Empty Celsius reading, default number format
    pub fn new() -> Self {
        Self::with_format(NumberFormat::default(), Scale::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self::with_format(config.number_format(), config.calculator.initial_scale)
    }

    pub fn with_format(format: NumberFormat, initial_scale: Scale) -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                reading: TemperatureReading::empty(initial_scale),
                initial_scale,
                format,
            })),
            subscribers: Rc::new(Subscribers::default()),
        }
    }

    pub fn reading(&self) -> TemperatureReading {
        self.state.borrow().reading.clone()
    }

    /// Derive the current view. Pure: calling it twice on unchanged state
    /// gives equal results.
    pub fn view(&self) -> CalculatorView {
        let state = self.state.borrow();
        CalculatorView::derive(&state.reading, &state.format)
    }

    /// Store `new_amount` as typed in `scale` and re-render.
    ///
    /// No validation happens here; text that is not a number is kept as-is
    /// and only blanks out the other input.
    pub fn on_edit(&self, new_amount: impl Into<String>, scale: Scale) {
        let reading = TemperatureReading::new(new_amount, scale);
        tracing::debug!(amount = %reading.amount, ?scale, "edit");
        self.replace(reading);
    }

    /// Back to an empty reading in the initial scale
    pub fn reset(&self) {
        let initial_scale = self.state.borrow().initial_scale;
        tracing::debug!(?initial_scale, "reset");
        self.replace(TemperatureReading::empty(initial_scale));
    }

    fn replace(&self, reading: TemperatureReading) {
        let view = {
            let mut state = self.state.borrow_mut();
            state.reading = reading;
            CalculatorView::derive(&state.reading, &state.format)
        };
        self.subscribers.notify(&view);
    }

    /// Register `callback` to receive the new view after every edit
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&CalculatorView) + 'static,
    {
        let id = self.subscribers.add(Rc::new(callback));
        Subscription::new(id, Rc::downgrade(&self.subscribers))
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Update function for the input showing `scale`.
    ///
    /// The handler only holds a weak reference, so components keeping it
    /// alive do not keep the calculator alive. Edits after the calculator is
    /// dropped are ignored.
    pub fn edit_handler(&self, scale: Scale) -> EditHandler {
        let weak = self.downgrade();
        Rc::new(move |text: &str| {
            if let Some(calculator) = weak.upgrade() {
                calculator.on_edit(text, scale);
            }
        })
    }

    /// Build the component tree for the current state: one input per scale
    /// and the verdict indicator when the Celsius text is a number.
    pub fn render(&self) -> CalculatorTree {
        CalculatorTree::from_view(&self.view(), |scale| self.edit_handler(scale))
    }

    fn downgrade(&self) -> WeakCalculator {
        WeakCalculator {
            state: Rc::downgrade(&self.state),
            subscribers: Rc::downgrade(&self.subscribers),
        }
    }
}

struct WeakCalculator {
    state: Weak<RefCell<State>>,
    subscribers: Weak<Subscribers>,
}

impl WeakCalculator {
    fn upgrade(&self) -> Option<Calculator> {
        Some(Calculator {
            state: self.state.upgrade()?,
            subscribers: self.subscribers.upgrade()?,
        })
    }
}
