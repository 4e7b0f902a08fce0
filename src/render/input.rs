use crate::convert::Scale;
use std::fmt;
use std::rc::Rc;

/// Callback an input invokes with its raw text on every change
pub type EditHandler = Rc<dyn Fn(&str)>;

/// Display-only temperature field.
///
/// Holds no state of its own: the value comes from the calculator and every
/// change goes straight back to it through `on_edit`.
#[derive(Clone)]
pub struct TemperatureInput {
    pub display_value: String,
    pub scale: Scale,
    on_edit: EditHandler,
}

impl TemperatureInput {
    pub fn new(display_value: impl Into<String>, scale: Scale, on_edit: EditHandler) -> Self {
        Self {
            display_value: display_value.into(),
            scale,
            on_edit,
        }
    }

    pub fn scale_label(&self) -> &'static str {
        self.scale.label()
    }

    pub fn legend(&self) -> String {
        format!("Enter temperature in {}:", self.scale_label())
    }

    /// Change event from the rendering layer; forwards the raw text untouched
    pub fn handle_change(&self, text: &str) {
        (self.on_edit)(text)
    }
}

impl fmt::Debug for TemperatureInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemperatureInput")
            .field("display_value", &self.display_value)
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for TemperatureInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.legend())?;
        write!(f, "  [{}]", self.display_value)
    }
}
