// WebAssembly bindings for the temperature calculator.
// The browser frontend renders the two inputs and the verdict; it forwards
// every change event here and re-renders from the returned view JSON.
use crate::calculator::{Calculator, Subscription};
use crate::config::Config;
use crate::convert::Scale;
use crate::render::{render_text, CalculatorTree};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    tracing_wasm::set_as_global_default();
}

fn parse_scale(scale: &str) -> Result<Scale, JsValue> {
    scale
        .parse::<Scale>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub struct CalculatorWasm {
    calculator: Calculator,
    // Kept alive for as long as the JS side holds this object. Methods take
    // &self so JS callbacks may subscribe or clear while an edit is notifying.
    subscriptions: RefCell<Vec<Subscription>>,
}

#[wasm_bindgen]
impl CalculatorWasm {
    /// Create a calculator, optionally from TOML config content
    #[wasm_bindgen(constructor)]
    pub fn new(config_content: Option<String>) -> Result<CalculatorWasm, JsValue> {
        let config = if let Some(config_content) = config_content {
            Config::load_from_str(&config_content)
                .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?
        } else {
            Config::empty()
        };

        Ok(Self {
            calculator: Calculator::with_config(&config),
            subscriptions: RefCell::new(Vec::new()),
        })
    }

    /// Change event from the input showing `scale` ("c"/"f"/"celsius"/"fahrenheit")
    /// Returns the new view as JSON
    #[wasm_bindgen]
    pub fn on_edit(&self, amount: &str, scale: &str) -> Result<String, JsValue> {
        let scale = parse_scale(scale)?;
        self.calculator.on_edit(amount, scale);
        self.view()
    }

    /// Current view as JSON:
    /// {"scale": ..., "celsius_text": ..., "fahrenheit_text": ..., "celsius_amount": ..., "boiling": ...}
    #[wasm_bindgen]
    pub fn view(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.calculator.view())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize view: {}", e)))
    }

    /// Current reading (amount + scale) as JSON
    #[wasm_bindgen]
    pub fn reading(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.calculator.reading())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize reading: {}", e)))
    }

    /// Plain-text rendering, handy for debugging from the console
    #[wasm_bindgen]
    pub fn render_text(&self) -> String {
        render_text(&CalculatorTree::detached(&self.calculator.view()))
    }

    #[wasm_bindgen]
    pub fn reset(&self) {
        self.calculator.reset();
    }

    /// Call `callback` with the view JSON after every edit
    #[wasm_bindgen]
    pub fn subscribe(&self, callback: js_sys::Function) {
        let subscription = self.calculator.subscribe(move |view| {
            let json = match serde_json::to_string(view) {
                Ok(json) => json,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to serialize view for subscriber");
                    return;
                }
            };
            if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
                tracing::warn!(error = ?e, "subscriber callback threw");
            }
        });
        self.subscriptions.borrow_mut().push(subscription);
    }

    /// Drop every JS subscriber
    #[wasm_bindgen]
    pub fn clear_subscriptions(&self) {
        // Take the list first so dropping a Subscription runs without the borrow held
        let dropped = std::mem::take(&mut *self.subscriptions.borrow_mut());
        drop(dropped);
    }
}

/// Convert `text` typed in `from` to the display string for `to`
/// Returns "" when `text` is not a number
#[wasm_bindgen]
pub fn try_convert_js(text: &str, from: &str, to: &str) -> Result<String, JsValue> {
    let from = parse_scale(from)?;
    let to = parse_scale(to)?;
    Ok(crate::format::try_convert(text, from.converter_to(to)))
}
