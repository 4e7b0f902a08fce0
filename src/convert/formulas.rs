/// A pure numeric transform from one scale to another
pub type Converter = fn(f64) -> f64;

// Divide before multiplying so inputs near f64::MAX do not overflow in the
// intermediate product.

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius / 5.0 * 9.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) / 9.0 * 5.0
}
