// Fixed-precision rounding and display of converted amounts

/// Largest supported number of decimal places
pub const MAX_PRECISION: u32 = 12;

/// Default number of decimal places kept in converted amounts
pub const DEFAULT_PRECISION: u32 = 3;

/// Round half away from zero to `places` decimals.
///
/// Values too large to scale without overflowing are returned unchanged
/// (they carry no fractional digits at that magnitude anyway).
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places.min(MAX_PRECISION) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Shortest decimal representation, no exponent and no padding.
/// Negative zero is shown as "0".
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
