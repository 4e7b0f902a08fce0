use crate::render::CalculatorTree;

/// Plain-text rendering used by the terminal session:
///
/// ```text
/// Enter temperature in Celsius:
///   [37]
/// Enter temperature in Fahrenheit:
///   [98.6]
/// The water would not boil
/// ```
///
/// The verdict line is left out when there is no verdict.
pub fn render_text(tree: &CalculatorTree) -> String {
    let mut lines = vec![tree.celsius.to_string(), tree.fahrenheit.to_string()];
    if let Some(verdict) = &tree.verdict {
        lines.push(verdict.to_string());
    }
    lines.join("\n")
}
