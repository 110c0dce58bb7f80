//! Rate formatting for tooltips and axis ticks.

/// Trims trailing zeros (and a dangling decimal point) from a fixed-point string.
pub fn trim_trailing_zeros(formatted: String) -> String {
    if !formatted.contains('.') {
        return formatted;
    }
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Format a rate with at most `decimals` places, trailing zeros removed.
pub fn display_rate(rate: f64, decimals: usize) -> String {
    let formatted = trim_trailing_zeros(format!("{:.1$}", rate, decimals));
    if formatted == "-0" {
        "0".to_string()
    } else {
        formatted
    }
}
