//! Result formatting for the fixed-width display.
//!
//! Computed values have to fit back onto the panel, which has room for
//! `width` digits plus one decimal point. The formatter prefers the exact
//! decimal rendering, falls back to scientific notation, and as a last
//! resort hard-truncates.

/// Format a computed value for a `width`-digit display.
///
/// The shortest exact decimal rendering is used when it fits, with trailing
/// fractional zeros and a bare trailing point stripped (`5.0` becomes `"5"`).
/// Wider values are re-rendered in scientific notation with `width - 5`
/// fractional mantissa digits, and truncated outright if even that is too
/// long.
pub fn format_number(value: f64, width: usize) -> String {
    let rendered = value.to_string();
    let rendered = if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered
    };

    // One extra character of budget for the decimal point.
    let budget = width + 1;
    if rendered.len() > budget {
        let precision = width.saturating_sub(5);
        let scientific = format!("{value:.precision$e}");
        return if scientific.len() > budget {
            scientific[..budget].to_string()
        } else {
            scientific
        };
    }

    if rendered.is_empty() {
        String::from("0")
    } else {
        rendered
    }
}
