use itertools::Itertools;

/// Formats a number for gnuplot and for tick labels.
/// - Always keeps a decimal point (`1.0`, not `1`)
/// - Rounds to 10 decimals so `0.1 * 3` prints as `0.3`
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let mut s = format!("{:.10}", value);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.push('0');
    }
    if s == "-0.0" {
        return "0.0".to_string();
    }
    s
}

/// Double-quoted gnuplot string, with backslashes and quotes escaped.
pub fn quote_text(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Bucket label for clustered histograms, e.g. `1.0-2.0`.
pub fn format_bucket_label(low: f64, high: f64) -> String {
    format!("{}-{}", format_number(low), format_number(high))
}

/// Explicit gnuplot tick list: `("a" 0.0, "b" 1.0)`.
/// Each label is placed at its paired axis position.
pub fn format_tick_list<S: AsRef<str>>(ticks: &[(S, f64)]) -> String {
    let body = ticks
        .iter()
        .map(|(label, pos)| format!("{} {}", quote_text(label.as_ref()), format_number(*pos)))
        .join(", ");
    format!("({})", body)
}

/// `start, increment, end` tick range.
pub fn format_tick_range(start: f64, increment: f64, end: f64) -> String {
    format!(
        "{}, {}, {}",
        format_number(start),
        format_number(increment),
        format_number(end)
    )
}
