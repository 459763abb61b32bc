//! Demo implementations for the harness runner.

pub mod binary_search;
pub mod selection_sort;

/// Render a slice the way the demos print it: `[a b c]`.
#[must_use]
pub fn render_slice(values: &[i64]) -> String {
    let parts: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(" "))
}
