//! Rendering sequences as text.

use std::fmt::Write;

use skein_foundation::{Result, Value, json};

/// Separator used by [`join`] when the caller has no preference.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Joins the display form of each element with `sep`.
///
/// Top-level strings render without quotes; strings nested inside
/// sequences or maps are quoted.
#[must_use]
pub fn join(seq: &[Value], sep: &str) -> String {
    let mut out = String::new();
    for (i, item) in seq.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        // Writing to a String cannot fail.
        let _ = write!(out, "{item}");
    }
    out
}

/// Encodes the sequence as a compact JSON array.
///
/// # Errors
///
/// Returns `Serialization` if the encoder fails.
pub fn to_json(seq: &[Value]) -> Result<String> {
    json::to_json(seq)
}
