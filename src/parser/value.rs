use crate::error::{PlotError, Result};

/// Parse a numeric token, accepting a comma as the decimal separator.
///
/// Only the first comma is replaced, so `"1,2,3"` is rejected like any other
/// token with two separators.
pub fn parse_value(token: &str) -> Result<f64> {
    let normalized = token.replacen(',', ".", 1);
    normalized.parse::<f64>().map_err(|e| PlotError::Parse {
        token: token.to_string(),
        reason: e.to_string(),
    })
}
