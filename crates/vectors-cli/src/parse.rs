//! Reading vectors and scalars from command-line text.
//!
//! Vectors are written as numbers separated by commas and/or whitespace,
//! optionally wrapped in brackets, so both `1,2,3` and the display form
//! `"[ 1 2 3 ]"` are accepted.

use anyhow::{Context, Result};
use vectors::Vector;

pub fn parse_vector(input: &str) -> Result<Vector> {
    let trimmed = input.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);

    let values = inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .with_context(|| format!("Invalid number '{}' in vector '{}'", token, input))
        })
        .collect::<Result<Vec<f64>>>()?;

    if values.is_empty() {
        anyhow::bail!("Vector '{}' has no elements", input);
    }
    Ok(Vector::from(values))
}

pub fn parse_scalar(input: &str) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .with_context(|| format!("Invalid scalar '{}'", input))
}
