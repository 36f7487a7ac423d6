pub mod cases;
pub mod config;

use anyhow::{Context, Result};
use ordering_core::{compare, from_json_str, Operator};

/// Compare two JSON encoded values with the given operator.
pub fn compare_pair(left: &str, op: &str, right: &str) -> Result<bool> {
    let left = from_json_str(left).context("invalid left operand")?;
    let right = from_json_str(right).context("invalid right operand")?;
    let op: Operator = op.parse()?;
    let result = compare(&left, &right, op)?;
    log::info!("{left} {op} {right} -> {result}");
    Ok(result)
}
