use std::num::ParseIntError;

use crate::server::error::validation::ValidationError;

/// Parses a server id taken from a query string.
///
/// Surrounding whitespace is rejected like any other malformed input.
///
/// # Arguments
/// - `value` - The raw query value
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(ParseIntError)` - Value is not an integer in `i32` range
pub fn parse_id(value: &str) -> Result<i32, ParseIntError> {
    value.parse::<i32>()
}

/// Largest limit SQLite accepts; `LIMIT` binds as a signed 64-bit integer.
pub const MAX_QUANTITY: u64 = i64::MAX as u64;

/// Parses a result limit taken from a query string.
///
/// Values above [`MAX_QUANTITY`] are clamped to it, no table holds that many rows.
///
/// # Returns
/// - `Ok(u64)` - Non-negative limit, at most `MAX_QUANTITY`
/// - `Err(ValidationError::InvalidQuantity)` - Value is negative or not an integer
pub fn parse_quantity(value: &str) -> Result<u64, ValidationError> {
    let qty = value
        .parse::<u64>()
        .map_err(|_| ValidationError::InvalidQuantity)?;

    Ok(qty.min(MAX_QUANTITY))
}
