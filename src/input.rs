// ✏️ Input parsing - free text → typed values
// Each parser returns an InputError instead of panicking so handlers can branch on it

use crate::error::InputError;
use std::num::IntErrorKind;

/// Lower-case and trim a category name, without judging the result
pub fn canonical_category(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Canonical category name; empty results are rejected
pub fn normalize_category(raw: &str) -> Result<String, InputError> {
    let category = canonical_category(raw);
    if category.is_empty() {
        return Err(InputError::EmptyCategory);
    }
    Ok(category)
}

/// Parse a positive, finite decimal amount
pub fn parse_amount(raw: &str) -> Result<f64, InputError> {
    let amount: f64 = raw.trim().parse().map_err(|_| InputError::InvalidAmount)?;

    // nan/inf parse fine but have no JSON representation
    if !amount.is_finite() {
        return Err(InputError::InvalidAmount);
    }
    if amount <= 0.0 {
        return Err(InputError::NonPositiveAmount);
    }

    Ok(amount)
}

/// Parse a 1-based ordinal and turn it into an index into a list of `len` items
pub fn parse_ordinal(raw: &str, len: usize) -> Result<usize, InputError> {
    let ordinal: i64 = raw.trim().parse().map_err(|err: std::num::ParseIntError| {
        match err.kind() {
            // a whole number, just not one that can name an entry
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InputError::InvalidOrdinal,
            _ => InputError::InvalidNumber,
        }
    })?;

    match ordinal.checked_sub(1).and_then(|index| usize::try_from(index).ok()) {
        Some(index) if index < len => Ok(index),
        _ => Err(InputError::InvalidOrdinal),
    }
}
