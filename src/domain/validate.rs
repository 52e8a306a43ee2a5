//! Field checks shared by the input constructors.

use super::error::{DomainError, DomainResult};

/// Require a finite real strictly greater than zero.
pub(crate) fn positive_real(field: &'static str, value: f64) -> DomainResult<f64> {
    if !value.is_finite() {
        return Err(DomainError::invalid_input(
            field,
            format!("{field} must be a finite number"),
        ));
    }
    if value <= 0.0 {
        return Err(DomainError::invalid_input(field, format!("{field} must be > 0")));
    }
    Ok(value)
}

/// Require an integer count strictly greater than zero.
pub(crate) fn positive_count(field: &'static str, value: i64) -> DomainResult<u64> {
    if value <= 0 {
        return Err(DomainError::invalid_input(field, format!("{field} must be > 0")));
    }
    Ok(value.unsigned_abs())
}

/// Require a fraction in the half-open interval (0, 1].
pub(crate) fn unit_fraction(field: &'static str, value: f64) -> DomainResult<f64> {
    if !value.is_finite() {
        return Err(DomainError::invalid_input(
            field,
            format!("{field} must be a finite number"),
        ));
    }
    if !(value > 0.0 && value <= 1.0) {
        return Err(DomainError::invalid_input(
            field,
            format!("{field} must be in (0,1]"),
        ));
    }
    Ok(value)
}
