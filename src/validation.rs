use crate::decimal::Rate;
use crate::errors::{ApyError, Result};

/// check a rate before it is attached to a rate-bearing entity
///
/// Pure engines do not call this; they accept whatever rate they are given.
pub fn validate_rate(rate: Rate) -> Result<Rate> {
    if rate.as_decimal().is_sign_negative() || rate.as_decimal().is_zero() {
        return Err(ApyError::invalid_rate(rate));
    }
    Ok(rate)
}
