use rust_decimal::Decimal;

use crate::errors::{ApyError, Result};
use crate::types::PriceLot;

/// average cost per unit across purchases, weighted by amount invested
///
/// `(Σ w) / (Σ w / price)` where `w = amount / Σ amount`. Both sums are taken
/// explicitly rather than assuming `Σ w == 1`.
pub fn weighted_harmonic_mean(lots: &[PriceLot]) -> Result<Decimal> {
    if lots.is_empty() {
        return Err(ApyError::domain("weighted harmonic mean of an empty set is undefined"));
    }

    let invested: Decimal = lots.iter().map(|lot| lot.amount_invested).sum();
    if invested.is_zero() {
        return Err(ApyError::domain("total amount invested is zero"));
    }

    let (total_weight, weighted_values) =
        lots.iter()
            .try_fold((Decimal::ZERO, Decimal::ZERO), |(weights, values), lot| {
                if lot.unit_price.is_zero() {
                    return Err(ApyError::domain("lot has a zero unit price"));
                }
                let weight = lot.amount_invested / invested;
                Ok((weights + weight, values + weight / lot.unit_price))
            })?;

    if weighted_values.is_zero() {
        return Err(ApyError::domain("weighted price sum is zero"));
    }

    let mean = total_weight / weighted_values;
    tracing::debug!(lots = lots.len(), %invested, %mean, "weighted harmonic mean");
    Ok(mean)
}
