use rust_decimal::Decimal;

use crate::decimal::{checked_pow, Money, Rate};
use crate::errors::{ApyError, Result};
use crate::types::CompoundingFrequency;

/// engine for compound interest calculations
#[derive(Debug, Clone, Copy)]
pub struct CompoundingEngine {
    pub payout_frequency: u32,
}

impl CompoundingEngine {
    pub fn new(frequency: CompoundingFrequency) -> Self {
        Self {
            payout_frequency: frequency.periods_per_term(),
        }
    }

    pub fn with_payout_frequency(payout_frequency: u32) -> Self {
        Self { payout_frequency }
    }

    /// amount after compounding `principal` for `term_count` terms
    pub fn compound(&self, principal: Money, rate: Rate, term_count: Decimal) -> Result<Money> {
        compound(principal, rate, self.payout_frequency, term_count)
    }

    /// interest earned on top of `principal`
    pub fn interest(&self, principal: Money, rate: Rate, term_count: Decimal) -> Result<Money> {
        Ok(self.compound(principal, rate, term_count)? - principal)
    }
}

/// `principal * (1 + rate / payout_frequency) ^ (payout_frequency * term_count)`
///
/// The rate is not validated: negative rates model decay, and negative term counts
/// discount back in time.
pub fn compound(
    principal: Money,
    rate: Rate,
    payout_frequency: u32,
    term_count: Decimal,
) -> Result<Money> {
    let factor = growth_factor(rate, payout_frequency, term_count)?;
    let amount = principal
        .checked_scale(factor)
        .ok_or_else(|| ApyError::overflow("compound"))?;

    tracing::debug!(
        %principal,
        rate = %rate.as_decimal(),
        payout_frequency,
        %term_count,
        %amount,
        "compounded principal"
    );
    Ok(amount)
}

/// `(1 + rate / payout_frequency) ^ (payout_frequency * term_count)`
pub fn growth_factor(rate: Rate, payout_frequency: u32, term_count: Decimal) -> Result<Decimal> {
    let period_rate = rate.per_period(payout_frequency)?;
    let base = Decimal::ONE + period_rate.as_decimal();
    let exponent = Decimal::from(payout_frequency)
        .checked_mul(term_count)
        .ok_or_else(|| ApyError::overflow("growth_factor"))?;

    checked_pow(base, exponent)
}

/// effective yield over one term for a nominal rate paid out `payout_frequency` times
pub fn effective_rate(rate: Rate, payout_frequency: u32) -> Result<Rate> {
    let factor = growth_factor(rate, payout_frequency, Decimal::ONE)?;
    Ok(Rate::from_decimal(factor - Decimal::ONE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn assert_close(actual: Money, expected: Decimal) {
        let diff = (actual.as_decimal() - expected).abs();
        assert!(diff <= dec!(0.01), "expected {} got {}", expected, actual);
    }

    #[test]
    fn test_payout_frequencies() {
        let principal = Money::from_major(1200);
        let rate = Rate::from_percentage(10);

        assert_close(compound(principal, rate, 12, Decimal::ONE).unwrap(), dec!(1325.66));
        assert_close(compound(principal, rate, 52, Decimal::ONE).unwrap(), dec!(1326.07));
        assert_close(compound(principal, rate, 365, Decimal::ONE).unwrap(), dec!(1326.19));
    }

    #[test]
    fn test_single_payout_is_simple_growth() {
        let amount = compound(Money::from_major(1200), Rate::from_percentage(10), 1, Decimal::ONE).unwrap();
        assert_eq!(amount, Money::from_major(1320));
    }

    #[test]
    fn test_negative_rate_decays() {
        let rate = Rate::from_decimal(dec!(-0.1));
        let amount = compound(Money::from_major(1000), rate, 1, Decimal::ONE).unwrap();
        assert_eq!(amount, Money::from_major(900));

        let two_terms = compound(Money::from_major(1000), rate, 1, dec!(2)).unwrap();
        assert_eq!(two_terms, Money::from_major(810));
    }

    #[test]
    fn test_zero_and_negative_terms() {
        let rate = Rate::from_percentage(10);
        let principal = Money::from_major(1210);

        assert_eq!(compound(principal, rate, 12, Decimal::ZERO).unwrap(), principal);

        let discounted = compound(principal, rate, 1, dec!(-2)).unwrap();
        assert_eq!(discounted.round_dp(6), Money::from_major(1000));
    }

    #[test]
    fn test_fractional_terms() {
        let rate = Rate::from_percentage(21);
        // 1.21 ^ 0.5 = 1.1
        let half = compound(Money::from_major(1000), rate, 1, dec!(0.5)).unwrap();
        assert_close(half, dec!(1100));
    }

    #[test]
    fn test_undefined_growth_is_domain_error() {
        // 1 + (-3) = -2, and a half term needs its square root
        let err = compound(Money::from_major(100), Rate::from_decimal(dec!(-3)), 1, dec!(0.5)).unwrap_err();
        assert!(matches!(err, ApyError::DomainError { .. }));

        // a -100% rate wipes the balance, so discounting back divides by zero
        let err = compound(Money::from_major(100), Rate::from_decimal(dec!(-1)), 1, dec!(-1)).unwrap_err();
        assert!(matches!(err, ApyError::DomainError { .. }));
    }

    #[test]
    fn test_zero_payout_frequency_is_rejected() {
        let err = compound(Money::from_major(100), Rate::from_percentage(5), 0, Decimal::ONE).unwrap_err();
        assert!(matches!(err, ApyError::DomainError { .. }));
    }

    #[test]
    fn test_engine_interest() {
        let engine = CompoundingEngine::new(CompoundingFrequency::Annual);
        let interest = engine
            .interest(Money::from_major(10_000), Rate::from_percentage(5), dec!(3))
            .unwrap();
        assert_eq!(interest.round_dp(2), Money::from_str_exact("1576.25").unwrap());

        let monthly = CompoundingEngine::with_payout_frequency(12);
        assert_eq!(monthly.payout_frequency, 12);
    }

    #[test]
    fn test_effective_rate() {
        let apy = effective_rate(Rate::from_percentage(18), 12).unwrap();
        assert!(apy.as_percentage() > dec!(19.5));
        assert!(apy.as_percentage() < dec!(19.6));
    }
}
