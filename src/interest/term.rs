use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::TermConfig;
use crate::errors::{ApyError, Result};

/// converts day spans into whole compounding terms
#[derive(Debug, Clone, Copy, Default)]
pub struct TermCalculator {
    pub config: TermConfig,
}

impl TermCalculator {
    pub fn new(config: TermConfig) -> Self {
        Self { config }
    }

    pub fn term_size(&self, start: NaiveDate, end: NaiveDate) -> Result<i64> {
        term_size(start, end, self.config.days_per_term)
    }

    pub fn term_size_from_days(&self, days: i64) -> Result<i64> {
        term_size_from_days(days, self.config.days_per_term)
    }
}

/// number of terms between two dates, `round((end - start) / days_per_term)`
pub fn term_size(start: NaiveDate, end: NaiveDate, days_per_term: u32) -> Result<i64> {
    term_size_from_days((end - start).num_days(), days_per_term)
}

/// number of terms in a signed day count
///
/// Halves round away from zero, so 2.5 terms is 3 and -2.5 terms is -3.
pub fn term_size_from_days(days: i64, days_per_term: u32) -> Result<i64> {
    if days_per_term == 0 {
        return Err(ApyError::domain("days per term must be greater than zero"));
    }

    let ratio = Decimal::from(days) / Decimal::from(days_per_term);
    let terms = ratio
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| ApyError::overflow("term_size"))?;

    tracing::trace!(days, days_per_term, terms, "sized term");
    Ok(terms)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_exact_terms() {
        assert_eq!(term_size(date(1999, 1, 1), date(2000, 1, 1), 365).unwrap(), 1);
        assert_eq!(term_size_from_days(730, 365).unwrap(), 2);
        assert_eq!(term_size_from_days(90, 30).unwrap(), 3);
    }

    #[test]
    fn test_leap_range_rounds_to_nearest() {
        // 20 years including 5 leap days
        let terms = term_size(date(1999, 1, 1), date(2019, 1, 1), 365).unwrap();
        assert_eq!(terms, 20);
    }

    #[test]
    fn test_empty_and_reversed_ranges() {
        let day = date(2020, 6, 1);
        assert_eq!(term_size(day, day, 365).unwrap(), 0);
        assert_eq!(term_size(date(2022, 1, 1), date(2020, 1, 1), 365).unwrap(), -2);
        assert_eq!(term_size_from_days(100, 365).unwrap(), 0);
    }

    #[test]
    fn test_half_terms_round_away_from_zero() {
        assert_eq!(term_size_from_days(5, 2).unwrap(), 3);
        assert_eq!(term_size_from_days(-5, 2).unwrap(), -3);
        assert_eq!(term_size_from_days(3, 2).unwrap(), 2);
        assert_eq!(term_size_from_days(1, 2).unwrap(), 1);
    }

    #[test]
    fn test_zero_days_per_term_is_rejected() {
        let err = term_size_from_days(365, 0).unwrap_err();
        assert!(matches!(err, ApyError::DomainError { .. }));
    }

    #[test]
    fn test_calculator_uses_config() {
        let calculator = TermCalculator::new(TermConfig { days_per_term: 30 });
        assert_eq!(calculator.term_size(date(2020, 1, 1), date(2020, 3, 1)).unwrap(), 2);
        assert_eq!(TermCalculator::default().term_size_from_days(365).unwrap(), 1);
    }
}
