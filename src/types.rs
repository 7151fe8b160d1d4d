use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_DAYS_PER_TERM;
use crate::decimal::{Money, Rate};
use crate::errors::Result;

/// date range measured in whole terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermSpec {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days_per_term: u32,
}

impl TermSpec {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            days_per_term: DEFAULT_DAYS_PER_TERM,
        }
    }

    pub fn with_days_per_term(mut self, days_per_term: u32) -> Self {
        self.days_per_term = days_per_term;
        self
    }

    /// signed number of days in the range
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// whole terms in the range; zero or negative for short or reversed ranges
    pub fn terms(&self) -> Result<i64> {
        crate::interest::term_size(self.start, self.end, self.days_per_term)
    }
}

/// one period of a dollar-cost-averaging schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContributionRecord {
    pub amount: Money,
    pub rate: Rate,
}

impl ContributionRecord {
    pub fn new(amount: Money, rate: Rate) -> Self {
        Self { amount, rate }
    }
}

/// a purchase: amount invested at a unit price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceLot {
    pub amount_invested: Decimal,
    pub unit_price: Decimal,
}

impl PriceLot {
    pub fn new(amount_invested: Decimal, unit_price: Decimal) -> Self {
        Self {
            amount_invested,
            unit_price,
        }
    }
}

impl From<(Decimal, Decimal)> for PriceLot {
    fn from((amount_invested, unit_price): (Decimal, Decimal)) -> Self {
        PriceLot::new(amount_invested, unit_price)
    }
}

/// common payout frequencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompoundingFrequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
}

impl CompoundingFrequency {
    /// number of payouts per term
    pub fn periods_per_term(&self) -> u32 {
        match self {
            CompoundingFrequency::Daily => 365,
            CompoundingFrequency::Weekly => 52,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::SemiAnnual => 2,
            CompoundingFrequency::Annual => 1,
        }
    }
}

impl From<CompoundingFrequency> for u32 {
    fn from(frequency: CompoundingFrequency) -> u32 {
        frequency.periods_per_term()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_term_spec_days() {
        let spec = TermSpec::new(date(1999, 1, 1), date(2000, 1, 1));
        assert_eq!(spec.days(), 365);
        assert_eq!(spec.terms().unwrap(), 1);

        let reversed = TermSpec::new(date(2000, 1, 1), date(1999, 1, 1));
        assert_eq!(reversed.days(), -365);
        assert_eq!(reversed.terms().unwrap(), -1);
    }

    #[test]
    fn test_frequency_conversion() {
        assert_eq!(u32::from(CompoundingFrequency::Monthly), 12);
        assert_eq!(CompoundingFrequency::Daily.periods_per_term(), 365);
    }
}
