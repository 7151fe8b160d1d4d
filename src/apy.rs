use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::TermConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{ApyError, Result};
use crate::interest::{compound, dca_ledger, Ledger, TermCalculator};
use crate::types::{ContributionRecord, TermSpec};
use crate::validation::validate_rate;

/// a validated yield, optionally tied to a date range
///
/// Without a range every calculation runs over a single term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Apy {
    rate: Rate,
    range: Option<(NaiveDate, NaiveDate)>,
    config: TermConfig,
}

impl Apy {
    pub fn new(rate: Rate) -> Result<Self> {
        Ok(Self {
            rate: validate_rate(rate)?,
            range: None,
            config: TermConfig::default(),
        })
    }

    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.range = Some((start, end));
        self
    }

    pub fn with_days_per_term(mut self, days_per_term: u32) -> Self {
        self.config.days_per_term = days_per_term;
        self
    }

    pub fn rate(&self) -> Rate {
        self.rate
    }

    pub fn term_spec(&self) -> Option<TermSpec> {
        self.range.map(|(start, end)| {
            TermSpec::new(start, end).with_days_per_term(self.config.days_per_term)
        })
    }

    /// whole terms covered by the range, or 1 when no range is set
    pub fn terms(&self) -> Result<i64> {
        self.config.validate()?;
        match self.range {
            Some((start, end)) => TermCalculator::new(self.config).term_size(start, end),
            None => Ok(1),
        }
    }

    /// value of a single deposit after every term has compounded
    pub fn total(&self, principal: Money, payout_frequency: u32) -> Result<Money> {
        compound(principal, self.rate, payout_frequency, Decimal::from(self.terms()?))
    }

    /// value of depositing `amount` at every payout across the range
    pub fn dca(&self, amount: Money, payout_frequency: u32) -> Result<Money> {
        Ok(self.dca_ledger(amount, payout_frequency)?.total())
    }

    /// per-payout ledger behind [`Apy::dca`]
    pub fn dca_ledger(&self, amount: Money, payout_frequency: u32) -> Result<Ledger> {
        let period_rate = self.rate.per_period(payout_frequency)?;
        let terms = self.terms()?;
        let periods = terms
            .checked_mul(i64::from(payout_frequency))
            .ok_or_else(|| ApyError::overflow("dca"))?;

        if periods <= 0 {
            tracing::warn!(terms, "range covers no full term, dca schedule is empty");
            return Ok(Ledger::seed());
        }

        let periods = usize::try_from(periods).map_err(|_| ApyError::overflow("dca"))?;
        let schedule = vec![ContributionRecord::new(amount, period_rate); periods];
        dca_ledger(&schedule, payout_frequency)
    }
}
