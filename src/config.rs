use serde::{Deserialize, Serialize};

use crate::errors::{ApyError, Result};
use crate::types::CompoundingFrequency;

/// days in the canonical (annual) term a rate is quoted for
pub const DEFAULT_DAYS_PER_TERM: u32 = 365;

/// payments per term used by amortized loans unless overridden
pub const DEFAULT_PAYMENTS_PER_TERM: u32 = 12;

/// term sizing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermConfig {
    pub days_per_term: u32,
}

impl Default for TermConfig {
    fn default() -> Self {
        Self {
            days_per_term: DEFAULT_DAYS_PER_TERM,
        }
    }
}

impl TermConfig {
    pub fn validate(&self) -> Result<()> {
        if self.days_per_term == 0 {
            return Err(ApyError::domain("days per term must be greater than zero"));
        }
        Ok(())
    }
}

/// terms for a lump-sum (non-amortizing) loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// days until the loan is fully paid off
    pub days: i64,
    /// times per term interest is accrued; 1 is a flat rate
    pub payout_frequency: u32,
    pub days_per_term: u32,
    /// payments made per term; falls back to `payout_frequency`
    pub payments_per_term: Option<u32>,
}

impl Default for LoanTerms {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS_PER_TERM as i64,
            payout_frequency: 1,
            days_per_term: DEFAULT_DAYS_PER_TERM,
            payments_per_term: None,
        }
    }
}

impl LoanTerms {
    pub fn for_days(days: i64) -> Self {
        Self {
            days,
            ..Self::default()
        }
    }

    pub fn with_payout_frequency(mut self, payout_frequency: impl Into<u32>) -> Self {
        self.payout_frequency = payout_frequency.into();
        self
    }

    pub fn with_days_per_term(mut self, days_per_term: u32) -> Self {
        self.days_per_term = days_per_term;
        self
    }

    pub fn with_payments_per_term(mut self, payments_per_term: u32) -> Self {
        self.payments_per_term = Some(payments_per_term);
        self
    }

    pub fn effective_payments_per_term(&self) -> u32 {
        self.payments_per_term.unwrap_or(self.payout_frequency)
    }

    pub fn validate(&self) -> Result<()> {
        if self.days_per_term == 0 {
            return Err(ApyError::domain("days per term must be greater than zero"));
        }
        if self.days == 0 {
            return Err(ApyError::domain("loan must span at least one day"));
        }
        if self.payout_frequency == 0 {
            return Err(ApyError::domain("payout frequency must be non-zero"));
        }
        if self.effective_payments_per_term() == 0 {
            return Err(ApyError::domain("payments per term must be non-zero"));
        }
        Ok(())
    }
}

/// terms for a fixed-payment amortized loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizedLoanTerms {
    pub payments_per_term: u32,
    pub year_count: u32,
}

impl Default for AmortizedLoanTerms {
    fn default() -> Self {
        Self {
            payments_per_term: DEFAULT_PAYMENTS_PER_TERM,
            year_count: 1,
        }
    }
}

impl AmortizedLoanTerms {
    pub fn for_years(year_count: u32) -> Self {
        Self {
            year_count,
            ..Self::default()
        }
    }

    pub fn with_frequency(mut self, frequency: CompoundingFrequency) -> Self {
        self.payments_per_term = frequency.periods_per_term();
        self
    }

    pub fn with_payments_per_term(mut self, payments_per_term: u32) -> Self {
        self.payments_per_term = payments_per_term;
        self
    }

    pub fn payment_count(&self) -> Result<u32> {
        self.payments_per_term
            .checked_mul(self.year_count)
            .ok_or_else(|| ApyError::overflow("payment_count"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.payments_per_term == 0 {
            return Err(ApyError::domain("payments per term must be non-zero"));
        }
        if self.year_count == 0 {
            return Err(ApyError::domain("amortized loan needs at least one term"));
        }
        self.payment_count()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loan_terms_defaults() {
        let terms = LoanTerms::default();
        assert_eq!(terms.days, 365);
        assert_eq!(terms.payout_frequency, 1);
        assert_eq!(terms.effective_payments_per_term(), 1);

        let monthly = LoanTerms::for_days(365).with_payout_frequency(CompoundingFrequency::Monthly);
        assert_eq!(monthly.effective_payments_per_term(), 12);

        let overridden = monthly.with_payments_per_term(4);
        assert_eq!(overridden.effective_payments_per_term(), 4);
    }

    #[test]
    fn test_loan_terms_validation() {
        assert!(LoanTerms::default().validate().is_ok());
        assert!(LoanTerms::for_days(0).validate().is_err());
        assert!(LoanTerms::default().with_days_per_term(0).validate().is_err());
        assert!(LoanTerms::default().with_payout_frequency(0u32).validate().is_err());
    }

    #[test]
    fn test_amortized_terms() {
        let terms = AmortizedLoanTerms::for_years(20);
        assert_eq!(terms.payments_per_term, 12);
        assert_eq!(terms.payment_count().unwrap(), 240);
        assert!(terms.validate().is_ok());

        let quarterly = terms.with_frequency(CompoundingFrequency::Quarterly);
        assert_eq!(quarterly.payment_count().unwrap(), 80);

        assert!(AmortizedLoanTerms::for_years(0).validate().is_err());
    }

    #[test]
    fn test_payment_count_overflow() {
        let terms = AmortizedLoanTerms::for_years(65_536).with_payments_per_term(65_536);
        assert!(matches!(terms.payment_count(), Err(ApyError::CalculationError { .. })));
        assert!(matches!(terms.validate(), Err(ApyError::CalculationError { .. })));
    }

    #[test]
    fn test_config_serializes() {
        let json = serde_json::to_string(&TermConfig::default()).unwrap();
        assert_eq!(json, r#"{"days_per_term":365}"#);
        assert!(TermConfig { days_per_term: 0 }.validate().is_err());
    }
}
