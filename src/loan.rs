use chrono::NaiveDate;
use serde::Serialize;

use crate::config::{AmortizedLoanTerms, LoanTerms};
use crate::decimal::{Money, Rate};
use crate::errors::{ApyError, Result};
use crate::payments::{self, AmortizationSchedule};
use crate::validation::validate_rate;

/// a borrowed amount at a validated, positive rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Loan {
    borrow: Money,
    rate: Rate,
}

impl Loan {
    pub fn new(borrow: Money, rate: Rate) -> Result<Self> {
        Ok(Self {
            borrow,
            rate: validate_rate(rate)?,
        })
    }

    pub fn builder() -> LoanBuilder {
        LoanBuilder::new()
    }

    pub fn borrow(&self) -> Money {
        self.borrow
    }

    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// borrowed amount plus interest accrued over `terms.days`
    ///
    /// The stored rate is quoted per `days_per_term`, so it is rescaled to the loan's
    /// actual span before compounding.
    pub fn total_owed(&self, terms: &LoanTerms) -> Result<Money> {
        payments::total_owed(self.borrow, self.rate, terms)
    }

    /// size of each payment when the total owed is split evenly
    pub fn payment_size(&self, terms: &LoanTerms) -> Result<Money> {
        payments::payment_size(self.borrow, self.rate, terms)
    }

    /// fixed payment where interest accrues on the remaining debt
    pub fn amortized_payment_size(&self, terms: &AmortizedLoanTerms) -> Result<Money> {
        payments::amortized_payment_size(self.borrow, self.rate, terms)
    }

    pub fn amortized_total_owed(&self, terms: &AmortizedLoanTerms) -> Result<Money> {
        payments::amortized_total_owed(self.borrow, self.rate, terms)
    }

    pub fn amortization_schedule(&self, terms: AmortizedLoanTerms) -> Result<AmortizationSchedule> {
        AmortizationSchedule::generate(self.borrow, self.rate, terms)
    }

    /// amortized payment for a loan given by its start and end dates
    pub fn amortized_payment_size_between(&self, _start: NaiveDate, _end: NaiveDate) -> Result<Money> {
        Err(ApyError::NotImplemented {
            operation: "amortized_payment_size_between",
        })
    }

    /// amortized total for a loan given by its start and end dates
    pub fn amortized_total_owed_between(&self, _start: NaiveDate, _end: NaiveDate) -> Result<Money> {
        Err(ApyError::NotImplemented {
            operation: "amortized_total_owed_between",
        })
    }
}

/// builder for loans
#[derive(Debug, Default)]
pub struct LoanBuilder {
    borrow: Option<Money>,
    rate: Option<Rate>,
}

impl LoanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn borrow(mut self, amount: Money) -> Self {
        self.borrow = Some(amount);
        self
    }

    pub fn rate(mut self, rate: Rate) -> Self {
        self.rate = Some(rate);
        self
    }

    pub fn build(self) -> Result<Loan> {
        let borrow = self
            .borrow
            .ok_or_else(|| ApyError::domain("loan amount not set"))?;
        let rate = self.rate.ok_or(ApyError::InvalidRate {
            rate: "unset".to_string(),
        })?;
        Loan::new(borrow, rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn loan(amount: i64) -> Loan {
        Loan::new(Money::from_major(amount), Rate::from_percentage(10)).unwrap()
    }

    #[test]
    fn test_rejects_non_positive_rate() {
        let zero = Loan::new(Money::from_major(1200), Rate::ZERO);
        assert!(matches!(zero, Err(ApyError::InvalidRate { .. })));

        let negative = Loan::new(Money::from_major(1200), Rate::from_decimal(dec!(-0.1)));
        assert!(matches!(negative, Err(ApyError::InvalidRate { .. })));
    }

    #[test]
    fn test_payment_size_over_one_year() {
        let days = (date(2000, 1, 1) - date(1999, 1, 1)).num_days();
        let terms = LoanTerms::for_days(days);
        let loan = loan(1200);

        assert_eq!(loan.total_owed(&terms).unwrap(), Money::from_major(1320));
        assert_eq!(loan.payment_size(&terms).unwrap(), Money::from_major(1320));
        assert_eq!(
            loan.payment_size(&terms.with_payments_per_term(12)).unwrap(),
            Money::from_major(110)
        );
    }

    #[test]
    fn test_amortized_over_twenty_years() {
        let terms = AmortizedLoanTerms::for_years(20);
        let loan = loan(100_000);

        let payment = loan.amortized_payment_size(&terms).unwrap();
        assert!((payment.as_decimal() - dec!(965.0216)).abs() <= dec!(0.01));

        let total = loan.amortized_total_owed(&terms).unwrap();
        assert!((total.as_decimal() - dec!(231605.194)).abs() <= dec!(0.01));

        let schedule = loan.amortization_schedule(terms).unwrap();
        assert_eq!(schedule.get_payment(1).unwrap().payment_amount, payment);
    }

    #[test]
    fn test_date_range_amortization_not_implemented() {
        let loan = loan(1200);
        let start = date(1999, 1, 1);
        let end = date(2019, 1, 1);

        assert!(matches!(
            loan.amortized_payment_size_between(start, end),
            Err(ApyError::NotImplemented { .. })
        ));
        let err = loan.amortized_total_owed_between(start, end).unwrap_err();
        assert_eq!(err.to_string(), "not implemented: amortized_total_owed_between");
    }

    #[test]
    fn test_builder() {
        let built = Loan::builder()
            .borrow(Money::from_major(500))
            .rate(Rate::from_bps(750))
            .build()
            .unwrap();
        assert_eq!(built.borrow(), Money::from_major(500));
        assert_eq!(built.rate().as_decimal(), dec!(0.075));

        assert!(Loan::builder().borrow(Money::from_major(500)).build().is_err());
        assert!(Loan::builder().rate(Rate::from_bps(750)).build().is_err());
    }
}
