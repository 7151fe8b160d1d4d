use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{AmortizedLoanTerms, LoanTerms};
use crate::decimal::{Money, Rate};
use crate::errors::{ApyError, Result};
use crate::interest::{compound, growth_factor, term_size_from_days};

/// scheduled payment in amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduledPayment {
    pub payment_number: u32,
    pub beginning_balance: Money,
    pub payment_amount: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub ending_balance: Money,
    pub cumulative_interest: Money,
    pub cumulative_principal: Money,
}

/// amortization schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub principal: Money,
    pub interest_rate: Rate,
    pub terms: AmortizedLoanTerms,
    pub payments: Vec<ScheduledPayment>,
    pub total_interest: Money,
    pub total_payment: Money,
}

impl AmortizationSchedule {
    /// generate payment schedule
    pub fn generate(principal: Money, interest_rate: Rate, terms: AmortizedLoanTerms) -> Result<Self> {
        let payments = calculate_schedule(principal, interest_rate, &terms)?;

        let total_interest = payments.iter().map(|p| p.interest_portion).sum();
        let total_payment = payments.iter().map(|p| p.payment_amount).sum();

        Ok(Self {
            principal,
            interest_rate,
            terms,
            payments,
            total_interest,
            total_payment,
        })
    }

    /// get payment for specific period
    pub fn get_payment(&self, payment_number: u32) -> Option<&ScheduledPayment> {
        let index = payment_number.checked_sub(1)? as usize;
        self.payments.get(index)
    }

    /// get remaining balance after payment
    pub fn balance_after_payment(&self, payment_number: u32) -> Money {
        self.get_payment(payment_number)
            .map(|p| p.ending_balance)
            .unwrap_or(self.principal)
    }
}

/// convert a rate quoted per canonical term to the loan's actual day span,
/// `rate / (actual_days / days_per_term)`
///
/// The day ratio is exact, not floored, so a 400-day loan at 10% is rescaled by
/// 400/365 rather than by one whole term.
pub fn rescale_rate(rate: Rate, actual_days: i64, days_per_term: u32) -> Result<Rate> {
    if days_per_term == 0 {
        return Err(ApyError::domain("days per term must be greater than zero"));
    }
    if actual_days == 0 {
        return Err(ApyError::domain("cannot rescale a rate over a zero-day span"));
    }

    let span = Decimal::from(actual_days) / Decimal::from(days_per_term);
    Ok(Rate::from_decimal(rate.as_decimal() / span))
}

/// principal plus accrued interest for a lump-sum loan
pub fn total_owed(principal: Money, rate: Rate, terms: &LoanTerms) -> Result<Money> {
    terms.validate()?;

    let adjusted = rescale_rate(rate, terms.days, terms.days_per_term)?;
    let term_count = term_size_from_days(terms.days, terms.days_per_term)?;
    let owed = compound(principal, adjusted, terms.payout_frequency, Decimal::from(term_count))?;

    tracing::debug!(
        %principal,
        adjusted_rate = %adjusted.as_decimal(),
        term_count,
        %owed,
        "total owed"
    );
    Ok(owed)
}

/// equal share of the total owed per payment, without amortizing interest
pub fn payment_size(principal: Money, rate: Rate, terms: &LoanTerms) -> Result<Money> {
    let owed = total_owed(principal, rate, terms)?;
    let term_count = term_size_from_days(terms.days, terms.days_per_term)?;

    let payments = Decimal::from(terms.effective_payments_per_term()) * Decimal::from(term_count);
    if payments.is_zero() {
        return Err(ApyError::domain("loan spans less than one term, no payments to divide across"));
    }

    Ok(owed / payments)
}

/// fixed payment that retires the loan after `payments_per_term * year_count` payments
///
/// `(rate * principal) / (n * (1 - (1 + rate / n) ^ (-n * years)))`
pub fn amortized_payment_size(principal: Money, rate: Rate, terms: &AmortizedLoanTerms) -> Result<Money> {
    Ok(Money::from_decimal(amortized_payment(principal, rate, terms)?))
}

/// sum of every fixed payment over the life of the loan
pub fn amortized_total_owed(principal: Money, rate: Rate, terms: &AmortizedLoanTerms) -> Result<Money> {
    let payment = amortized_payment(principal, rate, terms)?;
    let total = payment
        .checked_mul(Decimal::from(terms.payment_count()?))
        .ok_or_else(|| ApyError::overflow("amortized_total_owed"))?;
    Ok(Money::from_decimal(total))
}

fn amortized_payment(principal: Money, rate: Rate, terms: &AmortizedLoanTerms) -> Result<Decimal> {
    terms.validate()?;

    let n = Decimal::from(terms.payments_per_term);
    let discount = growth_factor(rate, terms.payments_per_term, -Decimal::from(terms.year_count))?;
    let denominator = n * (Decimal::ONE - discount);
    if denominator.is_zero() {
        return Err(ApyError::domain("amortization undefined for a zero rate"));
    }

    let payment = rate
        .as_decimal()
        .checked_mul(principal.as_decimal())
        .and_then(|numerator| numerator.checked_div(denominator))
        .ok_or_else(|| ApyError::overflow("amortized_payment_size"))?;

    tracing::debug!(
        %principal,
        rate = %rate.as_decimal(),
        payments_per_term = terms.payments_per_term,
        year_count = terms.year_count,
        %payment,
        "amortized payment"
    );
    Ok(payment)
}

/// full schedule of fixed payments, each split into interest and principal
pub fn calculate_schedule(
    principal: Money,
    rate: Rate,
    terms: &AmortizedLoanTerms,
) -> Result<Vec<ScheduledPayment>> {
    let payment = amortized_payment_size(principal, rate, terms)?;
    let period_rate = rate.per_period(terms.payments_per_term)?.as_decimal();
    let count = terms.payment_count()?;

    let mut payments = Vec::new();
    let mut balance = principal;
    let mut cumulative_interest = Money::ZERO;
    let mut cumulative_principal = Money::ZERO;

    for i in 1..=count {
        let interest_portion = balance * period_rate;
        // last payment absorbs rounding residue
        let (payment_amount, principal_portion) = if i == count {
            (balance + interest_portion, balance)
        } else {
            (payment, payment - interest_portion)
        };

        cumulative_interest += interest_portion;
        cumulative_principal += principal_portion;
        let ending_balance = balance - principal_portion;

        tracing::trace!(
            payment_number = i,
            payment = %payment_amount,
            interest = %interest_portion,
            balance = %ending_balance,
            "scheduled payment"
        );

        payments.push(ScheduledPayment {
            payment_number: i,
            beginning_balance: balance,
            payment_amount,
            principal_portion,
            interest_portion,
            ending_balance,
            cumulative_interest,
            cumulative_principal,
        });

        balance = ending_balance;
    }

    Ok(payments)
}
