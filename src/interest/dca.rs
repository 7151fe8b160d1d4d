use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::Result;
use crate::interest::compound::compound;
use crate::types::ContributionRecord;

/// one period of a dollar-cost-averaging ledger
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// 1-indexed; period 0 is the implicit zero balance
    pub period: usize,
    pub ytd_balance: Money,
    pub contribution: Money,
    pub interest: Money,
}

/// running record of balances, contributions and interest
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    /// empty ledger with a zero balance
    pub fn seed() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// balance carried into the next period
    pub fn balance(&self) -> Money {
        self.entries.last().map(|e| e.ytd_balance).unwrap_or(Money::ZERO)
    }

    /// add one period: the contribution is deposited, then the whole balance
    /// compounds for a single term at the period's own rate
    pub fn record(mut self, record: ContributionRecord, payout_frequency: u32) -> Result<Ledger> {
        let base = self.balance() + record.amount;
        let ytd_balance = compound(base, record.rate, payout_frequency, Decimal::ONE)?;
        let entry = LedgerEntry {
            period: self.entries.len() + 1,
            ytd_balance,
            contribution: record.amount,
            interest: ytd_balance - base,
        };

        tracing::trace!(
            period = entry.period,
            contribution = %entry.contribution,
            interest = %entry.interest,
            ytd = %entry.ytd_balance,
            "recorded dca period"
        );

        self.entries.push(entry);
        Ok(self)
    }

    /// sum of every contribution plus the interest it earned
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.contribution + e.interest).sum()
    }

    /// ytd balance of the last period
    pub fn final_balance(&self) -> Money {
        self.balance()
    }

    pub fn total_contributed(&self) -> Money {
        self.entries.iter().map(|e| e.contribution).sum()
    }

    pub fn total_interest(&self) -> Money {
        self.entries.iter().map(|e| e.interest).sum()
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// engine for recurring-contribution compounding
#[derive(Debug, Clone, Copy)]
pub struct DcaEngine {
    pub payout_frequency: u32,
}

impl DcaEngine {
    pub fn new(payout_frequency: u32) -> Self {
        Self { payout_frequency }
    }

    pub fn ledger(&self, contributions: &[ContributionRecord]) -> Result<Ledger> {
        dca_ledger(contributions, self.payout_frequency)
    }

    pub fn total(&self, contributions: &[ContributionRecord]) -> Result<Money> {
        dca_compound(contributions, self.payout_frequency)
    }
}

/// fold an ordered contribution schedule into a ledger
pub fn dca_ledger(contributions: &[ContributionRecord], payout_frequency: u32) -> Result<Ledger> {
    let ledger = contributions
        .iter()
        .try_fold(Ledger::seed(), |ledger, record| ledger.record(*record, payout_frequency))?;

    tracing::debug!(
        periods = ledger.len(),
        payout_frequency,
        total = %ledger.total(),
        "compounded dca schedule"
    );
    Ok(ledger)
}

/// total value of an ordered contribution schedule; zero when empty
pub fn dca_compound(contributions: &[ContributionRecord], payout_frequency: u32) -> Result<Money> {
    Ok(dca_ledger(contributions, payout_frequency)?.total())
}
