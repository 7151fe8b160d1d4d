pub mod apy;
pub mod averaging;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod loan;
pub mod payments;
pub mod types;
pub mod validation;

pub use chrono;
pub use rust_decimal::Decimal;

// re-export key types
pub use apy::Apy;
pub use averaging::weighted_harmonic_mean;
pub use config::{AmortizedLoanTerms, LoanTerms, TermConfig, DEFAULT_DAYS_PER_TERM};
pub use decimal::{Money, Rate};
pub use errors::{ApyError, Result};
pub use interest::{
    compound, dca_compound, dca_ledger, term_size, CompoundingEngine, DcaEngine, Ledger,
    LedgerEntry, TermCalculator,
};
pub use loan::{Loan, LoanBuilder};
pub use payments::{
    amortized_payment_size, amortized_total_owed, payment_size, total_owed, AmortizationSchedule,
    ScheduledPayment,
};
pub use types::{CompoundingFrequency, ContributionRecord, PriceLot, TermSpec};
pub use validation::validate_rate;
