pub mod compound;
pub mod dca;
pub mod term;

pub use compound::{compound, effective_rate, growth_factor, CompoundingEngine};
pub use dca::{dca_compound, dca_ledger, DcaEngine, Ledger, LedgerEntry};
pub use term::{term_size, term_size_from_days, TermCalculator};
