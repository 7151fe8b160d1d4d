pub mod amortization;

pub use amortization::{
    amortized_payment_size, amortized_total_owed, calculate_schedule, payment_size, rescale_rate,
    total_owed, AmortizationSchedule, ScheduledPayment,
};
