/// quick start - compound growth, dca and a fixed-payment loan
use apy_rs::chrono::NaiveDate;
use apy_rs::{
    weighted_harmonic_mean, AmortizedLoanTerms, Apy, CompoundingFrequency, Decimal, Loan, LoanTerms,
    Money, PriceLot, Rate, TermSpec,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== quick start ===\n");

    let apy = Apy::new(Rate::from_percentage(10))?;
    let monthly = CompoundingFrequency::Monthly.periods_per_term();

    println!("1200 compounded monthly for a year: {}", apy.total(Money::from_major(1200), monthly)?.round_dp(2));
    println!("100 deposited every month for a year: {}", apy.dca(Money::from_major(100), monthly)?.round_dp(2));

    let lots = [
        PriceLot::new(dec!(1000), dec!(156.23)),
        PriceLot::new(dec!(1000), dec!(173.15)),
        PriceLot::new(dec!(1000), dec!(204.61)),
    ];
    println!("average cost basis: {}", weighted_harmonic_mean(&lots)?.round_dp(2));

    let mortgage = Loan::new(Money::from_major(100_000), Rate::from_percentage(10))?;
    let terms = AmortizedLoanTerms::for_years(20);
    println!("\nmonthly payment: {}", mortgage.amortized_payment_size(&terms)?.round_dp(2));
    println!("total repaid: {}", mortgage.amortized_total_owed(&terms)?.round_dp(2));

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("invalid start date")?;
    let end = NaiveDate::from_ymd_opt(2025, 2, 4).ok_or("invalid end date")?;
    let span = TermSpec::new(start, end);
    let bridge = Loan::new(Money::from_major(1200), Rate::from_percentage(10))?;
    let owed = bridge.total_owed(&LoanTerms::for_days(span.days()))?;
    println!("\n{} days ({} term): owed {}", span.days(), span.terms()?, owed.round_dp(2));
    println!("interest share: {}", (owed.as_decimal() / Decimal::from(1200)).round_dp(4));

    let ledger = apy.dca_ledger(Money::from_major(300), CompoundingFrequency::Quarterly.periods_per_term())?;
    println!("\nquarterly dca ledger:");
    println!("{}", ledger.to_json_pretty()?);

    Ok(())
}
