//! Loan amortization engine
//!
//! Pure, stateless calculations over [`LoanTerms`]:
//! - Fixed monthly payment (standard annuity formula, explicit zero-rate branch)
//! - Month-by-month schedule (payment, principal, interest, remaining balance)
//!
//! Every call is independent and referentially transparent, so callers may
//! invoke these functions from any number of threads without coordination.
//!
//! # Rounding
//!
//! Amounts are rounded to cents (ties away from zero) only when they are
//! emitted. Each month's balance is derived from the terms at full precision,
//! so the last row closes out at 0.00 even when interest dominates.

mod payment;
mod schedule;
mod terms;

pub use payment::compute_monthly_payment;
pub use schedule::{
    generate_amortization_schedule, AmortizationRow, AmortizationSchedule, ScheduleSummary,
};
pub use terms::LoanTerms;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::round_cents;
    use proptest::prelude::*;

    fn principal() -> impl Strategy<Value = f64> {
        (100u32..=5_000_000u32).prop_map(|units| units as f64)
    }

    fn annual_rate() -> impl Strategy<Value = f64> {
        (1u32..=3000u32).prop_map(|bp| bp as f64 / 100.0)
    }

    /// Up to 500% a year, where interest swallows nearly all of the payment
    fn high_annual_rate() -> impl Strategy<Value = f64> {
        (1u32..=50_000u32).prop_map(|bp| bp as f64 / 100.0)
    }

    fn term() -> impl Strategy<Value = u32> {
        1u32..=480
    }

    proptest! {
        /// Zero-rate loans split the principal evenly.
        #[test]
        fn zero_rate_payment_is_even_split(p in principal(), n in term()) {
            let payment = compute_monthly_payment(p, 0.0, n).unwrap();
            prop_assert_eq!(payment, round_cents(p / n as f64));
        }

        /// One row per month, numbered 1..=N without gaps.
        #[test]
        fn schedule_rows_are_consecutive(p in principal(), r in annual_rate(), n in term()) {
            let schedule = generate_amortization_schedule(p, r, n).unwrap();
            prop_assert_eq!(schedule.len(), n as usize);
            for (i, row) in schedule.iter().enumerate() {
                prop_assert_eq!(row.month, i as u32 + 1);
            }
        }

        /// Principal portions add back up to the loan amount, up to half a
        /// cent of rounding per row.
        #[test]
        fn principal_portions_sum_to_principal(
            p in principal(),
            r in high_annual_rate(),
            n in term(),
        ) {
            let schedule = generate_amortization_schedule(p, r, n).unwrap();
            let repaid: f64 = schedule.iter().map(|row| row.principal).sum();
            let tolerance = 0.005 * n as f64 + 0.01;
            prop_assert!((repaid - p).abs() <= tolerance, "repaid {} of {}", repaid, p);
        }

        /// The loan is fully paid off after the last payment.
        #[test]
        fn final_balance_is_zero(p in principal(), r in high_annual_rate(), n in term()) {
            let schedule = generate_amortization_schedule(p, r, n).unwrap();
            let last = schedule.rows.last().unwrap();
            prop_assert!(last.remaining_balance.abs() <= 0.01);
        }

        /// No hidden state: identical inputs give identical outputs.
        #[test]
        fn payment_is_deterministic(p in principal(), r in annual_rate(), n in term()) {
            let first = compute_monthly_payment(p, r, n).unwrap();
            let second = compute_monthly_payment(p, r, n).unwrap();
            prop_assert_eq!(first, second);
        }

        /// A higher rate never lowers the payment.
        #[test]
        fn payment_is_monotone_in_rate(
            p in principal(),
            r in 0u32..=3000u32,
            bump in 1u32..=500u32,
            n in term(),
        ) {
            let low = compute_monthly_payment(p, r as f64 / 100.0, n).unwrap();
            let high = compute_monthly_payment(p, (r + bump) as f64 / 100.0, n).unwrap();
            prop_assert!(high >= low, "{} < {}", high, low);
        }
    }
}
