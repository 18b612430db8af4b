//! Fixed monthly payment of an amortizing loan

use crate::error::FinanceResult;
use crate::money::round_cents;
use super::terms::LoanTerms;

/// Fixed monthly payment for a loan, rounded to cents.
///
/// With r = R / 100 / 12:
/// - r == 0: payment = P / N
/// - otherwise: payment = P * r * (1+r)^N / ((1+r)^N - 1)
///
/// Fails with `InvalidInput` when principal <= 0, rate < 0 or term < 1.
pub fn compute_monthly_payment(
    principal: f64,
    annual_rate_percent: f64,
    term_months: u32,
) -> FinanceResult<f64> {
    let terms = LoanTerms::new(principal, annual_rate_percent, term_months)?;
    Ok(round_cents(exact_monthly_payment(&terms)))
}

/// Unrounded payment, used internally so the schedule carries full precision.
///
/// Evaluated as `P * r / (1 - (1+r)^-N)`, which is algebraically the textbook
/// formula but stays finite for very long terms or very high rates.
pub(crate) fn exact_monthly_payment(terms: &LoanTerms) -> f64 {
    let n = terms.term_months as f64;
    let r = terms.monthly_rate();

    if r == 0.0 {
        return terms.principal / n;
    }

    terms.principal * r / annuity_factor(r, terms.term_months)
}

/// Unrounded balance still owed after `months_paid` payments.
///
/// Computed directly from the terms as `P * a(N-k) / a(N)` rather than by
/// subtracting payments month after month: once `(1+r)^-N` falls below f64
/// precision the payment equals `P * r` exactly, and the running subtraction
/// would never reduce the balance. The result is exactly `P` at `k = 0` and
/// exactly `0` at `k = N`.
pub(crate) fn balance_after(terms: &LoanTerms, months_paid: u32) -> f64 {
    let n = terms.term_months;
    let remaining = n.saturating_sub(months_paid);
    if remaining == 0 {
        return 0.0;
    }

    let r = terms.monthly_rate();
    if r == 0.0 {
        return terms.principal * remaining as f64 / n as f64;
    }

    terms.principal * (annuity_factor(r, remaining) / annuity_factor(r, n))
}

/// `1 - (1+r)^-n` through `ln_1p`/`exp_m1`, precise for tiny `r`
fn annuity_factor(r: f64, n: u32) -> f64 {
    -(-(n as f64) * r.ln_1p()).exp_m1()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinanceError;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_loan_payment() {
        // 10,000 at 5.5% over 24 months
        let payment = compute_monthly_payment(10_000.0, 5.5, 24).unwrap();
        assert_eq!(payment, 440.96);
    }

    #[test]
    fn test_matches_textbook_formula() {
        let (p, annual, n) = (50_000.0_f64, 3.9_f64, 240_u32);
        let r = annual / 100.0 / 12.0;
        let growth = (1.0 + r).powi(n as i32);
        let textbook = p * (r * growth) / (growth - 1.0);

        let terms = LoanTerms::new(p, annual, n).unwrap();
        assert_relative_eq!(exact_monthly_payment(&terms), textbook, max_relative = 1e-12);
        assert_eq!(compute_monthly_payment(p, annual, n).unwrap(), 300.36);
    }

    #[test]
    fn test_zero_rate_payment() {
        assert_eq!(compute_monthly_payment(12_000.0, 0.0, 12).unwrap(), 1000.0);
        // 1000 / 3 = 333.333...
        assert_eq!(compute_monthly_payment(1000.0, 0.0, 3).unwrap(), 333.33);
    }

    #[test]
    fn test_single_month_term() {
        // One payment: principal plus one month of interest
        let payment = compute_monthly_payment(1200.0, 12.0, 1).unwrap();
        assert_eq!(payment, 1212.0);
    }

    #[test]
    fn test_extreme_inputs_stay_finite() {
        let payment = compute_monthly_payment(100_000.0, 10_000.0, 1200).unwrap();
        assert!(payment.is_finite());
        // Interest dominates: payment converges to P * r
        assert_relative_eq!(payment, 100_000.0 * 100.0 / 12.0, max_relative = 1e-9);

        let payment = compute_monthly_payment(100_000.0, 1e-9, 360).unwrap();
        assert_eq!(payment, round_cents(100_000.0 / 360.0));
    }

    #[test]
    fn test_balance_after_endpoints() {
        for (rate, months) in [(0.0, 12), (5.5, 24), (200.0, 360), (10_000.0, 1200)] {
            let terms = LoanTerms::new(100_000.0, rate, months).unwrap();
            assert_eq!(balance_after(&terms, 0), 100_000.0);
            assert_eq!(balance_after(&terms, months), 0.0);
            assert!(balance_after(&terms, months - 1) > 0.0);
        }

        let terms = LoanTerms::new(12_000.0, 0.0, 12).unwrap();
        assert_eq!(balance_after(&terms, 3), 9000.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            compute_monthly_payment(0.0, 5.5, 24),
            Err(FinanceError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_monthly_payment(10_000.0, -1.0, 24),
            Err(FinanceError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_monthly_payment(10_000.0, 5.5, 0),
            Err(FinanceError::InvalidInput(_))
        ));
    }
}
