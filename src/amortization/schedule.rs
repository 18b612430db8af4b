//! Month-by-month amortization schedule

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::FinanceResult;
use crate::money::round_cents;
use super::payment::{balance_after, exact_monthly_payment};
use super::terms::LoanTerms;

/// One month of a schedule. All amounts are rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based month number
    pub month: u32,
    pub payment: f64,
    /// Principal portion of the payment
    pub principal: f64,
    /// Interest portion of the payment
    pub interest: f64,
    /// Outstanding balance after this payment, never negative
    pub remaining_balance: f64,
}

/// Ordered schedule for a loan, one row per month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub terms: LoanTerms,
    pub rows: Vec<AmortizationRow>,
}

impl AmortizationSchedule {
    /// Generate the schedule for the given terms.
    ///
    /// Each month's closing balance is derived from the terms at full
    /// precision; interest accrues on the previous closing balance and the
    /// principal portion is the drop in balance. Only the emitted rows are
    /// rounded, so the final balance is zero at any rate or term.
    pub fn generate(terms: LoanTerms) -> FinanceResult<Self> {
        terms.validate()?;

        let rate = terms.monthly_rate();
        let payment = exact_monthly_payment(&terms);
        let mut opening = terms.principal;
        let mut rows = Vec::with_capacity(terms.term_months as usize);

        for month in 1..=terms.term_months {
            let balance = balance_after(&terms, month).max(0.0);
            let interest = if rate == 0.0 { 0.0 } else { opening * rate };
            let principal = opening - balance;
            opening = balance;

            rows.push(AmortizationRow {
                month,
                payment: round_cents(payment),
                principal: round_cents(principal),
                interest: round_cents(interest),
                remaining_balance: round_cents(balance),
            });
        }

        debug!(
            "Generated {}-month schedule for principal {:.2} at {}%",
            terms.term_months, terms.principal, terms.annual_rate_percent
        );

        Ok(Self { terms, rows })
    }

    /// Fixed monthly payment shown on every row
    pub fn monthly_payment(&self) -> f64 {
        self.rows.first().map(|r| r.payment).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AmortizationRow> {
        self.rows.iter()
    }

    /// Totals across all rows
    pub fn summary(&self) -> ScheduleSummary {
        let total_paid: f64 = self.rows.iter().map(|r| r.payment).sum();
        let total_principal: f64 = self.rows.iter().map(|r| r.principal).sum();
        let total_interest: f64 = self.rows.iter().map(|r| r.interest).sum();
        let final_balance = self.rows.last().map(|r| r.remaining_balance).unwrap_or(0.0);

        ScheduleSummary {
            total_months: self.rows.len() as u32,
            total_paid: round_cents(total_paid),
            total_principal: round_cents(total_principal),
            total_interest: round_cents(total_interest),
            final_balance,
        }
    }
}

impl<'a> IntoIterator for &'a AmortizationSchedule {
    type Item = &'a AmortizationRow;
    type IntoIter = std::slice::Iter<'a, AmortizationRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Summary statistics for a schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_months: u32,
    pub total_paid: f64,
    pub total_principal: f64,
    pub total_interest: f64,
    pub final_balance: f64,
}

/// Full month-by-month breakdown for a loan.
///
/// Input validation is shared with `compute_monthly_payment`; invalid terms
/// produce the same `InvalidInput` error and no partial schedule.
pub fn generate_amortization_schedule(
    principal: f64,
    annual_rate_percent: f64,
    term_months: u32,
) -> FinanceResult<AmortizationSchedule> {
    let terms = LoanTerms::new(principal, annual_rate_percent, term_months)?;
    AmortizationSchedule::generate(terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::compute_monthly_payment;
    use crate::error::FinanceError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_standard_schedule() {
        let schedule = generate_amortization_schedule(10_000.0, 5.5, 24).unwrap();
        assert_eq!(schedule.len(), 24);
        assert_eq!(schedule.monthly_payment(), 440.96);

        // Month 1: interest = 10,000 * 0.055 / 12 = 45.83
        let first = schedule.rows[0];
        assert_eq!(first.month, 1);
        assert_eq!(first.interest, 45.83);
        assert_eq!(first.principal, 395.12);
        assert_eq!(first.remaining_balance, 9604.88);

        let last = schedule.rows[23];
        assert_eq!(last.month, 24);
        assert_eq!(last.remaining_balance, 0.0);
    }

    #[test]
    fn test_zero_rate_schedule() {
        let schedule = generate_amortization_schedule(12_000.0, 0.0, 12).unwrap();
        assert_eq!(schedule.len(), 12);

        for (i, row) in schedule.iter().enumerate() {
            assert_eq!(row.payment, 1000.0);
            assert_eq!(row.interest, 0.0);
            assert_eq!(row.principal, 1000.0);
            assert_eq!(row.remaining_balance, 12_000.0 - 1000.0 * (i as f64 + 1.0));
        }
    }

    #[test]
    fn test_long_term_schedule_closes_out() {
        // 30-year mortgage: rounding the payment would leave ~2.00 of drift
        let schedule = generate_amortization_schedule(100_000.0, 4.2, 360).unwrap();
        let summary = schedule.summary();

        assert_eq!(summary.total_months, 360);
        assert_eq!(summary.final_balance, 0.0);
        assert_abs_diff_eq!(summary.total_principal, 100_000.0, epsilon = 0.5);
        assert!(summary.total_interest > 0.0);
    }

    #[test]
    fn test_high_rate_schedules_pay_down() {
        for (principal, rate, months) in [
            (100_000.0, 200.0, 360),
            (100_000.0, 100.0, 360),
            (100_000.0, 10_000.0, 1200),
            (50_000.0, 150.0, 480),
        ] {
            let schedule = generate_amortization_schedule(principal, rate, months).unwrap();
            let summary = schedule.summary();

            assert_eq!(summary.final_balance, 0.0, "{}% over {} months", rate, months);
            assert_abs_diff_eq!(
                summary.total_principal,
                principal,
                epsilon = 0.005 * months as f64
            );
            assert!(schedule
                .rows
                .windows(2)
                .all(|w| w[1].remaining_balance <= w[0].remaining_balance));
        }

        // Last payment retires what is left: 100,000 * r / (1+r) at 200%
        let schedule = generate_amortization_schedule(100_000.0, 200.0, 360).unwrap();
        let last = schedule.rows.last().unwrap();
        assert_eq!(last.principal, 14_285.71);
        assert_eq!(last.interest, 2380.95);
    }

    #[test]
    fn test_payment_matches_calculator() {
        let schedule = generate_amortization_schedule(50_000.0, 3.9, 240).unwrap();
        let payment = compute_monthly_payment(50_000.0, 3.9, 240).unwrap();
        assert!(schedule.iter().all(|row| row.payment == payment));
    }

    #[test]
    fn test_balances_never_negative() {
        let schedule = generate_amortization_schedule(1000.0, 12.0, 12).unwrap();
        assert!(schedule.iter().all(|row| row.remaining_balance >= 0.0));
        assert!(schedule
            .rows
            .windows(2)
            .all(|w| w[1].remaining_balance <= w[0].remaining_balance));
    }

    #[test]
    fn test_invalid_terms_produce_no_schedule() {
        assert!(matches!(
            generate_amortization_schedule(-1.0, 5.0, 12),
            Err(FinanceError::InvalidInput(_))
        ));

        // Deserialized terms skip the constructor
        let terms = LoanTerms {
            principal: 1000.0,
            annual_rate_percent: 5.0,
            term_months: 0,
        };
        assert!(AmortizationSchedule::generate(terms).is_err());
    }
}
