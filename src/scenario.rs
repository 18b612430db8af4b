//! Batch runs over many loan scenarios
//!
//! Schedules are independent of each other, so batches fan out across the
//! rayon thread pool. Output order always matches input order.

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::amortization::{compute_monthly_payment, AmortizationSchedule, LoanTerms};
use crate::error::{FinanceError, FinanceResult};

/// Generate a schedule for every set of terms in parallel.
///
/// Each entry succeeds or fails on its own; one invalid loan does not stop
/// the others.
pub fn run_batch(loans: &[LoanTerms]) -> Vec<FinanceResult<AmortizationSchedule>> {
    debug!("Running {} schedules", loans.len());
    loans
        .par_iter()
        .map(|terms| AmortizationSchedule::generate(*terms))
        .collect()
}

/// Monthly payments for one principal across a grid of rates and terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSheet {
    pub principal: f64,
    /// Row headers, annual rate in percent
    pub rates: Vec<f64>,
    /// Column headers, term in months
    pub terms: Vec<u32>,
    /// `payments[i][j]` is the payment at `rates[i]` over `terms[j]`
    pub payments: Vec<Vec<f64>>,
}

impl RateSheet {
    pub fn payment(&self, rate_index: usize, term_index: usize) -> Option<f64> {
        self.payments.get(rate_index)?.get(term_index).copied()
    }
}

/// Build a payment grid. Any invalid rate or term fails the whole sheet.
pub fn rate_sheet(principal: f64, rates: &[f64], terms: &[u32]) -> FinanceResult<RateSheet> {
    if rates.is_empty() || terms.is_empty() {
        return Err(FinanceError::invalid("rate sheet needs at least one rate and one term"));
    }

    let payments = rates
        .par_iter()
        .map(|&rate| {
            terms
                .iter()
                .map(|&months| compute_monthly_payment(principal, rate, months))
                .collect::<FinanceResult<Vec<f64>>>()
        })
        .collect::<FinanceResult<Vec<Vec<f64>>>>()?;

    Ok(RateSheet {
        principal,
        rates: rates.to_vec(),
        terms: terms.to_vec(),
        payments,
    })
}
