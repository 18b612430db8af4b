//! Loan terms: the validated input to every amortization calculation

use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};

/// Principal, nominal annual rate and term of an amortizing loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Original loan amount (currency-agnostic magnitude)
    pub principal: f64,

    /// Nominal annual rate as a percentage (5.5 means 5.5%)
    pub annual_rate_percent: f64,

    /// Number of monthly payments
    pub term_months: u32,
}

impl LoanTerms {
    /// Build terms, rejecting anything outside the amortization domain
    pub fn new(principal: f64, annual_rate_percent: f64, term_months: u32) -> FinanceResult<Self> {
        let terms = Self {
            principal,
            annual_rate_percent,
            term_months,
        };
        terms.validate()?;
        Ok(terms)
    }

    /// Check principal > 0, rate >= 0 and term >= 1.
    ///
    /// Deserialized terms bypass `new`, so callers holding such values should
    /// validate before use. The calculators always do.
    pub fn validate(&self) -> FinanceResult<()> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(FinanceError::invalid(format!(
                "principal must be a positive amount, got {}",
                self.principal
            )));
        }
        if !self.annual_rate_percent.is_finite() || self.annual_rate_percent < 0.0 {
            return Err(FinanceError::invalid(format!(
                "annual rate must be a non-negative percentage, got {}",
                self.annual_rate_percent
            )));
        }
        if self.term_months < 1 {
            return Err(FinanceError::invalid("term must be at least one month"));
        }
        Ok(())
    }

    /// Monthly compounding rate as a decimal (5.5% annual -> 0.004583...)
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / 12.0
    }

    /// Term in years, rounded to one decimal for display
    pub fn term_years(&self) -> f64 {
        (self.term_months as f64 / 12.0 * 10.0).round() / 10.0
    }
}
