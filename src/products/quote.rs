//! Loan quotes for a product, amount and term

use log::debug;
use serde::{Deserialize, Serialize};

use crate::amortization::{compute_monthly_payment, AmortizationSchedule, LoanTerms};
use crate::cache::TtlCache;
use crate::config::EngineConfig;
use crate::currency::CurrencyCode;
use crate::error::{FinanceError, FinanceResult};
use crate::money::round_cents;
use super::LoanProduct;

/// What a client asks for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub product: LoanProduct,
    pub amount: f64,
    pub term_months: u32,
    pub currency: CurrencyCode,

    /// Net monthly income, used for the debt ratio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_income: Option<f64>,
}

impl LoanRequest {
    fn cache_key(&self) -> String {
        format!(
            "quote:{}:{}:{}:{}:{:?}",
            self.product, self.amount, self.term_months, self.currency, self.monthly_income
        )
    }
}

/// Payment, totals and affordability figures for a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanQuote {
    pub product: LoanProduct,
    pub currency: CurrencyCode,
    pub terms: LoanTerms,
    pub monthly_payment: f64,

    /// Monthly payment times the number of months
    pub total_payment: f64,

    /// Total cost of credit
    pub total_interest: f64,

    /// Interest as a whole percentage of the amount borrowed
    pub interest_share_percent: f64,

    /// Payment as a whole percentage of monthly income
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debt_ratio_percent: Option<f64>,
}

impl LoanQuote {
    /// Quote a request against the product catalog.
    ///
    /// The amount must lie between `min_amount` and the product's maximum,
    /// and a stated income must be positive.
    pub fn for_request(request: &LoanRequest, min_amount: f64) -> FinanceResult<Self> {
        let product = request.product;
        if !request.amount.is_finite()
            || request.amount < min_amount
            || request.amount > product.max_amount()
        {
            return Err(FinanceError::invalid(format!(
                "{} amounts must be between {:.2} and {:.2}, got {}",
                product.label(),
                min_amount,
                product.max_amount(),
                request.amount
            )));
        }

        let terms = LoanTerms::new(
            request.amount,
            product.annual_rate_percent(),
            request.term_months,
        )?;
        let monthly_payment =
            compute_monthly_payment(terms.principal, terms.annual_rate_percent, terms.term_months)?;

        let total_payment = round_cents(monthly_payment * terms.term_months as f64);
        let total_interest = round_cents(total_payment - terms.principal);
        let interest_share_percent = (total_interest / terms.principal * 100.0).round();

        let debt_ratio_percent = match request.monthly_income {
            None => None,
            Some(income) if income.is_finite() && income > 0.0 => {
                Some((monthly_payment / income * 100.0).round())
            }
            Some(income) => {
                return Err(FinanceError::invalid(format!(
                    "monthly income must be positive, got {}",
                    income
                )))
            }
        };

        Ok(Self {
            product,
            currency: request.currency,
            terms,
            monthly_payment,
            total_payment,
            total_interest,
            interest_share_percent,
            debt_ratio_percent,
        })
    }

    /// Full schedule behind this quote
    pub fn schedule(&self) -> FinanceResult<AmortizationSchedule> {
        AmortizationSchedule::generate(self.terms)
    }
}

/// Quote desk with an injected, time-bounded quote cache
#[derive(Debug)]
pub struct LoanDesk {
    config: EngineConfig,
    cache: TtlCache<LoanQuote>,
}

impl LoanDesk {
    pub fn new(config: EngineConfig, cache: TtlCache<LoanQuote>) -> Self {
        Self { config, cache }
    }

    /// Desk with a fresh cache using the configured TTL
    pub fn from_config(config: EngineConfig) -> Self {
        let cache = TtlCache::new(config.cache_ttl);
        Self::new(config, cache)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn cache(&self) -> &TtlCache<LoanQuote> {
        &self.cache
    }

    /// Quote a request, reusing a cached quote while it is still live
    pub fn quote(&mut self, request: &LoanRequest) -> FinanceResult<LoanQuote> {
        let key = request.cache_key();
        if let Some(quote) = self.cache.get(&key) {
            return Ok(quote);
        }

        let quote = LoanQuote::for_request(request, self.config.min_loan_amount)?;
        debug!(
            "Quoted {} {:.2} over {} months: {:.2}/month",
            request.product, request.amount, request.term_months, quote.monthly_payment
        );
        self.cache.insert(key, quote.clone());
        Ok(quote)
    }

    /// Quote every product for the same amount and term, skipping products
    /// whose limits the amount falls outside of.
    ///
    /// Invalid terms fail the whole comparison with `InvalidInput` instead of
    /// yielding an empty list.
    pub fn compare_products(
        &mut self,
        amount: f64,
        term_months: u32,
        currency: CurrencyCode,
    ) -> FinanceResult<Vec<LoanQuote>> {
        LoanTerms::new(amount, 0.0, term_months)?;

        let min_amount = self.config.min_loan_amount;
        LoanProduct::ALL
            .into_iter()
            .filter(|product| amount >= min_amount && amount <= product.max_amount())
            .map(|product| {
                self.quote(&LoanRequest {
                    product,
                    amount,
                    term_months,
                    currency,
                    monthly_income: None,
                })
            })
            .collect()
    }

    /// Drop cached quotes for one product, e.g. after a rate change
    pub fn invalidate_product(&mut self, product: LoanProduct) -> usize {
        self.cache.invalidate_matching(&format!("quote:{}:", product))
    }
}
