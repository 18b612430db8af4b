//! Loan product catalog and client-facing quotes
//!
//! Each product fixes the nominal annual rate and the largest amount a client
//! may request. Quotes combine a product with an amount and term and run them
//! through the amortization engine.

mod quote;

pub use quote::{LoanDesk, LoanQuote, LoanRequest};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FinanceError;

/// Loan products offered by the bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanProduct {
    Personal,
    Investment,
    BusinessRealEstate,
    PersonalRealEstate,
}

impl LoanProduct {
    pub const ALL: [LoanProduct; 4] = [
        LoanProduct::Personal,
        LoanProduct::Investment,
        LoanProduct::BusinessRealEstate,
        LoanProduct::PersonalRealEstate,
    ];

    /// Identifier used on the command line and in JSON
    pub fn key(&self) -> &'static str {
        match self {
            LoanProduct::Personal => "personal",
            LoanProduct::Investment => "investment",
            LoanProduct::BusinessRealEstate => "business_real_estate",
            LoanProduct::PersonalRealEstate => "personal_real_estate",
        }
    }

    /// Label shown to clients
    pub fn label(&self) -> &'static str {
        match self {
            LoanProduct::Personal => "Crédit Personnel",
            LoanProduct::Investment => "Prêt d'Investissement",
            LoanProduct::BusinessRealEstate => "Crédit Immobilier Business",
            LoanProduct::PersonalRealEstate => "Crédit Immobilier Personnel",
        }
    }

    /// Nominal annual rate, as a percentage
    pub fn annual_rate_percent(&self) -> f64 {
        match self {
            LoanProduct::Personal => 5.5,
            LoanProduct::Investment => 4.8,
            LoanProduct::BusinessRealEstate => 4.2,
            LoanProduct::PersonalRealEstate => 3.9,
        }
    }

    /// Largest amount a client may request
    pub fn max_amount(&self) -> f64 {
        match self {
            LoanProduct::Personal => 50_000.0,
            LoanProduct::Investment => 100_000.0,
            LoanProduct::BusinessRealEstate => 500_000.0,
            LoanProduct::PersonalRealEstate => 300_000.0,
        }
    }
}

impl fmt::Display for LoanProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for LoanProduct {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        LoanProduct::ALL
            .into_iter()
            .find(|product| product.key() == key)
            .ok_or_else(|| FinanceError::invalid(format!("unknown loan product: {}", s.trim())))
    }
}
