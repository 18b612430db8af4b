//! Transfer fee schedule
//!
//! Internal transfers between accounts of the bank cost 1% of the amount;
//! external (IBAN/SWIFT) and crypto-wallet transfers cost 3%.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;
use crate::error::{FinanceError, FinanceResult};
use crate::money::round_cents;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferKind {
    /// Between two accounts held at the bank
    Internal,
    /// To an IBAN/SWIFT account elsewhere
    External,
    /// To a crypto wallet address
    Crypto,
}

impl TransferKind {
    /// Fee as a fraction of the transferred amount
    pub fn fee_rate(&self) -> f64 {
        match self {
            TransferKind::Internal => 0.01,
            TransferKind::External | TransferKind::Crypto => 0.03,
        }
    }
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransferKind::Internal => "internal",
            TransferKind::External => "external",
            TransferKind::Crypto => "crypto",
        })
    }
}

impl FromStr for TransferKind {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "internal" => Ok(TransferKind::Internal),
            "external" => Ok(TransferKind::External),
            "crypto" => Ok(TransferKind::Crypto),
            other => Err(FinanceError::invalid(format!("unknown transfer kind: {}", other))),
        }
    }
}

/// Fee breakdown for a pending transfer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransferQuote {
    pub kind: TransferKind,
    pub currency: CurrencyCode,
    pub amount: f64,
    pub fee: f64,
    /// Amount debited from the source account
    pub total: f64,
}

impl TransferQuote {
    /// Fail with `InsufficientFunds` unless `balance` covers amount plus fee
    pub fn ensure_covered(&self, balance: f64) -> FinanceResult<()> {
        if balance < self.total {
            return Err(FinanceError::InsufficientFunds {
                required: self.total,
                available: balance,
            });
        }
        Ok(())
    }
}

pub fn quote_transfer(
    amount: f64,
    kind: TransferKind,
    currency: CurrencyCode,
) -> FinanceResult<TransferQuote> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(FinanceError::invalid(format!(
            "transfer amount must be positive, got {}",
            amount
        )));
    }

    let fee = round_cents(amount * kind.fee_rate());
    Ok(TransferQuote {
        kind,
        currency,
        amount,
        fee,
        total: round_cents(amount + fee),
    })
}
