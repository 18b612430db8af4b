//! Engine configuration with environment-variable overrides
//!
//! Recognised variables:
//!   BANK_NAME, DEFAULT_CURRENCY, CACHE_TIMEOUT_MS, MIN_LOAN_AMOUNT
//!
//! Missing variables keep their defaults; unparsable ones are logged and ignored.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use log::warn;

use crate::currency::CurrencyCode;

/// Default cache lifetime (5 minutes)
pub const DEFAULT_CACHE_TIMEOUT_MS: u64 = 300_000;

/// Smallest loan amount a client may request
pub const DEFAULT_MIN_LOAN_AMOUNT: f64 = 1_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Printed on simulation reports
    pub bank_name: String,

    /// Currency used when a request does not name one
    pub default_currency: CurrencyCode,

    /// Lifetime of memoized quotes
    pub cache_ttl: Duration,

    /// Lower bound on requested loan amounts
    pub min_loan_amount: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bank_name: "Banque Atlantique".to_string(),
            default_currency: CurrencyCode::Eur,
            cache_ttl: Duration::from_millis(DEFAULT_CACHE_TIMEOUT_MS),
            min_loan_amount: DEFAULT_MIN_LOAN_AMOUNT,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bank_name = lookup("BANK_NAME")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.bank_name);

        let default_currency =
            parse_or("DEFAULT_CURRENCY", lookup("DEFAULT_CURRENCY"), defaults.default_currency);

        let cache_ttl =
            parse_or("CACHE_TIMEOUT_MS", lookup("CACHE_TIMEOUT_MS"), DEFAULT_CACHE_TIMEOUT_MS);

        let min_loan_amount =
            parse_or("MIN_LOAN_AMOUNT", lookup("MIN_LOAN_AMOUNT"), defaults.min_loan_amount);
        let min_loan_amount = if min_loan_amount.is_finite() && min_loan_amount > 0.0 {
            min_loan_amount
        } else {
            warn!("Ignoring MIN_LOAN_AMOUNT={}: must be positive", min_loan_amount);
            defaults.min_loan_amount
        };

        Self {
            bank_name,
            default_currency,
            cache_ttl: Duration::from_millis(cache_ttl),
            min_loan_amount,
        }
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("Ignoring {}={:?}: could not parse value", key, raw);
                default
            }
        },
    }
}
