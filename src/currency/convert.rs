//! Static-rate currency conversion, for display only
//!
//! Rates are a fixed illustrative table, not a market feed.

use std::collections::HashMap;

use crate::error::{FinanceError, FinanceResult};
use crate::money::round_cents;
use super::code::CurrencyCode;

/// Fixed rate table expressed as units of each currency per 1 EUR
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRates {
    units_per_eur: HashMap<CurrencyCode, f64>,
}

impl ExchangeRates {
    /// The portal's hardcoded table: EUR 1, USD 1.08, FCFA 655.957
    pub fn fixed() -> Self {
        let units_per_eur = HashMap::from([
            (CurrencyCode::Eur, 1.0),
            (CurrencyCode::Usd, 1.08),
            (CurrencyCode::Fcfa, 655.957),
        ]);
        Self { units_per_eur }
    }

    /// Replace one entry of the table
    pub fn with_rate(mut self, currency: CurrencyCode, units_per_eur: f64) -> FinanceResult<Self> {
        if !units_per_eur.is_finite() || units_per_eur <= 0.0 {
            return Err(FinanceError::invalid(format!(
                "exchange rate for {} must be positive, got {}",
                currency, units_per_eur
            )));
        }
        self.units_per_eur.insert(currency, units_per_eur);
        Ok(self)
    }

    pub fn units_per_eur(&self, currency: CurrencyCode) -> FinanceResult<f64> {
        self.units_per_eur
            .get(&currency)
            .copied()
            .ok_or_else(|| FinanceError::UnsupportedCurrency(currency.to_string()))
    }

    /// Convert through EUR as the reference unit, rounded to cents.
    ///
    /// Same-currency conversion returns `amount` untouched.
    pub fn convert(&self, amount: f64, from: CurrencyCode, to: CurrencyCode) -> FinanceResult<f64> {
        if !amount.is_finite() {
            return Err(FinanceError::invalid(format!(
                "cannot convert non-finite amount {}",
                amount
            )));
        }
        if from == to {
            return Ok(amount);
        }

        let in_eur = amount / self.units_per_eur(from)?;
        let converted = in_eur * self.units_per_eur(to)?;
        if !converted.is_finite() {
            return Err(FinanceError::invalid(format!(
                "{} {} is out of range in {}",
                amount, from, to
            )));
        }
        Ok(round_cents(converted))
    }
}

impl Default for ExchangeRates {
    fn default() -> Self {
        Self::fixed()
    }
}

/// Convert with the fixed rate table
pub fn convert_currency(amount: f64, from: CurrencyCode, to: CurrencyCode) -> FinanceResult<f64> {
    ExchangeRates::fixed().convert(amount, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_conversion() {
        assert_eq!(convert_currency(100.0, CurrencyCode::Eur, CurrencyCode::Eur).unwrap(), 100.0);
        // Not rounded on a no-op
        assert_eq!(
            convert_currency(0.123_456, CurrencyCode::Usd, CurrencyCode::Usd).unwrap(),
            0.123_456
        );
    }

    #[test]
    fn test_fixed_rates() {
        assert_eq!(convert_currency(100.0, CurrencyCode::Eur, CurrencyCode::Usd).unwrap(), 108.0);
        assert_eq!(
            convert_currency(100.0, CurrencyCode::Eur, CurrencyCode::Fcfa).unwrap(),
            65_595.7
        );
        assert_eq!(
            convert_currency(100.0, CurrencyCode::Usd, CurrencyCode::Fcfa).unwrap(),
            60_736.76
        );
        assert_eq!(
            convert_currency(655_957.0, CurrencyCode::Fcfa, CurrencyCode::Eur).unwrap(),
            1000.0
        );
    }

    #[test]
    fn test_negative_amounts_convert() {
        assert_eq!(convert_currency(-50.0, CurrencyCode::Eur, CurrencyCode::Usd).unwrap(), -54.0);
    }

    #[test]
    fn test_custom_rate() {
        let rates = ExchangeRates::fixed().with_rate(CurrencyCode::Usd, 1.25).unwrap();
        assert_eq!(rates.convert(10.0, CurrencyCode::Eur, CurrencyCode::Usd).unwrap(), 12.5);
        assert!(ExchangeRates::fixed().with_rate(CurrencyCode::Usd, 0.0).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            convert_currency(f64::NAN, CurrencyCode::Eur, CurrencyCode::Eur),
            Err(FinanceError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_overflowing_result_rejected() {
        assert!(matches!(
            convert_currency(f64::MAX, CurrencyCode::Eur, CurrencyCode::Fcfa),
            Err(FinanceError::InvalidInput(_))
        ));
        // Shrinking toward EUR stays in range
        let eur = convert_currency(f64::MAX, CurrencyCode::Fcfa, CurrencyCode::Eur).unwrap();
        assert!(eur.is_finite());
    }
}
