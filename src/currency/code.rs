//! Closed set of currencies the portal displays and converts

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FinanceError;

/// Supported currency. Carries no behavior beyond selecting a display symbol
/// and a row of the static rate table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    #[default]
    Eur,
    Usd,
    /// West African CFA franc
    Fcfa,
}

impl CurrencyCode {
    pub const ALL: [CurrencyCode; 3] = [CurrencyCode::Eur, CurrencyCode::Usd, CurrencyCode::Fcfa];

    pub fn code(&self) -> &'static str {
        match self {
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Usd => "USD",
            CurrencyCode::Fcfa => "FCFA",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::Eur => "€",
            CurrencyCode::Usd => "$",
            CurrencyCode::Fcfa => "FCFA",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = FinanceError;

    /// Case-insensitive; accepts the ISO code XOF as an alias for FCFA
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EUR" => Ok(CurrencyCode::Eur),
            "USD" => Ok(CurrencyCode::Usd),
            "FCFA" | "XOF" => Ok(CurrencyCode::Fcfa),
            _ => Err(FinanceError::UnsupportedCurrency(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!("EUR".parse::<CurrencyCode>().unwrap(), CurrencyCode::Eur);
        assert_eq!(" usd ".parse::<CurrencyCode>().unwrap(), CurrencyCode::Usd);
        assert_eq!("fcfa".parse::<CurrencyCode>().unwrap(), CurrencyCode::Fcfa);
        assert_eq!("XOF".parse::<CurrencyCode>().unwrap(), CurrencyCode::Fcfa);
    }

    #[test]
    fn test_default_is_euro() {
        assert_eq!(CurrencyCode::default(), CurrencyCode::Eur);
    }

    #[test]
    fn test_unsupported_code() {
        let err = "GBP".parse::<CurrencyCode>().unwrap_err();
        assert_eq!(err, FinanceError::UnsupportedCurrency("GBP".to_string()));
        assert!("".parse::<CurrencyCode>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for code in CurrencyCode::ALL {
            assert_eq!(code.to_string().parse::<CurrencyCode>().unwrap(), code);
        }
    }

    #[test]
    fn test_serde_uses_code_strings() {
        assert_eq!(serde_json::to_string(&CurrencyCode::Fcfa).unwrap(), "\"FCFA\"");
        let code: CurrencyCode = serde_json::from_str("\"USD\"").unwrap();
        assert_eq!(code, CurrencyCode::Usd);
    }
}
