//! Currency display strings

use crate::error::{FinanceError, FinanceResult};
use crate::money::round_cents;
use super::code::CurrencyCode;

/// Narrow no-break space, the French thousands separator
pub const NARROW_NBSP: char = '\u{202F}';

/// No-break space between the amount and a trailing symbol
pub const NBSP: char = '\u{00A0}';

/// Where the currency symbol goes relative to the digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `€1,234.50`
    Before,
    /// `1 234,50 €`
    After,
}

/// Separators and symbol placement for rendering amounts
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub symbol_position: SymbolPosition,
    /// Inserted between digits and symbol; `None` glues them together
    pub symbol_spacing: Option<char>,
}

impl NumberFormat {
    /// French layout used throughout the portal: `1 234,50 €`
    pub fn french() -> Self {
        Self {
            decimal_separator: ',',
            grouping_separator: NARROW_NBSP,
            symbol_position: SymbolPosition::After,
            symbol_spacing: Some(NBSP),
        }
    }

    /// English layout: `€1,234.50`
    pub fn english() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
            symbol_position: SymbolPosition::Before,
            symbol_spacing: None,
        }
    }

    /// Render `amount` with exactly two fraction digits
    pub fn format(&self, amount: f64, currency: CurrencyCode) -> FinanceResult<String> {
        if !amount.is_finite() {
            return Err(FinanceError::invalid(format!(
                "cannot format non-finite amount {}",
                amount
            )));
        }

        let rounded = round_cents(amount);
        let digits = format!("{:.2}", rounded.abs());
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let mut number = group_digits(whole, self.grouping_separator);
        number.push(self.decimal_separator);
        number.push_str(fraction);

        let sign = if rounded < 0.0 { "-" } else { "" };
        let spacing = self.symbol_spacing.map(String::from).unwrap_or_default();
        let symbol = currency.symbol();

        Ok(match self.symbol_position {
            SymbolPosition::After => format!("{sign}{number}{spacing}{symbol}"),
            SymbolPosition::Before => format!("{sign}{symbol}{spacing}{number}"),
        })
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::french()
    }
}

/// Insert `separator` between every group of three digits, from the right
fn group_digits(whole: &str, separator: char) -> String {
    let len = whole.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len_utf8());
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

/// Format an amount in the portal's default (French) layout.
///
/// `format_currency(1234.5, CurrencyCode::Eur)` gives `"1 234,50 €"` with a
/// narrow no-break space as group separator.
pub fn format_currency(amount: f64, currency: CurrencyCode) -> FinanceResult<String> {
    NumberFormat::french().format(amount, currency)
}
