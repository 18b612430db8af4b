//! Currency display and static conversion
//!
//! The currency set is closed: anything outside [`CurrencyCode`] is rejected
//! with `UnsupportedCurrency` when parsed, instead of flowing through as a
//! free-form string.

mod code;
mod convert;
mod format;

pub use code::CurrencyCode;
pub use convert::{convert_currency, ExchangeRates};
pub use format::{format_currency, NumberFormat, SymbolPosition, NARROW_NBSP, NBSP};
