//! Amortization Engine - loan, currency and fee calculations for the client portal
//!
//! This library provides:
//! - Fixed monthly payments and month-by-month amortization schedules
//! - Currency formatting and static-rate conversion (EUR, USD, FCFA)
//! - Loan product catalog, quotes and a quote desk with a TTL cache
//! - Transfer fee quotes
//! - Parallel batch runs and rate sheets
//! - Plain-text simulation reports and CSV schedule export
//!
//! All calculations are synchronous and hold no shared state.

pub mod amortization;
pub mod cache;
pub mod config;
pub mod currency;
pub mod error;
pub mod money;
pub mod products;
pub mod report;
pub mod scenario;
pub mod transfers;

// Re-export commonly used types
pub use amortization::{
    compute_monthly_payment, generate_amortization_schedule, AmortizationRow,
    AmortizationSchedule, LoanTerms,
};
pub use config::EngineConfig;
pub use currency::{convert_currency, format_currency, CurrencyCode};
pub use error::{FinanceError, FinanceResult};
pub use products::{LoanDesk, LoanProduct, LoanQuote, LoanRequest};
pub use transfers::{quote_transfer, TransferKind, TransferQuote};
