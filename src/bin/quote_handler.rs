//! AWS Lambda handler for loan quotes
//!
//! Accepts loan terms as JSON and returns the monthly payment, totals and,
//! on request, the full amortization schedule and a converted payment.
//!
//! Example event:
//! {"principal": 10000, "annual_rate_percent": 5.5, "term_months": 24,
//!  "currency": "EUR", "convert_to": "FCFA", "include_schedule": true}

use amortization_engine::{
    amortization::{AmortizationRow, AmortizationSchedule},
    currency::{convert_currency, format_currency, CurrencyCode},
    money::round_cents,
    EngineConfig, FinanceResult, LoanTerms,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};

/// Input for a quote
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub principal: f64,

    /// Annual rate in percent (5.5 means 5.5%)
    pub annual_rate_percent: f64,

    pub term_months: u32,

    /// Display currency (default: DEFAULT_CURRENCY or EUR)
    #[serde(default)]
    pub currency: Option<String>,

    /// Also express the monthly payment in this currency
    #[serde(default)]
    pub convert_to: Option<String>,

    /// Include every month of the schedule in the response
    #[serde(default)]
    pub include_schedule: bool,
}

/// Output for a quote
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub currency: CurrencyCode,
    pub monthly_payment: f64,
    pub formatted_payment: String,
    pub total_payment: f64,
    pub total_interest: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted_payment: Option<ConvertedPayment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<AmortizationRow>>,
}

#[derive(Debug, Serialize)]
pub struct ConvertedPayment {
    pub currency: CurrencyCode,
    pub amount: f64,
    pub formatted: String,
}

fn build_response(
    request: QuoteRequest,
    default_currency: CurrencyCode,
) -> FinanceResult<QuoteResponse> {
    let currency = match request.currency.as_deref() {
        Some(code) => code.parse()?,
        None => default_currency,
    };

    let terms = LoanTerms::new(
        request.principal,
        request.annual_rate_percent,
        request.term_months,
    )?;
    let schedule = AmortizationSchedule::generate(terms)?;
    let monthly_payment = schedule.monthly_payment();
    let total_payment = round_cents(monthly_payment * terms.term_months as f64);

    let converted_payment = match request.convert_to.as_deref() {
        Some(code) => {
            let target: CurrencyCode = code.parse()?;
            let amount = convert_currency(monthly_payment, currency, target)?;
            Some(ConvertedPayment {
                currency: target,
                amount,
                formatted: format_currency(amount, target)?,
            })
        }
        None => None,
    };

    Ok(QuoteResponse {
        currency,
        monthly_payment,
        formatted_payment: format_currency(monthly_payment, currency)?,
        total_payment,
        total_interest: round_cents(total_payment - terms.principal),
        converted_payment,
        schedule: request.include_schedule.then_some(schedule.rows),
    })
}

/// Lambda handler function
async fn handler(event: LambdaEvent<QuoteRequest>) -> Result<QuoteResponse, Error> {
    let config = EngineConfig::from_env();
    let response = build_response(event.payload, config.default_currency)?;
    log::info!("Quoted {} per month", response.formatted_payment);
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
