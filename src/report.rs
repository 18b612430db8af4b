//! Loan simulation report and schedule export

use std::fmt::Write as _;
use std::io;

use chrono::NaiveDate;

use crate::amortization::{AmortizationSchedule, LoanTerms};
use crate::currency::{format_currency, CurrencyCode};
use crate::error::FinanceResult;
use crate::money::round_cents;

const RULE_WIDTH: usize = 75;

/// Everything a client simulation prints
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub bank_name: String,
    pub currency: CurrencyCode,
    pub generated_on: NaiveDate,
    pub schedule: AmortizationSchedule,
}

impl SimulationReport {
    pub fn new(
        bank_name: impl Into<String>,
        terms: LoanTerms,
        currency: CurrencyCode,
        generated_on: NaiveDate,
    ) -> FinanceResult<Self> {
        Ok(Self {
            bank_name: bank_name.into(),
            currency,
            generated_on,
            schedule: AmortizationSchedule::generate(terms)?,
        })
    }

    pub fn terms(&self) -> &LoanTerms {
        &self.schedule.terms
    }

    /// Suggested download name, e.g. `loan_simulation_10000_EUR_24m_2026-10-19.txt`
    pub fn file_name(&self) -> String {
        format!(
            "loan_simulation_{}_{}_{}m_{}.txt",
            self.terms().principal,
            self.currency,
            self.terms().term_months,
            self.generated_on.format("%Y-%m-%d")
        )
    }

    /// Render the plain-text report
    pub fn render(&self) -> FinanceResult<String> {
        let terms = self.terms();
        let money = |amount: f64| format_currency(amount, self.currency);

        let summary = self.schedule.summary();
        let monthly_payment = self.schedule.monthly_payment();
        let total_paid = summary.total_paid;
        let cost_of_credit = round_cents(total_paid - terms.principal);
        let interest_share = (cost_of_credit / terms.principal * 100.0).round();

        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);
        let mut out = String::new();

        // Writing to a String cannot fail
        let _ = writeln!(out, "{heavy}");
        let _ = writeln!(out, "{:^width$}", "LOAN SIMULATION REPORT", width = RULE_WIDTH);
        let _ = writeln!(out, "{:^width$}", self.bank_name.to_uppercase(), width = RULE_WIDTH);
        let _ = writeln!(out, "{heavy}");
        let _ = writeln!(out);
        let _ = writeln!(out, "Generated on : {}", self.generated_on.format("%A %-d %B %Y"));
        let _ = writeln!(out);

        let _ = writeln!(out, "LOAN PARAMETERS");
        let _ = writeln!(out, "{light}");
        let _ = writeln!(out, "Loan amount           : {}", money(terms.principal)?);
        let _ = writeln!(out, "Annual interest rate  : {}%", terms.annual_rate_percent);
        let _ = writeln!(
            out,
            "Term                  : {} months ({} years)",
            terms.term_months,
            terms.term_years()
        );
        let _ = writeln!(out, "Currency              : {}", self.currency);
        let _ = writeln!(out);

        let _ = writeln!(out, "RESULTS");
        let _ = writeln!(out, "{light}");
        let _ = writeln!(out, "Monthly payment       : {}", money(monthly_payment)?);
        let _ = writeln!(out, "Total repayment       : {}", money(total_paid)?);
        let _ = writeln!(out, "Total cost of credit  : {}", money(cost_of_credit)?);
        let _ = writeln!(out);

        let _ = writeln!(out, "AMORTIZATION SCHEDULE");
        let _ = writeln!(out, "{light}");
        let _ = writeln!(
            out,
            "{:>5} | {:>15} | {:>15} | {:>15} | {:>15}",
            "Month", "Payment", "Principal", "Interest", "Balance"
        );
        for row in &self.schedule {
            let _ = writeln!(
                out,
                "{:>5} | {:>15} | {:>15} | {:>15} | {:>15}",
                row.month,
                money(row.payment)?,
                money(row.principal)?,
                money(row.interest)?,
                money(row.remaining_balance)?,
            );
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "FINANCIAL SUMMARY");
        let _ = writeln!(out, "{light}");
        let _ = writeln!(out, "Principal borrowed    : {}", money(terms.principal)?);
        let _ = writeln!(out, "Total interest        : {}", money(cost_of_credit)?);
        let _ = writeln!(out, "Interest share        : {}%", interest_share);
        let _ = writeln!(out);

        let _ = writeln!(out, "IMPORTANT");
        let _ = writeln!(out, "{light}");
        let _ = writeln!(out, "- This simulation is indicative only");
        let _ = writeln!(
            out,
            "- Actual terms depend on your profile and on approval of the application"
        );
        let _ = writeln!(out, "- Contact your advisor for a personalised study");
        let _ = writeln!(out, "{heavy}");

        Ok(out)
    }
}

/// Write a schedule as CSV with a header row
pub fn write_schedule_csv<W: io::Write>(
    schedule: &AmortizationSchedule,
    writer: W,
) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in schedule {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
