//! Amortization Engine CLI
//!
//! Command-line front end for loan payments, schedules, quotes, currency
//! display and transfer fees. Defaults come from the environment
//! (see `EngineConfig::from_env`); set RUST_LOG=debug for engine logging.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use amortization_engine::{
    compute_monthly_payment,
    currency::{convert_currency, format_currency, CurrencyCode},
    generate_amortization_schedule, quote_transfer,
    report::{write_schedule_csv, SimulationReport},
    scenario::rate_sheet,
    EngineConfig, LoanDesk, LoanProduct, LoanRequest, LoanTerms, TransferKind,
};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "amortization_engine", version, about = "Loan amortization and currency toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fixed monthly payment for a loan
    Payment {
        #[command(flatten)]
        loan: LoanArgs,
    },
    /// Month-by-month amortization schedule
    Schedule {
        #[command(flatten)]
        loan: LoanArgs,
        /// Print the schedule as JSON
        #[arg(long)]
        json: bool,
        /// Write the schedule to a CSV file instead of printing a table
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Convert an amount between currencies at the fixed display rates
    Convert {
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
        #[arg(long)]
        from: CurrencyCode,
        #[arg(long)]
        to: CurrencyCode,
    },
    /// Format an amount for display
    Format {
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
        #[arg(long)]
        currency: Option<CurrencyCode>,
    },
    /// Quote a loan product, or compare every product with --compare
    Quote {
        /// personal, investment, business_real_estate, personal_real_estate
        #[arg(long, default_value = "personal")]
        product: LoanProduct,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        months: u32,
        /// Net monthly income, for the debt ratio
        #[arg(long)]
        income: Option<f64>,
        #[arg(long)]
        currency: Option<CurrencyCode>,
        #[arg(long)]
        compare: bool,
    },
    /// Fee and total debit for a transfer
    TransferFee {
        #[arg(long)]
        amount: f64,
        /// internal, external or crypto
        #[arg(long, default_value = "internal")]
        kind: TransferKind,
        #[arg(long)]
        currency: Option<CurrencyCode>,
        /// Source account balance to check the transfer against
        #[arg(long)]
        balance: Option<f64>,
    },
    /// Plain-text loan simulation report
    Report {
        #[command(flatten)]
        loan: LoanArgs,
        /// Output path (defaults to the suggested report file name)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// Payment grid across several rates and terms
    RateSheet {
        #[arg(long)]
        principal: f64,
        /// Comma-separated annual rates in percent
        #[arg(long, value_delimiter = ',', required = true)]
        rates: Vec<f64>,
        /// Comma-separated terms in months
        #[arg(long, value_delimiter = ',', required = true)]
        terms: Vec<u32>,
        #[arg(long)]
        currency: Option<CurrencyCode>,
    },
}

#[derive(Args)]
struct LoanArgs {
    /// Amount borrowed
    #[arg(long)]
    principal: f64,
    /// Annual interest rate in percent (5.5 means 5.5%)
    #[arg(long)]
    rate: f64,
    /// Term in months
    #[arg(long)]
    months: u32,
    #[arg(long)]
    currency: Option<CurrencyCode>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = EngineConfig::from_env();
    let currency_or_default = |c: Option<CurrencyCode>| c.unwrap_or(config.default_currency);

    match cli.command {
        Command::Payment { loan } => {
            let currency = currency_or_default(loan.currency);
            let payment = compute_monthly_payment(loan.principal, loan.rate, loan.months)?;
            println!("Monthly payment: {}", format_currency(payment, currency)?);
            let total = payment * loan.months as f64;
            println!("Total repayment: {}", format_currency(total, currency)?);
        }

        Command::Schedule { loan, json, csv } => {
            let currency = currency_or_default(loan.currency);
            let schedule = generate_amortization_schedule(loan.principal, loan.rate, loan.months)?;

            if let Some(path) = csv {
                let file = File::create(&path)
                    .with_context(|| format!("Unable to create {}", path.display()))?;
                write_schedule_csv(&schedule, file)?;
                println!("Schedule written to: {}", path.display());
            } else if json {
                println!("{}", serde_json::to_string_pretty(&schedule)?);
            } else {
                println!(
                    "{:>5} {:>15} {:>15} {:>15} {:>15}",
                    "Month", "Payment", "Principal", "Interest", "Balance"
                );
                println!("{}", "-".repeat(69));
                for row in &schedule {
                    println!(
                        "{:>5} {:>15} {:>15} {:>15} {:>15}",
                        row.month,
                        format_currency(row.payment, currency)?,
                        format_currency(row.principal, currency)?,
                        format_currency(row.interest, currency)?,
                        format_currency(row.remaining_balance, currency)?,
                    );
                }

                let summary = schedule.summary();
                println!("\nSummary:");
                println!("  Total Paid: {}", format_currency(summary.total_paid, currency)?);
                println!(
                    "  Total Interest: {}",
                    format_currency(summary.total_interest, currency)?
                );
                println!("  Final Balance: {}", format_currency(summary.final_balance, currency)?);
            }
        }

        Command::Convert { amount, from, to } => {
            let converted = convert_currency(amount, from, to)?;
            println!("{} = {}", format_currency(amount, from)?, format_currency(converted, to)?);
        }

        Command::Format { amount, currency } => {
            println!("{}", format_currency(amount, currency_or_default(currency))?);
        }

        Command::Quote { product, amount, months, income, currency, compare } => {
            let currency = currency_or_default(currency);
            let mut desk = LoanDesk::from_config(config.clone());

            let quotes = if compare {
                desk.compare_products(amount, months, currency)?
            } else {
                let request = LoanRequest {
                    product,
                    amount,
                    term_months: months,
                    currency,
                    monthly_income: income,
                };
                vec![desk.quote(&request)?]
            };

            if quotes.is_empty() {
                println!(
                    "No product accepts {} over {} months",
                    format_currency(amount, currency)?,
                    months
                );
            }
            for quote in &quotes {
                println!("{} ({}%)", quote.product.label(), quote.terms.annual_rate_percent);
                println!(
                    "  Monthly payment: {}",
                    format_currency(quote.monthly_payment, currency)?
                );
                println!("  Total repayment: {}", format_currency(quote.total_payment, currency)?);
                println!(
                    "  Cost of credit:  {} ({}%)",
                    format_currency(quote.total_interest, currency)?,
                    quote.interest_share_percent
                );
                if let Some(ratio) = quote.debt_ratio_percent {
                    println!("  Debt ratio:      {}%", ratio);
                }
            }
        }

        Command::TransferFee { amount, kind, currency, balance } => {
            let currency = currency_or_default(currency);
            let quote = quote_transfer(amount, kind, currency)?;
            println!("Transfer ({}): {}", kind, format_currency(quote.amount, currency)?);
            println!(
                "  Fee ({}%): {}",
                kind.fee_rate() * 100.0,
                format_currency(quote.fee, currency)?
            );
            println!("  Total debit: {}", format_currency(quote.total, currency)?);
            if let Some(balance) = balance {
                quote.ensure_covered(balance)?;
                println!("  Balance {} covers the transfer", format_currency(balance, currency)?);
            }
        }

        Command::Report { loan, output, stdout } => {
            let currency = currency_or_default(loan.currency);
            let terms = LoanTerms::new(loan.principal, loan.rate, loan.months)?;
            let today = chrono::Local::now().date_naive();
            let report = SimulationReport::new(config.bank_name.clone(), terms, currency, today)?;
            let text = report.render()?;

            if stdout {
                io::stdout().write_all(text.as_bytes())?;
            } else {
                let path = output.unwrap_or_else(|| PathBuf::from(report.file_name()));
                std::fs::write(&path, text)
                    .with_context(|| format!("Unable to write {}", path.display()))?;
                println!("Report written to: {}", path.display());
            }
        }

        Command::RateSheet { principal, rates, terms, currency } => {
            let currency = currency_or_default(currency);
            let sheet = rate_sheet(principal, &rates, &terms)?;

            print!("{:>8}", "Rate");
            for months in &sheet.terms {
                print!(" {:>15}", format!("{} months", months));
            }
            println!();
            for (rate, payments) in sheet.rates.iter().zip(&sheet.payments) {
                print!("{:>7}%", rate);
                for payment in payments {
                    print!(" {:>15}", format_currency(*payment, currency)?);
                }
                println!();
            }
        }
    }

    Ok(())
}
