// Command-line interface definition

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "brkit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Brazilian currency, document and text formatting helpers")]
pub struct Cli {
    /// JSON file with format settings (locale, currency_code, currency_symbol, date_pattern)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Format an amount with the configured currency symbol ("R$ 1.234,50")
    Currency {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Format typed digits as cents ("123456" -> "R$ 1.234,56")
    CurrencyInput { value: String },
    /// Format an amount in accounting style, negatives in parentheses
    Accounting {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Format an amount with locale conventions
    Intl {
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Locale tag, defaults to the configured locale
        #[arg(long)]
        locale: Option<String>,
        /// ISO 4217 code, defaults to the configured currency
        #[arg(long)]
        currency: Option<String>,
    },
    /// Convert a formatted amount to cents
    Cents {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Parse a Brazilian formatted amount ("R$ 1.234,56" -> 1234.56)
    Parse {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Format a percentage ("12.345" -> "12,34%")
    Percent {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Mask a CPF
    Cpf { value: String },
    /// Mask a phone number
    Phone { value: String },
    /// Mask a CEP
    Zip { value: String },
    /// Reformat a YYYY-MM-DD date with the configured pattern
    Date { value: String },
    /// Whole days between two YYYY-MM-DD dates
    Days { start: String, end: String },
    /// Turn text into a URL slug
    Slug { text: String },
    /// Print the arguments in random order
    Shuffle { items: Vec<String> },
    /// Look up a state by its two-letter code
    State { code: String },
}
