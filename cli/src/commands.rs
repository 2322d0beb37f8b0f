// Subcommand handlers. Each returns the text to print.
use crate::args::Command;
use anyhow::{anyhow, Context, Result};
use brkit::arrays::shuffle;
use brkit::formatters::{currency, date, general, numbers};
use brkit::states::find_state;
use brkit::FormatSettings;

pub fn run(command: &Command, settings: &FormatSettings) -> Result<String> {
    let output = match command {
        Command::Currency { value } => {
            currency::format_with_currency_symbol(value.as_str(), &settings.currency_symbol)
        }
        Command::CurrencyInput { value } => currency::format_currency_input(value),
        Command::Accounting { value } => currency::format_accounting_currency(value.as_str()),
        Command::Intl { value, locale, currency: code } => currency::format_international_currency(
            value.as_str(),
            locale.as_deref().unwrap_or(&settings.locale),
            code.as_deref().unwrap_or(&settings.currency_code),
        ),
        Command::Cents { value } => currency::to_cents(value.as_str()).to_string(),
        Command::Parse { value } => currency::try_parse_brazilian_currency(value)
            .with_context(|| format!("Cannot read an amount from '{value}'"))?
            .to_string(),
        Command::Percent { value } => currency::format_percent(value.as_str()),
        Command::Cpf { value } => numbers::format_cpf(value),
        Command::Phone { value } => numbers::format_phone_number(value),
        Command::Zip { value } => general::format_zip_code(value),
        Command::Date { value } => {
            let parsed = date::parse_iso_date(value)?;
            date::format_date(&parsed, &settings.date_pattern)
        }
        Command::Days { start, end } => {
            let start = date::parse_iso_date(start)?;
            let end = date::parse_iso_date(end)?;
            date::get_days_between(&start, &end).to_string()
        }
        Command::Slug { text } => general::slugify(text),
        Command::Shuffle { items } => shuffle(items).join(" "),
        Command::State { code } => {
            let state = find_state(code).ok_or_else(|| anyhow!("Unknown state code '{code}'"))?;
            serde_json::to_string(&state)?
        }
    };
    Ok(output)
}
