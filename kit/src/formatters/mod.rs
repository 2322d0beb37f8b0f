// pt-BR formatters
pub mod currency;
pub mod date;
pub mod general;
pub mod numbers;

pub use currency::{
    format_accounting_currency, format_currency, format_currency_input,
    format_international_currency, format_percent, format_with_currency_symbol,
    parse_brazilian_currency, to_cents, AsAmount, Cents,
};
pub use date::{formatted_date, format_date, get_days_between, is_weekend};
pub use general::slugify;
pub use numbers::{format_cpf, format_phone_number};
