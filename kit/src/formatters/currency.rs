// Currency and number formatting in Brazilian notation ("R$ 1.234,56").
//
// Amounts are converted to an exact count of cents before rendering. The float
// goes through `Decimal` first, so 19.9 becomes 1990 cents even though
// 19.9 * 100.0 is 1989.999...
use crate::error::{KitError, Result};
use regex::Regex;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::LazyLock;
use tracing::debug;

pub const BRL_SYMBOL: &str = "R$";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
pub const DEFAULT_LOCALE: &str = "pt-BR";
pub const DEFAULT_CURRENCY_CODE: &str = "BRL";

const NBSP: char = '\u{a0}';
const NNBSP: char = '\u{202f}';

static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(?:\d+(?:\.\d+)?|\.\d+)").expect("numeric prefix pattern is valid")
});

/// A value that can be read as a monetary amount.
///
/// Numbers are taken as is. Strings are parsed as plain decimals
/// (`"1234.5"`); blank or non-numeric strings are no amount at all.
pub trait AsAmount {
    fn as_amount(&self) -> Option<f64>;

    /// Reading used by [`to_cents`]: strings may carry Brazilian formatting.
    fn as_currency_amount(&self) -> Option<f64> {
        self.as_amount()
    }
}

macro_rules! numeric_amount {
    ($($ty:ty),* $(,)?) => {
        $(impl AsAmount for $ty {
            fn as_amount(&self) -> Option<f64> {
                Some(*self as f64)
            }
        })*
    };
}

numeric_amount!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl AsAmount for str {
    fn as_amount(&self) -> Option<f64> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<f64>().ok()
    }

    /// Plain decimals first (`"19.9"`), Brazilian notation otherwise
    /// (`"R$ 19,90"`).
    fn as_currency_amount(&self) -> Option<f64> {
        self.as_amount()
            .or_else(|| try_parse_brazilian_currency(self).ok())
    }
}

impl AsAmount for String {
    fn as_amount(&self) -> Option<f64> {
        self.as_str().as_amount()
    }

    fn as_currency_amount(&self) -> Option<f64> {
        self.as_str().as_currency_amount()
    }
}

impl<T: AsAmount + ?Sized> AsAmount for &T {
    fn as_amount(&self) -> Option<f64> {
        (**self).as_amount()
    }

    fn as_currency_amount(&self) -> Option<f64> {
        (**self).as_currency_amount()
    }
}

impl<T: AsAmount> AsAmount for Option<T> {
    fn as_amount(&self) -> Option<f64> {
        self.as_ref().and_then(AsAmount::as_amount)
    }

    fn as_currency_amount(&self) -> Option<f64> {
        self.as_ref().and_then(AsAmount::as_currency_amount)
    }
}

/// An exact amount of minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cents(pub i128);

impl Cents {
    /// Cuts `value` to two decimal places without rounding.
    ///
    /// Returns `None` for NaN, infinities and amounts too large to count.
    pub fn truncate(value: f64) -> Option<Self> {
        let decimal = Decimal::from_f64(value)?;
        Self::from_scaled(decimal.trunc_with_scale(2), 2)
    }

    /// Rounds `value` to the nearest cent, halves away from zero.
    pub fn round(value: f64) -> Option<Self> {
        Self::round_to(value, 2)
    }

    fn round_to(value: f64, digits: u32) -> Option<Self> {
        let decimal = Decimal::from_f64(value)?;
        let rounded = decimal.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
        Self::from_scaled(rounded, digits)
    }

    /// Counts `amount` in units of `10^-digits`; `amount` already has at most
    /// `digits` decimals.
    fn from_scaled(amount: Decimal, digits: u32) -> Option<Self> {
        let factor = Decimal::from(10u64.pow(digits));
        amount.checked_mul(factor)?.trunc().to_i128().map(Self)
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

/// Inserts `separator` between groups of three digits, counting from the right.
///
/// Grouping only starts once the number has `min_grouping + 3` digits.
fn group_digits(digits: &str, separator: char, min_grouping: usize) -> String {
    if digits.len() < 3 + min_grouping {
        return digits.to_string();
    }
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Renders an unsigned count of minor units with `fraction_digits` decimals.
fn render_units(
    units: u128,
    fraction_digits: u32,
    decimal: char,
    group: char,
    min_grouping: usize,
) -> String {
    let divisor = 10u128.pow(fraction_digits);
    let integer = group_digits(&(units / divisor).to_string(), group, min_grouping);
    if fraction_digits == 0 {
        return integer;
    }
    format!(
        "{integer}{decimal}{:0width$}",
        units % divisor,
        width = fraction_digits as usize
    )
}

/// "1.234,56" for 123456 cents, with a leading '-' when negative.
fn brazilian_number(cents: Cents) -> String {
    let body = render_units(cents.0.unsigned_abs(), 2, ',', '.', 1);
    if cents.is_negative() {
        format!("-{body}")
    } else {
        body
    }
}

fn truncated_cents(value: impl AsAmount, context: &str) -> Option<Cents> {
    let cents = value.as_amount().and_then(Cents::truncate);
    if cents.is_none() {
        debug!(context = %context, "Amount missing or not a finite number, rendering zero");
    }
    cents
}

/// Formats an amount as Brazilian reais: `1234.5` → `"R$ 1.234,50"`.
///
/// Missing, empty or non-numeric input renders as `"R$ 0,00"`.
pub fn format_currency(value: impl AsAmount) -> String {
    format_with_currency_symbol(value, BRL_SYMBOL)
}

/// Formats the digits typed into a currency field, reading them as cents.
///
/// `"123456"` and `"R$ 1.234,56"` both become `"R$ 1.234,56"`.
pub fn format_currency_input(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_start_matches('0');
    let padded = format!("{digits:0>3}");
    let (units, cents) = padded.split_at(padded.len() - 2);
    format!("{BRL_SYMBOL} {},{cents}", group_digits(units, '.', 1))
}

/// Same as [`format_currency`] with a custom symbol prefix.
pub fn format_with_currency_symbol(value: impl AsAmount, symbol: &str) -> String {
    let cents = truncated_cents(value, "format_with_currency_symbol").unwrap_or_default();
    format!("{symbol} {}", brazilian_number(cents))
}

/// Formats a negative amount in parentheses: `-5` → `"(R$ 5,00)"`.
pub fn format_accounting_currency(value: impl AsAmount) -> String {
    let cents = truncated_cents(value, "format_accounting_currency").unwrap_or_default();
    let body = format!("{BRL_SYMBOL} {}", brazilian_number(cents.abs()));
    if cents.is_negative() {
        format!("({body})")
    } else {
        body
    }
}

/// Formats a percentage with two truncated decimals: `12.345` → `"12,34%"`.
pub fn format_percent(value: impl AsAmount) -> String {
    let cents = truncated_cents(value, "format_percent").unwrap_or_default();
    format!("{}%", brazilian_number(cents))
}

/// Converts an amount to minor units, rounding to the nearest cent.
///
/// Strings may contain currency formatting (`"R$ 19,90"` → `1990`).
/// Anything unreadable is `0`.
pub fn to_cents(value: impl AsAmount) -> i64 {
    match value.as_currency_amount().and_then(Cents::round) {
        Some(cents) => i64::try_from(cents.0).unwrap_or(if cents.is_negative() {
            i64::MIN
        } else {
            i64::MAX
        }),
        None => {
            debug!("Amount unreadable, counting zero cents");
            0
        }
    }
}

/// Reads a Brazilian-formatted amount: `"R$ 1.234,56"` → `1234.56`.
///
/// Returns `0.0` when no number can be read.
pub fn parse_brazilian_currency(value: &str) -> f64 {
    try_parse_brazilian_currency(value).unwrap_or_else(|err| {
        debug!(%err, "Falling back to zero");
        0.0
    })
}

/// Strict form of [`parse_brazilian_currency`].
///
/// Keeps digits, separators and '-', drops the thousands dots, turns the
/// decimal comma into a point and reads the longest leading number.
pub fn try_parse_brazilian_currency(value: &str) -> Result<f64> {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '-'))
        .collect();
    let normalized = cleaned.replacen(',', ".", 1);

    NUMERIC_PREFIX
        .find(&normalized)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .ok_or_else(|| KitError::InvalidAmount(format!("no number in '{value}'")))
}

#[derive(Debug, Clone, Copy)]
struct LocaleFormat {
    tag: &'static str,
    decimal: char,
    group: char,
    min_grouping: usize,
    symbol_first: bool,
    symbol_spaced: bool,
    /// Currency whose local symbol this locale uses unqualified.
    home_currency: &'static str,
    home_symbol: &'static str,
}

macro_rules! locale {
    ($tag:literal, $decimal:expr, $group:expr, $min:literal, $first:literal, $spaced:literal, $home:literal => $symbol:literal) => {
        LocaleFormat {
            tag: $tag,
            decimal: $decimal,
            group: $group,
            min_grouping: $min,
            symbol_first: $first,
            symbol_spaced: $spaced,
            home_currency: $home,
            home_symbol: $symbol,
        }
    };
}

// The first entry for a language is its fallback region.
const LOCALES: &[LocaleFormat] = &[
    locale!("pt-BR", ',', '.', 1, true, true, "BRL" => "R$"),
    locale!("pt-PT", ',', NBSP, 2, false, true, "EUR" => "€"),
    locale!("en-US", '.', ',', 1, true, false, "USD" => "$"),
    locale!("en-GB", '.', ',', 1, true, false, "GBP" => "£"),
    locale!("en-AU", '.', ',', 1, true, false, "AUD" => "$"),
    locale!("en-CA", '.', ',', 1, true, false, "CAD" => "$"),
    locale!("es-ES", ',', '.', 2, false, true, "EUR" => "€"),
    locale!("es-MX", '.', ',', 1, true, false, "MXN" => "$"),
    locale!("es-AR", ',', '.', 1, true, true, "ARS" => "$"),
    locale!("fr-FR", ',', NNBSP, 1, false, true, "EUR" => "€"),
    locale!("fr-CA", ',', NBSP, 1, false, true, "CAD" => "$"),
    locale!("de-DE", ',', '.', 1, false, true, "EUR" => "€"),
    locale!("it-IT", ',', '.', 1, false, true, "EUR" => "€"),
    locale!("nl-NL", ',', '.', 1, true, true, "EUR" => "€"),
    locale!("ja-JP", '.', ',', 1, true, false, "JPY" => "￥"),
];

fn find_locale(locale: &str) -> LocaleFormat {
    let wanted = locale.trim().replace('_', "-");
    let wanted = if wanted.is_empty() { DEFAULT_LOCALE } else { wanted.as_str() };
    let language = wanted.split('-').next().unwrap_or(wanted);
    LOCALES
        .iter()
        .find(|l| l.tag.eq_ignore_ascii_case(wanted))
        .or_else(|| {
            // "es", "fr-BE" and "de-AT" fall back to a region of the same language.
            LOCALES.iter().find(|l| {
                l.tag
                    .split('-')
                    .next()
                    .is_some_and(|lang| lang.eq_ignore_ascii_case(language))
            })
        })
        .copied()
        .unwrap_or_else(|| {
            debug!(locale = %locale, "Unknown locale, using pt-BR conventions");
            LOCALES[0]
        })
}

fn currency_symbol(code: &str, locale: &LocaleFormat) -> String {
    if code == locale.home_currency {
        return locale.home_symbol.to_string();
    }
    let symbol = match (code, locale.tag) {
        ("BRL", _) => "R$",
        ("USD", "de-DE" | "ja-JP" | "it-IT" | "nl-NL") => "$",
        ("USD", "fr-FR") => "$US",
        ("USD", "fr-CA") => "$\u{a0}US",
        ("USD", _) => "US$",
        ("EUR", _) => "€",
        ("GBP", _) => "£",
        ("JPY", "pt-BR" | "pt-PT") => "JP¥",
        ("JPY", _) => "¥",
        ("AUD", _) => "AU$",
        ("CAD", _) => "CA$",
        ("MXN", _) => "MX$",
        _ => return code.to_string(),
    };
    symbol.to_string()
}

fn currency_digits(code: &str) -> u32 {
    match code {
        "JPY" | "KRW" | "CLP" | "PYG" => 0,
        _ => 2,
    }
}

/// Formats an amount with the conventions of `locale` and `currency_code`.
///
/// Empty arguments default to pt-BR and BRL. Amounts are rounded to the
/// currency's minor digits, unlike the truncating Brazilian formatters.
pub fn format_international_currency(
    value: impl AsAmount,
    locale: &str,
    currency_code: &str,
) -> String {
    let format = find_locale(locale);
    let code = currency_code.trim().to_ascii_uppercase();
    let code = if code.is_empty() { DEFAULT_CURRENCY_CODE.to_string() } else { code };
    let digits = currency_digits(&code);
    let symbol = currency_symbol(&code, &format);

    let amount = Cents::round_to(value.as_amount().unwrap_or(0.0), digits).unwrap_or_else(|| {
        debug!(currency = %code, "Amount not representable, rendering zero");
        Cents::default()
    });
    let number = render_units(
        amount.0.unsigned_abs(),
        digits,
        format.decimal,
        format.group,
        format.min_grouping,
    );
    // Codes used as symbols are always separated from the number.
    let spaced = format.symbol_spaced || symbol.chars().all(|c| c.is_ascii_alphabetic());
    let separator = if spaced { NBSP.to_string() } else { String::new() };
    let sign = if amount.is_negative() { "-" } else { "" };

    if format.symbol_first {
        format!("{sign}{symbol}{separator}{number}")
    } else {
        format!("{sign}{number}{separator}{symbol}")
    }
}
