// Text normalization, names and addresses
use crate::collation::remove_diacritics;
use crate::formatters::numbers::{digits_only, insert_separators};
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_TRUNCATE_SUFFIX: &str = "...";

const ZIP_CODE_DIGITS: usize = 8;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]+").expect("slug pattern is valid"));
static HYPHEN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--+").expect("hyphen pattern is valid"));

/// Uppercases the first character and leaves the rest alone.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Capitalizes every space-separated word and lowercases the rest of it.
pub fn capitalize_text(text: &str) -> String {
    text.split(' ')
        .map(|word| capitalize(&word.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// URL-friendly slug: `"São Paulo!"` → `"sao-paulo"`.
pub fn slugify(text: &str) -> String {
    let folded = remove_diacritics(text).to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(folded.trim(), "-");
    let cleaned = NON_SLUG_CHARS.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUN.replace_all(&cleaned, "-");
    collapsed.trim_matches('-').to_string()
}

/// Cuts `text` to `length` characters and appends `suffix` when it was cut.
pub fn truncate(text: &str, length: usize, suffix: &str) -> String {
    match text.char_indices().nth(length) {
        Some((cut, _)) => format!("{}{suffix}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Keeps ASCII letters, Latin-1 accented letters and whitespace.
pub fn format_text_only(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || ('À'..='ÿ').contains(c) || c.is_whitespace())
        .collect()
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(
            c,
            'á' | 'ã' | 'é' | 'ê' | 'í' | 'ó' | 'õ' | 'ú' | 'ç' | 'Á' | 'Ã' | 'É' | 'Ê' | 'Í' | 'Ó'
                | 'Õ' | 'Ú' | 'Ç'
        )
}

/// Cleans a typed full name: letters and Portuguese accents only, single spaces.
pub fn format_full_name(value: &str) -> String {
    let letters: String = value
        .chars()
        .filter(|c| is_name_char(*c) || c.is_whitespace())
        .collect();
    WHITESPACE_RUN.replace_all(&letters, " ").trim().to_string()
}

/// Initials of the first two names: `"maria silva"` → `"MS"`.
pub fn get_acronym(full_name: &str) -> String {
    full_name
        .trim()
        .split(' ')
        .take(2)
        .filter_map(|name| name.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Masks a CEP as it is typed: `"12345678"` → `"12345-678"`.
pub fn format_zip_code(value: &str) -> String {
    let digits = digits_only(value, ZIP_CODE_DIGITS);
    insert_separators(&digits, &[(5, "-")])
}
