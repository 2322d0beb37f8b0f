// Digit masks for phone numbers, CPF and bank identifiers.
//
// Masks are progressive: they accept a partially typed value and only insert a
// separator once the digit that follows it exists.

const PHONE_MAX_DIGITS: usize = 11;
const CPF_DIGITS: usize = 11;
const BRANCH_DIGITS: usize = 5;
const ACCOUNT_DIGITS: usize = 13;

/// ASCII digits of `value`, at most `limit` of them.
pub(crate) fn digits_only(value: &str, limit: usize) -> String {
    value.chars().filter(char::is_ascii_digit).take(limit).collect()
}

/// Inserts each `(index, separator)` before the digit at that index, when
/// the digit is present.
pub(crate) fn insert_separators(digits: &str, separators: &[(usize, &str)]) -> String {
    let mut masked = String::with_capacity(digits.len() + separators.len() * 2);
    for (i, ch) in digits.chars().enumerate() {
        if let Some((_, sep)) = separators.iter().find(|(at, _)| *at == i) {
            masked.push_str(sep);
        }
        masked.push(ch);
    }
    masked
}

/// Digits only, as WhatsApp links expect them.
pub fn format_phone_number_for_whatsapp(value: &str) -> String {
    digits_only(value, usize::MAX)
}

/// Strips everything that is not a digit.
pub fn format_number(value: &str) -> String {
    digits_only(value, usize::MAX)
}

/// Masks a Brazilian phone number as it is typed.
///
/// Eleven digits give a mobile number `(11) 98765-4321`, up to ten a landline
/// `(11) 3456-7890`. Input without digits gives an empty string.
pub fn format_phone_number(value: &str) -> String {
    let digits = digits_only(value, PHONE_MAX_DIGITS);
    let len = digits.len();
    match len {
        0 => String::new(),
        1..=2 => format!("({digits}"),
        3..=6 => format!("({}) {}", &digits[..2], &digits[2..]),
        7..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

/// Masks a CPF as it is typed: `12345678901` → `123.456.789-01`.
pub fn format_cpf(value: &str) -> String {
    let digits = digits_only(value, CPF_DIGITS);
    insert_separators(&digits, &[(3, "."), (6, "."), (9, "-")])
}

/// Bank account number: digits only, at most thirteen.
pub fn format_count_bank_number(value: &str) -> String {
    digits_only(value, ACCOUNT_DIGITS)
}

/// Bank branch with its check digit: `12345` → `1234-5`.
pub fn format_branch_number(value: &str) -> String {
    let digits = digits_only(value, BRANCH_DIGITS);
    insert_separators(&digits, &[(4, "-")])
}

/// Like [`format_branch_number`], but a four digit branch gets a `0` check digit.
pub fn format_branch_number_with_default(value: &str) -> String {
    let mut digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 4 {
        digits.push('0');
    }
    format_branch_number(&digits)
}
