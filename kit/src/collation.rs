// pt-BR string ordering and diacritic folding.
//
// Text is decomposed (NFD) and combining marks are dropped, so any letter with
// a canonical decomposition folds to its base letter. Letters such as 'ß', 'æ'
// or 'ø' have no decomposition and are kept as is.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block (U+0300..=U+036F).
pub fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Removes accents from `text`: `"São Paulo"` → `"Sao Paulo"`.
pub fn remove_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

fn primary_key(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Compares two strings the way a pt-BR collator orders them.
///
/// Base letters decide first (case and accents ignored), then unaccented
/// sorts before accented, then lowercase before uppercase. Remaining ties fall
/// back to code point order so the result is a total order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let primary = primary_key(a).cmp(primary_key(b));
    if primary != Ordering::Equal {
        return primary;
    }

    let secondary = a.nfd().map(is_combining_mark).cmp(b.nfd().map(is_combining_mark));
    if secondary != Ordering::Equal {
        return secondary;
    }

    let upper = |c: char| c.is_uppercase();
    let tertiary = a.nfd().map(upper).cmp(b.nfd().map(upper));
    if tertiary != Ordering::Equal {
        return tertiary;
    }

    a.cmp(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_diacritics() {
        assert_eq!(remove_diacritics("São Paulo"), "Sao Paulo");
        assert_eq!(remove_diacritics("Ação, coração, pêssego"), "Acao, coracao, pessego");
        assert_eq!(remove_diacritics("straße"), "straße");
    }

    #[test]
    fn test_remove_diacritics_drops_combining_marks() {
        // "é" written as 'e' + U+0301
        assert_eq!(remove_diacritics("cafe\u{0301}"), "cafe");
    }

    #[test]
    fn test_remove_diacritics_beyond_latin_1() {
        assert_eq!(remove_diacritics("Hà Nội"), "Ha Noi");
        assert_eq!(remove_diacritics("Timișoara"), "Timisoara");
        assert_eq!(remove_diacritics("Ǎngström"), "Angstrom");
        assert_eq!(remove_diacritics("Nguyễn"), "Nguyen");
    }

    #[test]
    fn test_locale_compare_ignores_accents_at_primary_level() {
        assert_eq!(locale_compare("ábaco", "abelha"), Ordering::Less);
        assert_eq!(locale_compare("Évora", "dado"), Ordering::Greater);
    }

    #[test]
    fn test_locale_compare_case_insensitive_first() {
        assert_eq!(locale_compare("banana", "Cereja"), Ordering::Less);
        assert_eq!(locale_compare("Zebra", "abacate"), Ordering::Greater);
    }

    #[test]
    fn test_locale_compare_tie_breakers() {
        assert_eq!(locale_compare("e", "é"), Ordering::Less);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("maçã", "maçã"), Ordering::Equal);
        // Same text, decomposed vs precomposed: only code points differ.
        assert_eq!(locale_compare("cafe\u{0301}", "café"), Ordering::Less);
    }

    #[test]
    fn test_locale_compare_folds_extended_latin() {
        assert_eq!(locale_compare("Ǎngström", "Bergen"), Ordering::Less);
        assert_eq!(locale_compare("Nội", "Norte"), Ordering::Less);
        assert_eq!(locale_compare("Timișoara", "Timor"), Ordering::Less);
        assert_eq!(locale_compare("ș", "s"), Ordering::Greater);
    }
}
