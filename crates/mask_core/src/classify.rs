//! Character classification for dynamic mask slots.
//!
//! A mask schema declares which alphabet its editable slots accept; every
//! candidate character passes through here before it may be committed.

use std::borrow::Cow;

/// Accepted alphabet for the dynamic (editable) slots of a mask.
///
/// The classes are deliberately ASCII-only: masks describe phone numbers,
/// dates, postal codes and similar fixed-shape values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// ASCII decimal digits `0-9`.
    Numbers,
    /// ASCII letters `a-z` / `A-Z`.
    Letters,
    /// ASCII letters or digits.
    #[default]
    Mixed,
}

/// Returns `true` if `ch` may occupy a dynamic slot of the given class.
///
/// # Examples
///
/// ```
/// use mask_core::{CharClass, is_valid_char};
///
/// assert!(is_valid_char('5', CharClass::Numbers));
/// assert!(!is_valid_char('a', CharClass::Numbers));
/// assert!(is_valid_char('a', CharClass::Letters));
/// assert!(!is_valid_char('@', CharClass::Mixed));
/// ```
#[inline]
pub fn is_valid_char(ch: char, class: CharClass) -> bool {
    match class {
        CharClass::Numbers => ch.is_ascii_digit(),
        CharClass::Letters => ch.is_ascii_alphabetic(),
        CharClass::Mixed => ch.is_ascii_alphanumeric(),
    }
}

/// Filter `input` down to the subsequence accepted by `class`.
///
/// Relative order is preserved; whitespace, punctuation and non-ASCII
/// symbols (emoji included) are dropped. Returns a `Cow::Borrowed` when the
/// input is already clean (fast path).
///
/// # Examples
///
/// ```
/// use mask_core::{CharClass, clean_value};
///
/// assert_eq!(clean_value("abc123!@#", CharClass::Numbers), "123");
/// assert_eq!(clean_value("abc123!@#", CharClass::Letters), "abc");
/// assert_eq!(clean_value("abc123!@#", CharClass::Mixed), "abc123");
/// assert_eq!(clean_value("123456", CharClass::Numbers), "123456");
/// ```
pub fn clean_value(input: &str, class: CharClass) -> Cow<'_, str> {
    if input.chars().all(|c| is_valid_char(c, class)) {
        return Cow::Borrowed(input);
    }
    Cow::Owned(
        input
            .chars()
            .filter(|c| is_valid_char(*c, class))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_per_class() {
        let cases = [
            ('5', CharClass::Numbers, true),
            ('a', CharClass::Numbers, false),
            ('@', CharClass::Numbers, false),
            ('a', CharClass::Letters, true),
            ('1', CharClass::Letters, false),
            ('@', CharClass::Letters, false),
            ('a', CharClass::Mixed, true),
            ('1', CharClass::Mixed, true),
            ('!', CharClass::Mixed, false),
        ];
        for (ch, class, want) in cases {
            assert_eq!(is_valid_char(ch, class), want, "{ch:?} as {class:?}");
        }
    }

    #[test]
    fn non_ascii_alphanumerics_are_rejected() {
        // `is_alphanumeric` would accept these; the mask classes must not.
        assert!(!is_valid_char('é', CharClass::Letters));
        assert!(!is_valid_char('٣', CharClass::Numbers)); // Arabic-Indic digit
        assert!(!is_valid_char('é', CharClass::Mixed));
    }

    #[test]
    fn clean_value_strips_rejected_characters() {
        let cases = [
            ("abc123!@#", CharClass::Numbers, "123"),
            ("abc123!@#", CharClass::Letters, "abc"),
            ("abc123!@#", CharClass::Mixed, "abc123"),
            ("!@#$%^&*()", CharClass::Numbers, ""),
            ("!@#$%^&*()", CharClass::Letters, ""),
            ("!@#$%^&*()", CharClass::Mixed, ""),
            ("1 2 3 4 5", CharClass::Numbers, "12345"),
            ("a b c d e", CharClass::Letters, "abcde"),
            ("a 1 b 2 c 3", CharClass::Mixed, "a1b2c3"),
            ("", CharClass::Numbers, ""),
            ("123456", CharClass::Numbers, "123456"),
            ("abcdef", CharClass::Letters, "abcdef"),
            ("abc123", CharClass::Mixed, "abc123"),
            ("hello🌍123", CharClass::Mixed, "hello123"),
            ("abc\n123\t!@#", CharClass::Mixed, "abc123"),
        ];
        for (input, class, want) in cases {
            assert_eq!(clean_value(input, class), want, "{input:?} as {class:?}");
        }
    }

    #[test]
    fn clean_value_borrows_when_already_clean() {
        assert!(matches!(
            clean_value("123456", CharClass::Numbers),
            Cow::Borrowed(_)
        ));
        assert!(matches!(
            clean_value("1 2 3", CharClass::Numbers),
            Cow::Owned(_)
        ));
    }

    #[test]
    fn clean_value_is_idempotent() {
        for class in [CharClass::Numbers, CharClass::Letters, CharClass::Mixed] {
            let once = clean_value("a1 b2-c3!é🌍", class).into_owned();
            assert_eq!(clean_value(&once, class), once);
        }
    }
}
