//! The formatting pass: fold raw input into the mask skeleton.
//!
//! [`format`] is the canonical single-pass algorithm used for every edit;
//! [`apply_mask`] / [`cursor_after_paste`] are the paste-path variants that
//! always re-fill from position 0 (paste is a full replace, not a merge).

use crate::classify::clean_value;
use crate::cursor::resolve_after_format;
use crate::schema::MaskSchema;

/// Result of a formatting pass: the new display text plus the re-targeted
/// cursor offset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formatted {
    pub text: String,
    pub cursor: usize,
}

/// Fold `input` into the mask in a single left-to-right pass.
///
/// `input` may be raw user content or a partially-formatted string. A
/// mask-shaped input (pattern length, static literals in place) contributes
/// only the content of its dynamic slots, so re-formatting a formatted
/// string is a fixed point even when a static literal happens to belong to
/// the accepted class (the `7` in `+7 (…)`). Anything else is sanitized
/// against the schema's character class as a whole.
///
/// Static positions emit the pattern verbatim; dynamic positions consume
/// the next input character while any remain, then fall back to the
/// placeholder. Input longer than the number of dynamic slots is silently
/// truncated.
///
/// `cursor_hint` is the caret position the edit arrived with; values beyond
/// the pattern clamp to its length. The returned cursor is re-targeted to
/// the nearest meaningful editable slot (see
/// [`resolve_after_format`](crate::resolve_after_format)).
///
/// # Examples
///
/// ```
/// use mask_core::{CharClass, MaskSchema, format};
///
/// let schema = MaskSchema::new("__.__.____", '_', CharClass::Numbers);
/// let out = format(&schema, "31122023", 10);
/// assert_eq!(out.text, "31.12.2023");
/// assert_eq!(out.cursor, 10);
/// ```
pub fn format(schema: &MaskSchema, input: &str, cursor_hint: usize) -> Formatted {
    if schema.is_empty() {
        return Formatted {
            text: String::new(),
            cursor: 0,
        };
    }

    let hint = cursor_hint.min(schema.len());
    let cleaned = if is_mask_shaped(schema, input) {
        clean_value(&raw_content(schema, input), schema.char_class()).into_owned()
    } else {
        clean_value(input, schema.char_class()).into_owned()
    };
    let mut pending = cleaned.chars();

    let mut text = String::with_capacity(schema.pattern().len());
    let mut last_filled = None;

    for i in 0..schema.len() {
        if schema.is_static(i) {
            // Static part of the mask: reproduce it verbatim.
            text.push(schema.char_at(i).unwrap_or(schema.placeholder()));
        } else if let Some(ch) = pending.next() {
            text.push(ch);
            if i < hint {
                last_filled = Some(i);
            }
        } else {
            text.push(schema.placeholder());
        }
    }

    let cursor = resolve_after_format(schema, hint, last_filled, &text);
    Formatted { text, cursor }
}

/// A string is mask-shaped when it has the pattern's length and every
/// static position holds the pattern literal.
fn is_mask_shaped(schema: &MaskSchema, input: &str) -> bool {
    let mut count = 0;
    for (i, ch) in input.chars().enumerate() {
        count += 1;
        if schema.is_static(i) && schema.char_at(i) != Some(ch) {
            return false;
        }
    }
    count == schema.len() && !schema.is_empty()
}

/// The raw user content of a mask-shaped string: the characters of its
/// dynamic slots, holes (slots showing the placeholder) skipped.
fn raw_content(schema: &MaskSchema, text: &str) -> String {
    text.chars()
        .enumerate()
        .filter(|(i, ch)| !schema.is_static(*i) && *ch != schema.placeholder())
        .map(|(_, ch)| ch)
        .collect()
}

/// Fill `pattern` with `raw` using an explicit static index set.
///
/// Static indexes reproduce the pattern character; dynamic indexes consume
/// `raw` left to right until exhausted, then the placeholder fills the
/// remainder. `raw` is used as-is; callers sanitize first.
pub fn apply_mask_with_indexes(
    raw: &str,
    pattern: &str,
    static_indexes: &[usize],
    placeholder: char,
) -> String {
    let mut input = raw.chars();
    let mut result = String::with_capacity(pattern.len());

    for (i, mask_ch) in pattern.chars().enumerate() {
        if static_indexes.contains(&i) {
            result.push(mask_ch);
        } else if let Some(ch) = input.next() {
            result.push(ch);
        } else {
            result.push(placeholder);
        }
    }

    result
}

/// Schema-level [`apply_mask_with_indexes`]: the paste-path fill that always
/// starts from position 0, discarding any prior partial content.
pub fn apply_mask(raw: &str, schema: &MaskSchema) -> String {
    apply_mask_with_indexes(
        raw,
        schema.pattern(),
        schema.static_indexes(),
        schema.placeholder(),
    )
}

/// Cursor offset immediately after the last pasted character.
///
/// Walks `pattern` left to right, counting every static position and every
/// consumed raw character, and stops as soon as the raw input is exhausted,
/// so trailing static separators are skipped only while input remains.
pub fn cursor_after_paste_with_indexes(
    raw: &str,
    pattern: &str,
    static_indexes: &[usize],
) -> usize {
    let raw_len = raw.chars().count();
    let mut consumed = 0;
    let mut cursor = 0;

    for i in 0..pattern.chars().count() {
        if static_indexes.contains(&i) {
            cursor += 1;
        } else if consumed < raw_len {
            consumed += 1;
            cursor += 1;
        } else {
            break;
        }
    }

    cursor
}

/// Schema-level [`cursor_after_paste_with_indexes`].
pub fn cursor_after_paste(raw: &str, schema: &MaskSchema) -> usize {
    cursor_after_paste_with_indexes(raw, schema.pattern(), schema.static_indexes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::CharClass;

    fn phone() -> MaskSchema {
        MaskSchema::new("+7 (___) ___-__-__", '_', CharClass::Numbers)
    }

    #[test]
    fn formats_full_phone_number() {
        let out = format(&phone(), "9995554433", 18);
        assert_eq!(out.text, "+7 (999) 555-44-33");
        assert_eq!(out.cursor, 18);
    }

    #[test]
    fn formats_date_mask() {
        let schema = MaskSchema::new("__.__.____", '_', CharClass::Numbers);
        let out = format(&schema, "31122023", 10);
        assert_eq!(out.text, "31.12.2023");
        assert_eq!(out.cursor, 10);
    }

    #[test]
    fn formats_custom_placeholder() {
        let schema = MaskSchema::new("##-##-##", '#', CharClass::Numbers);
        let out = format(&schema, "123456", 8);
        assert_eq!(out.text, "12-34-56");
        assert_eq!(out.cursor, 8);
    }

    #[test]
    fn sanitizes_input_before_filling() {
        let out = format(&phone(), "abc123def", 0);
        assert_eq!(out.text, "+7 (123) ___-__-__");
    }

    #[test]
    fn empty_pattern_formats_to_empty() {
        let schema = MaskSchema::new("", '_', CharClass::Numbers);
        let out = format(&schema, "123", 2);
        assert_eq!(out.text, "");
        assert_eq!(out.cursor, 0);
    }

    #[test]
    fn cursor_hint_clamps_to_pattern_length() {
        let out = format(&phone(), "999", 100);
        assert_eq!(out.text, "+7 (999) ___-__-__");
        // Hint clamps to 18; last consumed slot is 6, so the cursor lands
        // on the next editable slot after it.
        assert_eq!(out.cursor, 9);
    }

    #[test]
    fn overlong_input_is_truncated() {
        let out = format(&phone(), "99955544331234", 18);
        assert_eq!(out.text, "+7 (999) 555-44-33");
        assert_eq!(out.cursor, 18);
    }

    #[test]
    fn partial_input_leaves_placeholders_and_parks_cursor_on_next_slot() {
        let out = format(&phone(), "999", 7);
        assert_eq!(out.text, "+7 (999) ___-__-__");
        assert_eq!(out.cursor, 9);
    }

    #[test]
    fn format_is_idempotent() {
        let inputs = ["9995554433", "999", "", "12"];
        for input in inputs {
            let once = format(&phone(), input, 4);
            let twice = format(&phone(), &once.text, once.cursor);
            assert_eq!(twice.text, once.text, "input {input:?}");
        }
    }

    #[test]
    fn static_positions_are_invariant() {
        let schema = phone();
        for input in ["", "1", "555", "9995554433", "abc", "12xy34"] {
            let out = format(&schema, input, 0);
            for &i in schema.static_indexes() {
                assert_eq!(
                    out.text.chars().nth(i),
                    schema.char_at(i),
                    "static position {i} for input {input:?}"
                );
            }
        }
    }

    #[test]
    fn fills_every_slot_when_input_covers_them() {
        let schema = phone();
        let out = format(&schema, "0123456789", 0);
        assert!(!out.text.contains('_'), "no placeholder left: {}", out.text);
    }

    #[test]
    fn apply_mask_with_static_indexes() {
        let cases: &[(&str, &str, &[usize], char, &str)] = &[
            ("123", "(###) ###-####", &[0, 4, 5, 9], '#', "(123) ###-####"),
            ("", "(___) ___-____", &[0, 4, 5, 9], '_', "(___) ___-____"),
            (
                "1234567890111",
                "(###) ###-####",
                &[0, 4, 5, 9],
                '#',
                "(123) 456-7890",
            ),
            ("123", "__/__", &[2], '_', "12/3_"),
            ("BC12345", "AA-___-99", &[2, 6, 8], '_', "BC-123-49"),
        ];
        for (raw, pattern, statics, placeholder, want) in cases {
            assert_eq!(
                apply_mask_with_indexes(raw, pattern, statics, *placeholder),
                *want,
                "raw {raw:?} into {pattern:?}"
            );
        }
    }

    #[test]
    fn apply_mask_uses_schema_derived_indexes() {
        let schema = MaskSchema::new("(###) ###-####", '#', CharClass::Numbers);
        assert_eq!(apply_mask("123", &schema), "(123) ###-####");
        assert_eq!(apply_mask("1234567890", &schema), "(123) 456-7890");
    }

    #[test]
    fn paste_cursor_lands_after_last_raw_char() {
        let cases: &[(&str, &str, &[usize], usize)] = &[
            ("123", "(###) ###-####", &[0, 4, 5, 9], 6),
            ("", "(###) ###-####", &[0, 4, 5, 9], 1),
            ("1234567890111", "(###) ###-####", &[0, 4, 5, 9], 14),
        ];
        for (raw, pattern, statics, want) in cases {
            assert_eq!(
                cursor_after_paste_with_indexes(raw, pattern, statics),
                *want,
                "raw {raw:?} into {pattern:?}"
            );
        }
    }

    #[test]
    fn paste_cursor_through_schema() {
        let schema = phone();
        assert_eq!(cursor_after_paste("9995554433", &schema), 18);
        // Trailing separators ") " count before the walk stops at the first
        // unfillable slot, so the cursor already sits on the next slot.
        assert_eq!(cursor_after_paste("999", &schema), 9);
    }

    #[test]
    fn reformatting_formatted_text_ignores_class_valid_literals() {
        // The static "7" is a digit; re-formatting must not consume it as input.
        let once = format(&phone(), "999", 7);
        let twice = format(&phone(), &once.text, once.cursor);
        assert_eq!(twice.text, "+7 (999) ___-__-__");
    }

    #[test]
    fn materialized_pattern_reformats_to_itself() {
        let schema = phone();
        let out = format(&schema, schema.pattern(), 0);
        assert_eq!(out.text, schema.pattern());
        assert_eq!(out.cursor, 4);
    }
}
