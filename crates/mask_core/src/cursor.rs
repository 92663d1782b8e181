//! Cursor navigation over a mask.
//!
//! After any formatting pass the raw cursor offset reported by the host UI
//! may land on a static/literal character. These functions re-target it to
//! the nearest meaningful editable slot so typing feels continuous across
//! literal separators (e.g. typing through `)` or `-`).

use crate::schema::MaskSchema;

/// First editable position at or after `pos` in the mask pattern.
///
/// Returns the pattern length when no editable position remains (the cursor
/// parks at the end). `pos` beyond the pattern clamps to the length.
///
/// # Examples
///
/// ```
/// use mask_core::{CharClass, MaskSchema, next_editable};
///
/// let schema = MaskSchema::new("+7 (___) ___-__-__", '_', CharClass::Numbers);
/// assert_eq!(next_editable(&schema, 0), 4);
/// assert_eq!(next_editable(&schema, 4), 4);
/// assert_eq!(next_editable(&schema, 7), 9);
/// assert_eq!(next_editable(&schema, 100), 18);
/// ```
pub fn next_editable(schema: &MaskSchema, pos: usize) -> usize {
    let pos = pos.min(schema.len());
    (pos..schema.len())
        .find(|i| !schema.is_static(*i))
        .unwrap_or(schema.len())
}

/// Walk left from `pos` while the preceding position is static in the mask
/// pattern; stop at the first editable position or at 0.
///
/// Note the asymmetry with [`next_editable`]: this returns the position
/// *after* an editable slot, which is exactly where a deletion step wants
/// the cursor to be.
///
/// # Examples
///
/// ```
/// use mask_core::{CharClass, MaskSchema, previous_editable};
///
/// let schema = MaskSchema::new("+7 (___) ___-__-__", '_', CharClass::Numbers);
/// assert_eq!(previous_editable(&schema, 10), 10); // slot 9 precedes
/// assert_eq!(previous_editable(&schema, 9), 7);   // walks over ") "
/// assert_eq!(previous_editable(&schema, 3), 0);   // nothing editable left
/// ```
pub fn previous_editable(schema: &MaskSchema, pos: usize) -> usize {
    let mut pos = pos.min(schema.len());
    while pos > 0 && schema.char_at(pos - 1) != Some(schema.placeholder()) {
        pos -= 1;
    }
    pos
}

/// Re-target the cursor after a formatting pass.
///
/// `requested` is the clamped cursor hint the edit arrived with;
/// `last_filled` is the highest dynamic index that consumed a real input
/// character before the hint (`None` when nothing was consumed there).
///
/// When the hint is ahead of the last consumed character the cursor jumps to
/// the next editable slot after it; otherwise the first placeholder
/// occurrence in `formatted` at or after the hint wins, falling back to the
/// end of the string when every slot is filled.
pub fn resolve_after_format(
    schema: &MaskSchema,
    requested: usize,
    last_filled: Option<usize>,
    formatted: &str,
) -> usize {
    match last_filled {
        Some(last) if requested <= last => {
            let mut len = 0;
            for (i, ch) in formatted.chars().enumerate() {
                if i >= requested && ch == schema.placeholder() {
                    return i;
                }
                len = i + 1;
            }
            len
        }
        Some(last) => next_editable(schema, last + 1),
        None => next_editable(schema, 0),
    }
}
