//! Mask schema: the immutable description of one mask.
//!
//! A schema bundles the pattern template, the placeholder symbol marking
//! editable slots, and the character class those slots accept. The static
//! index set is derived once at construction; building a new schema is the
//! only way to change any of it.

use crate::classify::CharClass;

/// Compute the static (literal) positions of `pattern`: every char index
/// whose character is not the placeholder. The result is sorted.
///
/// An empty pattern, or a pattern made entirely of the placeholder, yields
/// an empty set.
///
/// # Examples
///
/// ```
/// use mask_core::static_indexes;
///
/// assert_eq!(static_indexes("__/__", '_'), vec![2]);
/// assert_eq!(static_indexes("___", '_'), Vec::<usize>::new());
/// assert_eq!(static_indexes("", '_'), Vec::<usize>::new());
/// ```
pub fn static_indexes(pattern: &str, placeholder: char) -> Vec<usize> {
    pattern
        .chars()
        .enumerate()
        .filter(|(_, c)| *c != placeholder)
        .map(|(i, _)| i)
        .collect()
}

/// Immutable description of a mask.
///
/// Positions and cursor offsets are measured in characters, not bytes: the
/// pattern may contain multi-byte literals, but every position addresses one
/// Unicode scalar value.
///
/// A pattern with zero placeholder occurrences is a valid but fully-static
/// mask: no position is editable, all input is rejected, and the display
/// always equals the pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskSchema {
    pattern: String,
    chars: Vec<char>,
    placeholder: char,
    char_class: CharClass,
    static_indexes: Vec<usize>,
}

impl MaskSchema {
    /// Build a schema from a pattern, placeholder symbol and character class.
    pub fn new(pattern: &str, placeholder: char, char_class: CharClass) -> Self {
        let chars: Vec<char> = pattern.chars().collect();
        let static_indexes = static_indexes(pattern, placeholder);
        Self {
            pattern: pattern.to_string(),
            chars,
            placeholder,
            char_class,
            static_indexes,
        }
    }

    /// Build a schema with the default [`CharClass::Mixed`] class.
    pub fn with_default_class(pattern: &str, placeholder: char) -> Self {
        Self::new(pattern, placeholder, CharClass::default())
    }

    /// The mask pattern template.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The placeholder symbol marking editable slots.
    #[inline]
    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    /// The alphabet accepted by the editable slots.
    #[inline]
    pub fn char_class(&self) -> CharClass {
        self.char_class
    }

    /// Pattern length in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the pattern is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The pattern character at `pos`, if in range.
    #[inline]
    pub fn char_at(&self, pos: usize) -> Option<char> {
        self.chars.get(pos).copied()
    }

    /// The derived static index set, sorted ascending.
    #[inline]
    pub fn static_indexes(&self) -> &[usize] {
        &self.static_indexes
    }

    /// Returns `true` if `pos` is a static (literal) position.
    #[inline]
    pub fn is_static(&self, pos: usize) -> bool {
        self.static_indexes.binary_search(&pos).is_ok()
    }

    /// Number of dynamic (editable) slots in the pattern.
    #[inline]
    pub fn editable_len(&self) -> usize {
        self.chars.len() - self.static_indexes.len()
    }

    /// Returns `true` if the pattern has at least one editable slot.
    #[inline]
    pub fn has_editable(&self) -> bool {
        self.editable_len() > 0
    }
}
