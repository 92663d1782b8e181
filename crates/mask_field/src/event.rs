//! Edit events the host adapter feeds into the store.

/// One edit event extracted from a raw UI-level interaction.
///
/// The adapter translates keyboard/focus activity into these and feeds them
/// through [`MaskFieldStore::apply`](crate::MaskFieldStore::apply); each is
/// handled synchronously and atomically with respect to the field state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditEvent {
    /// The field gained focus.
    Focus,
    /// The field lost focus.
    Blur,
    /// A single character was typed at the caret.
    Insert(char),
    /// Backspace at the caret.
    Backspace,
    /// Backspace/delete with the whole text selected.
    ClearAll,
    /// A raw string was pasted (full replace, not a merge).
    Paste(String),
}
