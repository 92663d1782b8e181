//! Per-field state tracked by the store.

use mask_core::MaskSchema;

/// Where a field sits in the EMPTY → PARTIAL → FULL progression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldPhase {
    /// Display text is `""`; nothing has been entered.
    Empty,
    /// Some dynamic slots still show the placeholder.
    Partial,
    /// Every dynamic slot holds a real character.
    Full,
}

/// Internal state for a single masked field.
///
/// Not exposed publicly; managed by [`MaskFieldStore`](crate::MaskFieldStore).
#[derive(Clone, Debug)]
pub(crate) struct FieldState {
    /// The mask this field formats against.
    pub schema: MaskSchema,

    /// The display text: `""` or exactly pattern-length characters.
    pub text: String,

    /// Caret position as a char index into the display text.
    pub caret: usize,

    /// Whether the field currently has focus.
    pub focused: bool,

    /// Deferred caret write for the adapter to apply after re-render.
    /// A newer transition overwrites an unconsumed value.
    pub pending_caret: Option<usize>,

    /// Monotonic revision counter, incremented on any text change.
    pub value_rev: u64,
}

impl FieldState {
    pub fn empty(schema: MaskSchema) -> Self {
        Self {
            schema,
            text: String::new(),
            caret: 0,
            focused: false,
            pending_caret: None,
            value_rev: 0,
        }
    }

    /// Current phase, derived from the display text.
    ///
    /// A slot showing the placeholder char reads as unfilled, so a field
    /// whose placeholder belongs to the accepted class (say `0` with a
    /// numeric class) reads Partial even when the user typed that char.
    pub fn phase(&self) -> FieldPhase {
        if self.text.is_empty() {
            return FieldPhase::Empty;
        }
        let placeholder = self.schema.placeholder();
        let unfilled = self
            .text
            .chars()
            .enumerate()
            .any(|(i, ch)| !self.schema.is_static(i) && ch == placeholder);
        if unfilled {
            FieldPhase::Partial
        } else {
            FieldPhase::Full
        }
    }
}
