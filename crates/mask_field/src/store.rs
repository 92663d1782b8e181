//! Central store for masked-field state.
//!
//! This store is UI-agnostic: it does not render, measure text, or own
//! timers. Adapters translate widget events into [`EditEvent`]s, feed them
//! through [`MaskFieldStore::apply`], and mirror the resulting display text
//! and deferred caret back into the widget.

use std::collections::HashMap;

use mask_core::{
    MaskSchema, apply_mask, clean_value, cursor_after_paste, format, is_valid_char, next_editable,
    previous_editable,
};

use crate::event::EditEvent;
use crate::id::FieldId;
use crate::state::{FieldPhase, FieldState};

/// Edit-event controller for any number of masked fields.
///
/// Each field progresses through EMPTY → PARTIAL → FULL as edits arrive;
/// every accepted event updates text and caret together, atomically. All
/// mutating entry points return whether the event changed state; events for
/// unregistered ids are no-ops returning `false`.
///
/// # Example
///
/// ```
/// use mask_core::{CharClass, MaskSchema};
/// use mask_field::{FieldId, MaskFieldStore};
///
/// let mut store = MaskFieldStore::new();
/// let id = FieldId::from_raw(1);
///
/// store.register(id, MaskSchema::new("__/__", '_', CharClass::Numbers));
/// store.focus(id);
/// store.insert(id, '1');
/// store.insert(id, '2');
/// store.insert(id, '3');
///
/// assert_eq!(store.text(id), Some("12/3_"));
/// assert_eq!(store.caret(id), Some(4));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MaskFieldStore {
    fields: HashMap<FieldId, FieldState>,
}

impl MaskFieldStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Register a field with its mask schema, starting in EMPTY state.
    ///
    /// If the field already exists this is a no-op; use [`set_schema`] to
    /// swap masks.
    ///
    /// [`set_schema`]: MaskFieldStore::set_schema
    pub fn register(&mut self, id: FieldId, schema: MaskSchema) {
        self.fields
            .entry(id)
            .or_insert_with(|| FieldState::empty(schema));
    }

    /// Swap the field's mask schema.
    ///
    /// All derived state belongs to the old schema, so the field resets to
    /// EMPTY; only the revision counter carries over.
    pub fn set_schema(&mut self, id: FieldId, schema: MaskSchema) {
        let value_rev = self
            .fields
            .get(&id)
            .map(|st| st.value_rev.wrapping_add(1))
            .unwrap_or(0);
        let mut st = FieldState::empty(schema);
        st.value_rev = value_rev;
        self.fields.insert(id, st);
    }

    /// Drop a field's state entirely.
    pub fn remove(&mut self, id: FieldId) -> bool {
        self.fields.remove(&id).is_some()
    }

    /// Drop all field state (e.g. on navigation).
    pub fn clear_all_fields(&mut self) {
        self.fields.clear();
    }

    /// Returns `true` if an entry exists for this field.
    pub fn has(&self, id: FieldId) -> bool {
        self.fields.contains_key(&id)
    }

    /// The display text, if the field exists.
    pub fn text(&self, id: FieldId) -> Option<&str> {
        self.fields.get(&id).map(|st| st.text.as_str())
    }

    /// The caret position (char index), if the field exists.
    pub fn caret(&self, id: FieldId) -> Option<usize> {
        self.fields.get(&id).map(|st| st.caret)
    }

    /// Where the field sits in the EMPTY → PARTIAL → FULL progression.
    pub fn phase(&self, id: FieldId) -> Option<FieldPhase> {
        self.fields.get(&id).map(|st| st.phase())
    }

    /// Returns `true` if the field currently has focus.
    pub fn is_focused(&self, id: FieldId) -> bool {
        self.fields.get(&id).is_some_and(|st| st.focused)
    }

    /// Monotonic revision counter for the field's text.
    ///
    /// Increments on any text change. Useful for cache invalidation.
    pub fn value_revision(&self, id: FieldId) -> u64 {
        self.fields.get(&id).map(|st| st.value_rev).unwrap_or(0)
    }

    /// Consume the deferred caret write, if one is pending.
    ///
    /// The adapter applies this to the widget's selection after its own
    /// re-render; a newer transition overwrites an unconsumed value, so the
    /// most recent deferred write wins.
    pub fn take_pending_caret(&mut self, id: FieldId) -> Option<usize> {
        self.fields.get_mut(&id).and_then(|st| st.pending_caret.take())
    }

    /// Dispatch one edit event to the field.
    pub fn apply(&mut self, id: FieldId, event: EditEvent) -> bool {
        log::trace!(target: "mask.field", "field {}: {event:?}", id.as_raw());
        match event {
            EditEvent::Focus => self.focus(id),
            EditEvent::Blur => self.blur(id),
            EditEvent::Insert(ch) => self.insert(id, ch),
            EditEvent::Backspace => self.backspace(id),
            EditEvent::ClearAll => self.clear(id),
            EditEvent::Paste(raw) => self.paste(id, &raw),
        }
    }

    /// The field gained focus.
    ///
    /// An EMPTY field materializes the pattern and targets the first
    /// editable slot; otherwise the caret moves to the first slot still
    /// showing the placeholder, or to the end when every slot is filled.
    pub fn focus(&mut self, id: FieldId) -> bool {
        let Some(st) = self.fields.get_mut(&id) else {
            return false;
        };
        st.focused = true;

        if st.text.is_empty() && !st.schema.is_empty() {
            st.text = st.schema.pattern().to_string();
            st.caret = next_editable(&st.schema, 0);
            mark_text_dirty(st);
        } else {
            let placeholder = st.schema.placeholder();
            st.caret = st
                .text
                .chars()
                .position(|c| c == placeholder)
                .unwrap_or_else(|| st.text.chars().count());
        }

        st.pending_caret = Some(st.caret);
        true
    }

    /// The field lost focus.
    ///
    /// If no real character was ever entered (the display still equals the
    /// pattern) the field collapses back to EMPTY. Any pending caret write
    /// is dropped; there is no focused widget to re-target.
    pub fn blur(&mut self, id: FieldId) -> bool {
        let Some(st) = self.fields.get_mut(&id) else {
            return false;
        };
        st.focused = false;
        st.pending_caret = None;

        if !st.text.is_empty() && st.text == st.schema.pattern() {
            st.text.clear();
            st.caret = 0;
            mark_text_dirty(st);
        }
        true
    }

    /// A single character typed at the caret.
    ///
    /// The character must pass the schema's class check or the whole edit
    /// is rejected (state untouched). Otherwise the raw content of the
    /// display is re-derived, the character spliced in at the raw offset
    /// matching the caret, and the formatter re-packs everything. This is
    /// what makes typing into an interior hole (left by a mid-string
    /// backspace) shift the tail into place.
    pub fn insert(&mut self, id: FieldId, ch: char) -> bool {
        let Some(st) = self.fields.get_mut(&id) else {
            return false;
        };
        if !st.schema.has_editable() {
            return false;
        }
        if !is_valid_char(ch, st.schema.char_class()) {
            log::debug!(
                target: "mask.field",
                "field {}: reject {ch:?} for {:?} class",
                id.as_raw(),
                st.schema.char_class()
            );
            return false;
        }

        // A keystroke may arrive without a preceding focus event.
        let was_empty = st.text.is_empty();
        if was_empty {
            st.text = st.schema.pattern().to_string();
            st.caret = next_editable(&st.schema, 0);
        }

        let caret = st.caret.min(st.schema.len());
        let (mut raw, at) = raw_parts(st, caret);
        raw.insert(at, ch); // raw is class-checked, hence ASCII: byte == char index

        let out = format(&st.schema, &raw, caret + 1);
        let text_changed = was_empty || out.text != st.text;
        let changed = text_changed || out.cursor != st.caret;
        if text_changed {
            mark_text_dirty(st);
        }
        st.text = out.text;
        st.caret = out.cursor;
        st.pending_caret = Some(st.caret);
        changed
    }

    /// Backspace at the caret.
    ///
    /// A caret sitting on (or right of) a static separator first walks left
    /// to the nearest dynamic slot; that slot resets to the placeholder and
    /// receives the caret. The static characters themselves are never
    /// deleted. When the last real character goes, the field collapses to
    /// EMPTY.
    pub fn backspace(&mut self, id: FieldId) -> bool {
        let Some(st) = self.fields.get_mut(&id) else {
            return false;
        };
        if st.text.is_empty() {
            return false;
        }

        let caret = st.caret.min(st.schema.len());
        let stop = previous_editable(&st.schema, caret);
        if stop == 0 {
            // Nothing editable to the left of the caret.
            return false;
        }
        let target = stop - 1;

        let placeholder = st.schema.placeholder();
        let mut chars: Vec<char> = st.text.chars().collect();
        let was = chars[target];
        chars[target] = placeholder;

        let all_placeholder = chars
            .iter()
            .enumerate()
            .all(|(i, c)| st.schema.is_static(i) || *c == placeholder);

        if all_placeholder {
            st.text.clear();
            st.caret = 0;
            st.pending_caret = Some(0);
            mark_text_dirty(st);
            return true;
        }

        let changed = was != placeholder || st.caret != target;
        if was != placeholder {
            st.text = chars.into_iter().collect();
            mark_text_dirty(st);
        }
        st.caret = target;
        st.pending_caret = Some(target);
        changed
    }

    /// Backspace/delete with the whole text selected: clear to EMPTY.
    pub fn clear(&mut self, id: FieldId) -> bool {
        let Some(st) = self.fields.get_mut(&id) else {
            return false;
        };
        let changed = !st.text.is_empty() || st.caret != 0;
        if !st.text.is_empty() {
            mark_text_dirty(st);
        }
        st.text.clear();
        st.caret = 0;
        st.pending_caret = Some(0);
        changed
    }

    /// Paste a raw string: sanitize, then re-fill every dynamic slot from
    /// position 0. Prior partial content is discarded: paste is a full
    /// replace, not a merge.
    pub fn paste(&mut self, id: FieldId, raw: &str) -> bool {
        let Some(st) = self.fields.get_mut(&id) else {
            return false;
        };
        if st.schema.is_empty() {
            return false;
        }

        let cleaned = clean_value(raw, st.schema.char_class());
        let text = apply_mask(&cleaned, &st.schema);
        let caret = cursor_after_paste(&cleaned, &st.schema);
        log::trace!(
            target: "mask.field",
            "field {}: paste {} raw chars -> caret {caret}",
            id.as_raw(),
            cleaned.chars().count()
        );

        let changed = text != st.text || caret != st.caret;
        if text != st.text {
            mark_text_dirty(st);
        }
        st.text = text;
        st.caret = caret;
        st.pending_caret = Some(caret);
        changed
    }

    /// Programmatic value assignment (a controlled field's external value).
    ///
    /// Empty raw collapses the field to EMPTY; anything else behaves like
    /// [`paste`](MaskFieldStore::paste) but without queueing a caret write,
    /// since no widget interaction happened.
    pub fn set_value(&mut self, id: FieldId, raw: &str) -> bool {
        let Some(st) = self.fields.get_mut(&id) else {
            return false;
        };

        if raw.is_empty() {
            let changed = !st.text.is_empty();
            if changed {
                mark_text_dirty(st);
            }
            st.text.clear();
            st.caret = 0;
            return changed;
        }
        if st.schema.is_empty() {
            return false;
        }

        let cleaned = clean_value(raw, st.schema.char_class());
        let text = apply_mask(&cleaned, &st.schema);
        let caret = cursor_after_paste(&cleaned, &st.schema);
        let changed = text != st.text;
        if changed {
            mark_text_dirty(st);
        }
        st.text = text;
        st.caret = caret;
        changed
    }

    /// Place the caret directly (pointer click), clamped to the text.
    pub fn set_caret(&mut self, id: FieldId, caret: usize) -> bool {
        let Some(st) = self.fields.get_mut(&id) else {
            return false;
        };
        let caret = caret.min(st.text.chars().count());
        let changed = caret != st.caret;
        st.caret = caret;
        changed
    }
}

// --- Internal helper functions ---

/// Raw user content of the display plus the raw offset matching `caret`:
/// the characters of filled dynamic slots in order, and how many of them
/// sit strictly before the caret.
fn raw_parts(st: &FieldState, caret: usize) -> (String, usize) {
    let placeholder = st.schema.placeholder();
    let mut raw = String::new();
    let mut before = 0;

    for (i, ch) in st.text.chars().enumerate() {
        if st.schema.is_static(i) || ch == placeholder {
            continue;
        }
        if i < caret {
            before += 1;
        }
        raw.push(ch);
    }

    (raw, before)
}

fn mark_text_dirty(st: &mut FieldState) {
    st.value_rev = st.value_rev.wrapping_add(1);
}
