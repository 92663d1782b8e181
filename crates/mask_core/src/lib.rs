//! # mask_core
//!
//! UI-agnostic masking/cursor engine for masked input fields.
//!
//! Given a declarative mask pattern (e.g. `+7 (___) ___-__-__`) this crate
//! re-derives a canonical formatted string from raw user content and
//! computes where the cursor belongs after every edit. The building blocks:
//!
//! - [`MaskSchema`]: the immutable pattern/placeholder/class description,
//!   owning its derived static index set
//! - [`is_valid_char`] / [`clean_value`]: character-class validation gating
//!   what may occupy a dynamic slot
//! - [`next_editable`] / [`previous_editable`] / [`resolve_after_format`]:
//!   cursor navigation across literal separators
//! - [`format`]: the single-pass formatter producing text + cursor
//! - [`apply_mask`] / [`cursor_after_paste`]: the paste path (full re-fill
//!   from position 0)
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and has no dependencies: no
//! widget toolkit, no timers, no state store. It provides pure editing
//! semantics that can be tested independently and reused across different
//! UI adapters. The stateful edit-event controller lives in the sibling
//! `mask_field` crate.
//!
//! No function here panics or returns an error for malformed input: empty
//! patterns format to empty strings, out-of-range cursors clamp, overlong
//! input truncates, and a pattern without placeholders degrades to a
//! fully-static, non-editable mask.

mod classify;
mod cursor;
mod format;
mod schema;

pub use classify::{CharClass, clean_value, is_valid_char};
pub use cursor::{next_editable, previous_editable, resolve_after_format};
pub use format::{
    Formatted, apply_mask, apply_mask_with_indexes, cursor_after_paste,
    cursor_after_paste_with_indexes, format,
};
pub use schema::{MaskSchema, static_indexes};
