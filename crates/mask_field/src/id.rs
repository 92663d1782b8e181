//! Generic, UI-agnostic identifier for masked fields.
//!
//! A plain `u64` newtype so the store never couples to any widget or DOM
//! identifier type. Integration layers provide `From` implementations to
//! convert from their native IDs.

/// Opaque identifier for a field within a [`MaskFieldStore`](crate::MaskFieldStore).
///
/// A lightweight, copyable handle. The value has no semantic meaning within
/// this crate; it's just a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldId(u64);

impl FieldId {
    /// Create a `FieldId` from a raw u64 value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the underlying raw value.
    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for FieldId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<FieldId> for u64 {
    #[inline]
    fn from(id: FieldId) -> Self {
        id.as_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_id_round_trip() {
        let id = FieldId::from_raw(42);
        assert_eq!(id.as_raw(), 42);
        assert_eq!(u64::from(id), 42);
    }

    #[test]
    fn field_id_works_as_map_key() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(FieldId::from_raw(1));
        set.insert(FieldId::from_raw(2));
        set.insert(FieldId::from_raw(1));
        assert_eq!(set.len(), 2);
    }
}
