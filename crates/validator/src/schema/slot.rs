//! Explicit presence of a field value.

use serde_json::Value;

/// Whether a field has a value, decided once by the executor.
///
/// A missing key and `null` are absent. A blank string is absent only when
/// the field opts in with `blank_is_absent`. `false`, `0` and `[]` are
/// always present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot<'a> {
    Absent,
    Present(&'a Value),
}

impl<'a> Slot<'a> {
    /// Resolves the slot for a raw lookup result.
    #[must_use]
    pub fn resolve(raw: Option<&'a Value>, blank_is_absent: bool) -> Self {
        match raw {
            None | Some(Value::Null) => Slot::Absent,
            Some(Value::String(s)) if blank_is_absent && s.trim().is_empty() => Slot::Absent,
            Some(value) => Slot::Present(value),
        }
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Slot::Present(_))
    }

    #[must_use]
    pub fn value(&self) -> Option<&'a Value> {
        match self {
            Slot::Absent => None,
            Slot::Present(value) => Some(value),
        }
    }
}
