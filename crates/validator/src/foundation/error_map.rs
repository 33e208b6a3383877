//! Flat error maps
//!
//! The executor collects every failed constraint as a [`FieldFailure`].
//! [`ErrorMap`] reduces them to one message per dot-joined field path,
//! which is what forms render next to their inputs.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use super::error::ValidationError;
use super::path::FieldPath;

/// Key used for failures that are not attributable to a field, such as an
/// input that is not an object at all.
pub const GENERAL_KEY: &str = "general";

/// A single constraint failure at a specific location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    /// Absolute path of the failing value.
    pub path: FieldPath,
    /// The failure itself.
    pub error: ValidationError,
}

impl FieldFailure {
    pub fn new(path: FieldPath, error: ValidationError) -> Self {
        Self { path, error }
    }

    /// Failure not attributable to a field.
    pub fn general(error: ValidationError) -> Self {
        Self::new(FieldPath::root(), error)
    }

    /// Expands an error reported for the value at `base` into one failure
    /// per leaf, so nested element errors land on their own paths.
    pub fn expand(base: &FieldPath, error: &ValidationError) -> Vec<FieldFailure> {
        error
            .leaves()
            .into_iter()
            .map(|(relative, leaf)| {
                let mut flat = leaf.clone();
                flat.path = FieldPath::root();
                FieldFailure::new(base.join(&relative), flat)
            })
            .collect()
    }

    /// The error map key for this failure.
    #[must_use]
    pub fn key(&self) -> String {
        if self.path.is_root() {
            GENERAL_KEY.to_string()
        } else {
            self.path.to_string()
        }
    }

    /// The message shown to the user.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.error.message
    }
}

impl fmt::Display for FieldFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key(), self.error.message)
    }
}

/// Flat mapping from field path to a single message.
///
/// When several failures target the same path, the first one recorded wins.
/// The executor records failures in schema field order and, within a field,
/// in refinement order, so the surviving message is the one for the earliest
/// declared constraint.
///
/// # Examples
///
/// ```
/// use shortlink_validator::foundation::{ErrorMap, FieldFailure, FieldPath, ValidationError};
///
/// let map = ErrorMap::from_failures([
///     FieldFailure::new(FieldPath::key("code"), ValidationError::custom("too short")),
///     FieldFailure::new(FieldPath::key("code"), ValidationError::custom("bad characters")),
/// ]);
/// assert_eq!(map.get("code"), Some("too short"));
/// assert_eq!(map.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap {
    entries: IndexMap<String, String>,
}

impl ErrorMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from failures, keeping the first message per path.
    pub fn from_failures(failures: impl IntoIterator<Item = FieldFailure>) -> Self {
        let mut map = Self::new();
        for failure in failures {
            map.record(&failure);
        }
        map
    }

    /// Records a failure unless its path already has a message.
    ///
    /// Returns true if the failure was recorded.
    pub fn record(&mut self, failure: &FieldFailure) -> bool {
        self.insert(failure.key(), failure.message())
    }

    /// Inserts a message unless the key already has one.
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) -> bool {
        match self.entries.entry(key.into()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(message.into());
                true
            }
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Field paths in the order they failed.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, String> {
        self.entries
    }
}

impl FromIterator<FieldFailure> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = FieldFailure>>(iter: I) -> Self {
        Self::from_failures(iter)
    }
}

impl<'a> IntoIterator for &'a ErrorMap {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.entries.len())?;
        for (key, message) in &self.entries {
            writeln!(f, "  {key}: {message}")?;
        }
        Ok(())
    }
}
