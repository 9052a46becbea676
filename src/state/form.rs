//! Generic form field/error containers for create and edit screens.
//!
//! No validation lives here; callers validate before submit and feed the
//! server's structured field errors back in after a failed one.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::ApiError;

/// Field values with parallel per-field error strings and an initial
/// snapshot for `reset`.
#[derive(Clone, Debug, Default)]
pub struct FormState {
    initial: BTreeMap<String, Value>,
    values: BTreeMap<String, Value>,
    errors: BTreeMap<String, String>,
}

impl FormState {
    /// Form seeded with `initial`; `reset` returns to exactly this snapshot.
    #[must_use]
    pub fn new(initial: BTreeMap<String, Value>) -> Self {
        Self { values: initial.clone(), initial, errors: BTreeMap::new() }
    }

    /// Convenience constructor from literal pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, Value)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|(key, value)| ((*key).to_owned(), value.clone()))
                .collect(),
        )
    }

    #[must_use]
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    #[must_use]
    pub fn values(&self) -> &BTreeMap<String, Value> {
        &self.values
    }

    #[must_use]
    pub fn error(&self, key: &str) -> Option<&str> {
        self.errors.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Set one field and clear that field's error.
    pub fn set_field(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        self.errors.remove(&key);
        self.values.insert(key, value);
    }

    /// Replace all values at once (e.g. when an edit screen loads its
    /// record). Errors are left alone.
    pub fn set_all(&mut self, values: BTreeMap<String, Value>) {
        self.values = values;
    }

    /// Replace the error map, typically from a failed submit.
    pub fn set_errors(&mut self, errors: BTreeMap<String, String>) {
        self.errors = errors;
    }

    /// Fold an API failure into the form. Validation errors land in the
    /// per-field map and return true; anything else is left for the caller
    /// to surface and returns false.
    pub fn absorb(&mut self, error: &ApiError) -> bool {
        match error.validation_fields() {
            Some(fields) => {
                self.errors = fields.clone();
                true
            }
            None => false,
        }
    }

    /// Back to the initial snapshot, errors cleared.
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors.clear();
    }

    /// Current values as a JSON object, ready to submit.
    #[must_use]
    pub fn payload(&self) -> Value {
        Value::Object(self.values.clone().into_iter().collect())
    }
}
