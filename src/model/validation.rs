//! Field-level validation results.
//!
//! Declarative rules (lengths, email shape) come from `validator` derives on the
//! payload types; presence and non-blank checks are added explicitly so their
//! messages take precedence over any other failure on the same field.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Violations for one payload, keyed by JSON field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
#[schema(example = json!({"name": "Name is mandatory", "email": "Email should be valid"}))]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the first message reported for each field by a `validator` run.
    ///
    /// `json_field` maps a struct field name to the name the payload uses on the
    /// wire.
    pub fn from_validation(
        result: Result<(), ValidationErrors>,
        json_field: fn(&str) -> &str,
    ) -> Self {
        let Err(errors) = result else {
            return Self::new();
        };

        let fields = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, field_errors)| {
                let message = field_errors
                    .first()?
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Validation error".to_string());
                Some((json_field(&field).to_string(), message))
            })
            .collect();

        Self(fields)
    }

    /// Records a violation, replacing any earlier message for the field.
    pub fn insert(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), message.to_string());
    }

    /// Records `message` when `value` is empty or whitespace only.
    pub fn require_text(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.insert(field, message);
        }
    }

    /// Records `message` when `value` is absent.
    pub fn require<T>(&mut self, field: &str, value: &Option<T>, message: &str) {
        if value.is_none() {
            self.insert(field, message);
        }
    }

    #[cfg(test)]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
