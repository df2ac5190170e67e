use super::errors::{ErrorCollector, ValidationErrors};
use crate::album_store::AlbumField;
use std::collections::HashMap;

pub const TYPE_KEY: &str = "type";
pub const VALUE_KEY: &str = "value";

/// A validated `(type, value)` lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupQuery {
    pub field: AlbumField,
    pub value: String,
}

pub struct LookupForm;

impl LookupForm {
    /// Checks `type` against the four searchable fields and requires a
    /// non-blank `value`. The value is kept as given.
    pub fn validate(input: &HashMap<String, String>) -> Result<LookupQuery, ValidationErrors> {
        let mut errors = ErrorCollector::default();

        let field = match input.get(TYPE_KEY).filter(|name| !name.trim().is_empty()) {
            None => {
                errors.push(TYPE_KEY, "This field is required.");
                None
            }
            Some(name) => match AlbumField::from_name(name) {
                Some(field) => Some(field),
                None => {
                    errors.push(TYPE_KEY, "Not a valid choice.");
                    None
                }
            },
        };

        let value = match input.get(VALUE_KEY) {
            Some(value) if !value.trim().is_empty() => Some(value.clone()),
            _ => {
                errors.push(VALUE_KEY, "This field is required.");
                None
            }
        };

        match (field, value) {
            (Some(field), Some(value)) => Ok(LookupQuery { field, value }),
            _ => Err(errors.into_errors()),
        }
    }
}
