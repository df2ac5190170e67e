//! Form validation for lookup and creation requests.
//!
//! Input is the flat key/value map of a query string or url-encoded body.

mod creation;
mod errors;
mod lookup;

pub use creation::{CreationForm, MAX_TEXT_LENGTH, YEAR_RANGE};
pub use errors::{FieldError, ValidationErrors};
pub use lookup::{LookupForm, LookupQuery, TYPE_KEY, VALUE_KEY};
