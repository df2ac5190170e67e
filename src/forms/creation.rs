use super::errors::{ErrorCollector, ValidationErrors};
use crate::album_store::NewAlbum;
use std::collections::HashMap;
use std::ops::RangeInclusive;

pub const MAX_TEXT_LENGTH: usize = 50;
pub const YEAR_RANGE: RangeInclusive<i32> = 1900..=2050;

pub struct CreationForm;

impl CreationForm {
    /// Validates the four creation fields, reporting every failing one.
    pub fn validate(input: &HashMap<String, String>) -> Result<NewAlbum, ValidationErrors> {
        let mut errors = ErrorCollector::default();

        let artist = text_field(input, "artist", &mut errors);
        let album = text_field(input, "album", &mut errors);
        let genre = text_field(input, "genre", &mut errors);
        let year = year_field(input, "year", &mut errors);

        errors.into_result()?;
        Ok(NewAlbum {
            year,
            artist,
            genre,
            album,
        })
    }
}

fn text_field(
    input: &HashMap<String, String>,
    field: &'static str,
    errors: &mut ErrorCollector,
) -> String {
    let value = input.get(field).map(|s| s.trim()).unwrap_or_default();
    if value.is_empty() {
        errors.push(field, "This field is required.");
    } else if value.chars().count() > MAX_TEXT_LENGTH {
        errors.push(
            field,
            format!("Field must be between 1 and {} characters long.", MAX_TEXT_LENGTH),
        );
    }
    value.to_string()
}

fn year_field(input: &HashMap<String, String>, field: &'static str, errors: &mut ErrorCollector) -> i32 {
    let raw = input.get(field).map(|s| s.trim()).unwrap_or_default();
    if raw.is_empty() {
        errors.push(field, "This field is required.");
        return 0;
    }
    match raw.parse::<i32>() {
        Ok(year) if YEAR_RANGE.contains(&year) => year,
        Ok(_) => {
            errors.push(
                field,
                format!(
                    "Number must be between {} and {}.",
                    YEAR_RANGE.start(),
                    YEAR_RANGE.end()
                ),
            );
            0
        }
        Err(_) => {
            errors.push(field, "Not a valid integer value.");
            0
        }
    }
}
