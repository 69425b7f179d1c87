//! Business logic services.
//!
//! Services apply validation and permission rules on top of the repositories and build
//! the API response types. Every mutating operation receives the acting user, taken
//! from the session by the controller.

pub mod aircraft;
pub mod auth;
pub mod part;
pub mod report;
pub mod task;
pub mod test_record;
pub mod user;

use crate::server::error::{validation::ValidationError, Error};

/// Trim a required text field, failing with 400 when it is empty.
pub(crate) fn required_text(value: String, field: &'static str) -> Result<String, Error> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field).into());
    }

    Ok(trimmed.to_string())
}

/// Like [`required_text`] for fields of a partial update.
pub(crate) fn optional_text(
    value: Option<String>,
    field: &'static str,
) -> Result<Option<String>, Error> {
    value.map(|value| required_text(value, field)).transpose()
}

/// Deduplicate IDs while keeping their first-seen order.
pub(crate) fn unique_ids(ids: &[i32]) -> Vec<i32> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(id) {
            unique.push(*id);
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_trims() {
        assert_eq!(required_text("  A-100 ".to_string(), "id").unwrap(), "A-100");
        assert!(matches!(
            required_text("   ".to_string(), "name"),
            Err(Error::ValidationError(ValidationError::MissingField("name")))
        ));
        assert_eq!(optional_text(None, "name").unwrap(), None);
    }

    #[test]
    fn test_unique_ids_keeps_order() {
        assert_eq!(unique_ids(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }
}
