//! Watchlist domain constants and field validation.
//!
//! Pure functions and constants used by the API handlers before any storage
//! access. Lives in `core` to keep the zero-internal-dependency constraint.

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Status literals
// ---------------------------------------------------------------------------

/// Status literal for entries that have been watched.
pub const STATUS_WATCHED: &str = "watched";

/// Status literal for entries currently being watched.
pub const STATUS_WATCHING: &str = "watching";

/// Status literal for entries not watched yet.
pub const STATUS_NOT_WATCHED: &str = "not watched";

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a required text field.
///
/// The stored `status` column is free-form (any string is persisted; only the
/// three literals above are reachable through the filtered list endpoints),
/// so text fields are checked for presence only, never against a value set.
pub fn validate_required_text(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validate a release year. Zero means the field was effectively absent.
pub fn validate_release_year(year: i32) -> Result<(), CoreError> {
    if year == 0 {
        return Err(CoreError::Validation(
            "release_year must not be zero".to_string(),
        ));
    }
    Ok(())
}

/// Validate a watchlist entry id carried in a request body.
///
/// Zero is the deserializer's tell for an absent field; negative ids are let
/// through and simply match no row downstream.
pub fn validate_entry_id(id: DbId) -> Result<(), CoreError> {
    if id == 0 {
        return Err(CoreError::Validation(
            "watchlist_id must not be zero".to_string(),
        ));
    }
    Ok(())
}

/// Validate the replaceable fields of an entry in one pass.
///
/// Checks title, genre, director, and status for presence and the release
/// year for a non-zero value. The first failing field wins.
pub fn validate_entry_fields(
    title: &str,
    release_year: i32,
    genre: &str,
    director: &str,
    status: &str,
) -> Result<(), CoreError> {
    validate_required_text("title", title)?;
    validate_release_year(release_year)?;
    validate_required_text("genre", genre)?;
    validate_required_text("director", director)?;
    validate_required_text("status", status)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_complete_fields() {
        assert!(validate_entry_fields("Dune", 2021, "Sci-Fi", "Villeneuve", "watching").is_ok());
    }

    #[test]
    fn rejects_empty_title() {
        let err = validate_entry_fields("", 2021, "Sci-Fi", "Villeneuve", "watching").unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn rejects_zero_release_year() {
        let err = validate_entry_fields("Dune", 0, "Sci-Fi", "Villeneuve", "watching").unwrap_err();
        assert!(err.to_string().contains("release_year"));
    }

    #[test]
    fn rejects_empty_genre_director_status() {
        assert!(validate_entry_fields("Dune", 2021, "", "Villeneuve", "watching").is_err());
        assert!(validate_entry_fields("Dune", 2021, "Sci-Fi", "", "watching").is_err());
        assert!(validate_entry_fields("Dune", 2021, "Sci-Fi", "Villeneuve", "").is_err());
    }

    #[test]
    fn status_is_not_restricted_to_the_known_literals() {
        // Unknown statuses persist fine; they are just invisible to the
        // three filtered list endpoints.
        assert!(validate_entry_fields("Dune", 2021, "Sci-Fi", "Villeneuve", "Watched").is_ok());
        assert!(validate_entry_fields("Dune", 2021, "Sci-Fi", "Villeneuve", "paused").is_ok());
    }

    #[test]
    fn rejects_zero_entry_id() {
        assert!(validate_entry_id(0).is_err());
        assert!(validate_entry_id(1).is_ok());
        assert!(validate_entry_id(-1).is_ok());
    }
}
