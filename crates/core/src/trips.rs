//! Saved-trip status vocabulary and update validation.

use crate::error::CoreError;

/// Maximum length of the free-text notes on a trip.
pub const MAX_NOTES_LENGTH: usize = 2_000;

/// Maximum length of an origin or destination label.
pub const MAX_PLACE_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Freshly computed and saved; the driver has not decided yet.
pub const STATUS_CALCULATED: &str = "calculated";
/// The driver booked the load.
pub const STATUS_ACCEPTED: &str = "accepted";
/// The load was delivered; `actual_profit` may be filled in.
pub const STATUS_COMPLETED: &str = "completed";
/// The driver passed on the load.
pub const STATUS_SKIPPED: &str = "skipped";

pub const VALID_STATUSES: &[&str] = &[
    STATUS_CALCULATED,
    STATUS_ACCEPTED,
    STATUS_COMPLETED,
    STATUS_SKIPPED,
];

pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

pub fn validate_notes(notes: &str) -> Result<(), CoreError> {
    if notes.chars().count() > MAX_NOTES_LENGTH {
        return Err(CoreError::Validation(format!(
            "Notes must be at most {MAX_NOTES_LENGTH} characters"
        )));
    }
    Ok(())
}

pub fn validate_place(field: &str, place: &str) -> Result<(), CoreError> {
    if place.chars().count() > MAX_PLACE_LENGTH {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_PLACE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// `actual_profit` may be negative (a loss) but must be a real number.
pub fn validate_actual_profit(value: f64) -> Result<(), CoreError> {
    if !value.is_finite() {
        return Err(CoreError::Validation(
            "actual_profit must be a finite number".into(),
        ));
    }
    Ok(())
}
