//! Input validation helpers
//!
//! Text length limits for customer-supplied fields and helpers turning
//! `validator` failures into [`AppError`]s.

use validator::Validate;

use crate::utils::AppError;

/// Customer names
pub const MAX_NAME_LEN: usize = 200;

/// Phone numbers
pub const MAX_PHONE_LEN: u64 = 20;

/// Payment notes
pub const MAX_NOTE_LEN: usize = 500;

/// Photo references (data URLs are truncated by the client before upload)
pub const MAX_URL_LEN: u64 = 2048;

/// Spoken transcripts
pub const MAX_TRANSCRIPT_LEN: u64 = 1000;

/// Length in characters, the unit every limit above is given in
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Run `validator` rules on a request body
pub fn validate_request<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))
}

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    let len = char_len(value);
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && char_len(v) > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            char_len(v)
        )));
    }
    Ok(())
}
