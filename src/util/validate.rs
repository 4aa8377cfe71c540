//! Field-level payload validation.
//!
//! Pure functions shared by the service layer. Validation is independent of
//! the web framework: services pass an explicit [`Operation`] tag instead of
//! inspecting the HTTP verb, so the rules are testable without a request.

use crate::error::AppError;

/// Maximum length accepted for name fields.
const MAX_NAME_LEN: usize = 50;

/// The mutation being validated.
///
/// Create requires all mandatory fields to be present; Update validates only
/// the fields the payload actually carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
}

/// Validates that a name field is between 1 and 50 characters.
///
/// # Arguments
/// - `field` - Field name used in the violation message
/// - `value` - The value to check
///
/// # Returns
/// - `Ok(())` - Value is within bounds
/// - `Err(AppError::Validation)` - Value is empty or longer than 50 characters
pub fn name_length(field: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() || value.chars().count() > MAX_NAME_LEN {
        return Err(AppError::Validation(format!(
            "Field '{}' must be between 1 and 50 characters",
            field
        )));
    }
    Ok(())
}

/// Validates an optional name field, ignoring `None`.
pub fn optional_name_length(field: &str, value: Option<&str>) -> Result<(), AppError> {
    match value {
        Some(value) => name_length(field, value),
        None => Ok(()),
    }
}

/// Validates a group name against the `AA-11` pattern:
/// two uppercase ASCII letters, a hyphen, two digits.
///
/// # Returns
/// - `Ok(())` - Name matches the pattern
/// - `Err(AppError::Validation)` - Name deviates from the pattern
pub fn group_name(value: &str) -> Result<(), AppError> {
    let bytes = value.as_bytes();
    let valid = bytes.len() == 5
        && bytes[0].is_ascii_uppercase()
        && bytes[1].is_ascii_uppercase()
        && bytes[2] == b'-'
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit();

    if !valid {
        return Err(AppError::Validation(format!(
            "Group name '{}' must match the pattern 'AA-11'",
            value
        )));
    }
    Ok(())
}

/// Validates student name fields for the given operation.
///
/// On create both names are mandatory and bounded; on update only provided
/// names are checked.
///
/// # Arguments
/// - `op` - The mutation being validated
/// - `first_name` - First name, if carried by the payload
/// - `last_name` - Last name, if carried by the payload
pub fn student_fields(
    op: Operation,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<(), AppError> {
    if op == Operation::Create {
        name_length("first_name", first_name.unwrap_or(""))?;
        name_length("last_name", last_name.unwrap_or(""))?;
        return Ok(());
    }

    optional_name_length("first_name", first_name)?;
    optional_name_length("last_name", last_name)
}
