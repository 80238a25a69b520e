//! Argument checks applied to every log call before any backend work.

use crate::error::{Field, ValidationError};
use crate::record::ErrorRef;

/// Maximum operation name length, in characters.
pub const MAX_OPERATION_NAME_LENGTH: usize = 64;

/// Maximum message length, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 256;

/// Error argument of a log call.
///
/// Calls that do not take an error use [`Cause::Omitted`]. Error-attaching
/// calls pass [`Cause::Given`], where `None` fails validation.
#[derive(Debug, Clone, Copy)]
pub enum Cause<'a> {
    /// The call has no error parameter
    Omitted,
    /// The call takes an error parameter
    Given(Option<ErrorRef<'a>>),
}

impl<'a> Cause<'a> {
    /// The attached error, if any.
    pub fn error(&self) -> Option<ErrorRef<'a>> {
        match self {
            Cause::Omitted => None,
            Cause::Given(error) => *error,
        }
    }
}

/// Validates the arguments of a log call.
///
/// Checks run in a fixed order: origin, operation name, message, then the
/// error argument. The first failure is returned.
pub fn validate_call(
    origin: &str,
    operation: &str,
    message: &str,
    cause: &Cause<'_>,
) -> Result<(), ValidationError> {
    require_text(Field::Origin, origin, None)?;
    require_text(
        Field::OperationName,
        operation,
        Some(MAX_OPERATION_NAME_LENGTH),
    )?;
    require_text(Field::Message, message, Some(MAX_MESSAGE_LENGTH))?;

    if let Cause::Given(None) = cause {
        return Err(ValidationError::MissingError);
    }
    Ok(())
}

fn require_text(field: Field, value: &str, max: Option<usize>) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if let Some(max) = max {
        let actual = value.chars().count();
        if actual > max {
            return Err(ValidationError::TooLong { field, actual, max });
        }
    }
    Ok(())
}
