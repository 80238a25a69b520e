//! Error types for log calls and provider resolution.

use std::fmt;
use thiserror::Error;

/// Boxed error returned by provider constructors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Argument of a log call that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The calling unit identifier
    Origin,
    /// The call-site label
    OperationName,
    /// The message text
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Origin => f.write_str("origin"),
            Field::OperationName => f.write_str("operation name"),
            Field::Message => f.write_str("message"),
        }
    }
}

/// Malformed or out-of-bound log call arguments.
///
/// Returned synchronously to the caller and never logged by the facade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required string argument was empty.
    #[error("The {field} must not be empty")]
    Empty { field: Field },

    /// A string argument exceeded its maximum length.
    #[error("The {field} is {actual} characters long; the maximum is {max}")]
    TooLong {
        field: Field,
        actual: usize,
        max: usize,
    },

    /// An error-attaching call was made without an error.
    #[error("An error must be attached to this log call")]
    MissingError,
}

impl ValidationError {
    /// Returns the offending field, if the failure concerns one.
    pub fn field(&self) -> Option<Field> {
        match self {
            ValidationError::Empty { field } | ValidationError::TooLong { field, .. } => {
                Some(*field)
            }
            ValidationError::MissingError => None,
        }
    }
}

/// Failure to resolve a provider identifier to a working implementation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No constructor is registered under the identifier.
    #[error("No log provider registered as '{0}'")]
    NotFound(String),

    /// The registered constructor failed.
    #[error("Unable to construct log provider '{id}': {source}")]
    Construction {
        id: String,
        #[source]
        source: BoxError,
    },
}

impl ProviderError {
    /// Identifier that failed to resolve.
    pub fn id(&self) -> &str {
        match self {
            ProviderError::NotFound(id) | ProviderError::Construction { id, .. } => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_validation_messages() {
        let err = ValidationError::TooLong {
            field: Field::OperationName,
            actual: 65,
            max: 64,
        };
        assert_eq!(
            err.to_string(),
            "The operation name is 65 characters long; the maximum is 64"
        );
        assert_eq!(err.field(), Some(Field::OperationName));

        let err = ValidationError::Empty {
            field: Field::Origin,
        };
        assert_eq!(err.to_string(), "The origin must not be empty");
        assert_eq!(ValidationError::MissingError.field(), None);
    }

    #[test]
    fn test_provider_error_keeps_source() {
        let err = ProviderError::Construction {
            id: "syslog".to_string(),
            source: "socket unavailable".into(),
        };
        assert_eq!(err.id(), "syslog");
        assert!(err.to_string().contains("syslog"));
        assert_eq!(err.source().unwrap().to_string(), "socket unavailable");
    }

    #[test]
    fn test_provider_not_found_message() {
        let err = ProviderError::NotFound("log4rs".to_string());
        assert_eq!(err.to_string(), "No log provider registered as 'log4rs'");
        assert!(err.source().is_none());
    }
}
