//! Error types for the wire encoder.

use thiserror::Error;

/// Errors raised by an encoder call.
///
/// Every error is raised before the offending encoder writes anything.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("{encoder}: value {value} is out of range")]
    OutOfRange {
        encoder: &'static str,
        value: String,
    },

    #[error("byte block of {len} bytes exceeds maximum of {max}")]
    TooLarge { len: usize, max: usize },

    #[error("{field} is {len} bytes, limit is {max}")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("expected a keyed record, got {got}")]
    NotARecord { got: &'static str },

    #[error("void value must be null or absent, got {got}")]
    NotVoid { got: &'static str },

    #[error("{encoder}: expected {expected}, got {got}")]
    TypeMismatch {
        encoder: &'static str,
        expected: &'static str,
        got: &'static str,
    },

    #[error("variant value has no `type` discriminant")]
    MissingDiscriminant,

    #[error("variant discriminant {tag} is not in 0..{count}")]
    InvalidDiscriminant { tag: String, count: usize },

    #[error("field `{field}`: {source}")]
    Field {
        field: String,
        #[source]
        source: Box<EncodeError>,
    },

    #[error("invalid public key: {0}")]
    InvalidKey(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("sink is already finalized")]
    Finalized,
}

/// Broad classes of encoder failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Numeric range, size ceiling, or fixed-width budget exceeded.
    Range,
    /// Record or variant shape does not match.
    Shape,
    /// Value of the wrong type for the encoder.
    Type,
    /// Sink used after finalization.
    State,
}

impl EncodeError {
    /// Classify this error. Field errors report the category of their cause.
    pub fn category(&self) -> ErrorCategory {
        match self {
            EncodeError::OutOfRange { .. }
            | EncodeError::TooLarge { .. }
            | EncodeError::FieldTooLong { .. } => ErrorCategory::Range,
            EncodeError::NotARecord { .. }
            | EncodeError::MissingDiscriminant
            | EncodeError::InvalidDiscriminant { .. } => ErrorCategory::Shape,
            EncodeError::NotVoid { .. }
            | EncodeError::TypeMismatch { .. }
            | EncodeError::InvalidKey(_)
            | EncodeError::InvalidDate(_) => ErrorCategory::Type,
            EncodeError::Field { source, .. } => source.category(),
            EncodeError::Finalized => ErrorCategory::State,
        }
    }

    /// Strip any `Field` wrappers and return the underlying error.
    pub fn root(&self) -> &EncodeError {
        match self {
            EncodeError::Field { source, .. } => source.root(),
            other => other,
        }
    }

    /// Shorthand for [`EncodeError::OutOfRange`].
    pub fn out_of_range(encoder: &'static str, value: impl ToString) -> Self {
        EncodeError::OutOfRange {
            encoder,
            value: value.to_string(),
        }
    }
}

/// Result type for encoder calls.
pub type Result<T> = std::result::Result<T, EncodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_category_follows_source() {
        let err = EncodeError::Field {
            field: "amount".into(),
            source: Box::new(EncodeError::out_of_range("int64", "1e300")),
        };
        assert_eq!(err.category(), ErrorCategory::Range);
        assert!(matches!(err.root(), EncodeError::OutOfRange { .. }));
        assert_eq!(
            err.to_string(),
            "field `amount`: int64: value 1e300 is out of range"
        );
    }
}
