//! Error types for specification building

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors returned by the spec builder.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("Unknown theme: '{0}'")]
    UnknownTheme(String),

    #[error("Unknown mood: '{0}'")]
    UnknownMood(String),

    #[error("Unknown layout: '{0}'")]
    UnknownLayout(String),

    #[error("Malformed override '{field}': {reason}")]
    MalformedOverride { field: String, reason: String },

    #[error("Specification invariant violated: {0}")]
    InvariantViolation(String),
}

impl SpecError {
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        SpecError::MalformedOverride {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Maps the error onto the shared error code vocabulary.
    pub fn code(&self) -> ErrorCode {
        match self {
            SpecError::UnknownTheme(_) => ErrorCode::UnknownTheme,
            SpecError::UnknownMood(_) => ErrorCode::UnknownMood,
            SpecError::UnknownLayout(_) => ErrorCode::UnknownLayout,
            SpecError::MalformedOverride { .. } => ErrorCode::MalformedOverride,
            SpecError::InvariantViolation(_) => ErrorCode::InvariantViolation,
        }
    }
}

impl From<ValidationError> for SpecError {
    fn from(err: ValidationError) -> Self {
        SpecError::MalformedOverride {
            field: err.field().to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<SpecError> for DomainError {
    fn from(err: SpecError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            SpecError::MalformedOverride { field, .. } => domain.with_detail("field", field),
            _ => domain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_displays_value() {
        let err = SpecError::UnknownTheme("melancholy".to_string());
        assert_eq!(err.to_string(), "Unknown theme: 'melancholy'");
        assert_eq!(err.code(), ErrorCode::UnknownTheme);
    }

    #[test]
    fn validation_error_becomes_malformed_override() {
        let err: SpecError = ValidationError::out_of_range("styleVariant", 0, 3, 9).into();
        match err {
            SpecError::MalformedOverride { ref field, .. } => assert_eq!(field, "styleVariant"),
            other => panic!("expected MalformedOverride, got {:?}", other),
        }
        assert_eq!(err.code(), ErrorCode::MalformedOverride);
    }

    #[test]
    fn domain_error_keeps_code_and_field() {
        let domain: DomainError = SpecError::malformed("customPalette", "expected 3 colors").into();
        assert_eq!(domain.code, ErrorCode::MalformedOverride);
        assert_eq!(domain.details.get("field").map(String::as_str), Some("customPalette"));
    }

    #[test]
    fn invariant_violation_maps_to_its_code() {
        let err = SpecError::InvariantViolation("palette has 2 colors".to_string());
        assert_eq!(err.code(), ErrorCode::InvariantViolation);
        assert!(err.to_string().contains("palette has 2 colors"));
    }
}
