//! Error types for the knowledge registries

use crate::domain::foundation::{DomainError, ErrorCode};

/// A defect found while loading the registry tables.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("No {kind} entry for '{slug}'")]
    MissingEntry { kind: &'static str, slug: String },

    #[error("Duplicate {kind} entry for '{slug}'")]
    DuplicateEntry { kind: &'static str, slug: String },

    #[error("Invalid color in {kind} '{slug}': {reason}")]
    InvalidColor {
        kind: &'static str,
        slug: String,
        reason: String,
    },

    #[error("Invalid {kind} entry '{slug}': {reason}")]
    InvalidEntry {
        kind: &'static str,
        slug: String,
        reason: String,
    },
}

impl RegistryError {
    pub(super) fn invalid(kind: &'static str, slug: impl ToString, reason: impl Into<String>) -> Self {
        RegistryError::InvalidEntry {
            kind,
            slug: slug.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<RegistryError> for DomainError {
    fn from(err: RegistryError) -> Self {
        DomainError::new(ErrorCode::RegistryDefect, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entry_names_kind_and_slug() {
        let err = RegistryError::MissingEntry {
            kind: "theme",
            slug: "wisdom".to_string(),
        };
        assert_eq!(err.to_string(), "No theme entry for 'wisdom'");
    }

    #[test]
    fn invalid_entry_includes_reason() {
        let err = RegistryError::invalid("mood", "pastel", "no allowed layouts");
        assert!(err.to_string().contains("no allowed layouts"));
    }

    #[test]
    fn converts_to_registry_defect_domain_error() {
        let err = RegistryError::DuplicateEntry {
            kind: "layout",
            slug: "botanical".to_string(),
        };
        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::RegistryDefect);
    }
}
