// ── Core error types ──
//
// User-facing errors from the registry. Validation failures carry the
// full violation list so callers can render every message at once;
// `NotFound` signals a stale selection, which callers treat as a no-op.

use thiserror::Error;

use crate::model::ClientId;
use crate::validate::ValidationError;

/// Unified error type for registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("validation failed: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),

    #[error("client not found: {id}")]
    NotFound { id: ClientId },
}

impl RegistryError {
    /// The violation list for `Invalid`, empty otherwise.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Invalid(errors) => errors,
            Self::NotFound { .. } => &[],
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_display_joins_every_message() {
        let err = RegistryError::Invalid(vec![
            ValidationError::NameRequired,
            ValidationError::EquipmentRequired,
        ]);
        assert_eq!(
            err.to_string(),
            "validation failed: client name is required; equipment is required"
        );
    }
}
