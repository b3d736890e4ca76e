//! Error types for registry operations

use super::types::ValueType;

/// Failure of a registry operation
///
/// `DuplicateRegistration`, `TypeMismatch` and `InvalidName` are integration
/// defects and should propagate. `NotRegistered` is the only variant that
/// user input can cause.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CVarError {
    /// A cvar with this name already exists
    #[error("cvar '{0}' is already registered")]
    DuplicateRegistration(String),

    /// No cvar with this name exists
    #[error("cvar '{0}' is not registered")]
    NotRegistered(String),

    /// Value tag does not match the cvar's declared type
    #[error("cvar '{name}' has type {expected}, got {found}")]
    TypeMismatch {
        name: String,
        expected: ValueType,
        found: ValueType,
    },

    /// Name is empty, contains whitespace, or is a reserved token
    #[error("invalid cvar name '{0}'")]
    InvalidName(String),
}

/// Result alias for registry operations
pub type CVarResult<T> = Result<T, CVarError>;
