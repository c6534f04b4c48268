//! Error types for Object List core.

use thiserror::Error;

/// Errors raised by the [`TypeRegistry`](crate::TypeRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A type is already registered under this qualified name.
    #[error("type '{module}.{name}' is already registered")]
    AlreadyRegistered {
        /// Module the name was registered in.
        module: String,
        /// The type name within the module.
        name: String,
    },

    /// No type is registered under this qualified name.
    #[error("type '{module}.{name}' is not registered")]
    NotRegistered {
        /// Module that was searched.
        module: String,
        /// The type name within the module.
        name: String,
    },

    /// The type is registered but may only be created by native code.
    #[error("type '{name}' cannot be created from the view layer: {reason}")]
    Uncreatable {
        /// The type name.
        name: String,
        /// The reason given at registration.
        reason: String,
    },
}

/// Result type for registry operations.
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
