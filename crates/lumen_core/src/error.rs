//! # World Error Types
//!
//! Everything that can go wrong inside the entity world. The consistency
//! violations are programming errors: they are logged loudly where they are
//! detected and are never retried.

use thiserror::Error;

use crate::ecs::EntityId;

/// Errors that can occur in the entity world.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// The pool handed out an id that is still registered in the identity index.
    #[error("game object {id} already exists, unable to add new object")]
    IdentityCollision {
        /// The id that was already taken.
        id: EntityId,
    },

    /// A listener callback failed; the rest of the operation was abandoned.
    #[error(transparent)]
    Listener(#[from] ListenerError),

    /// Invalid or unreadable configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Failure reported by a [`WorldListener`](crate::ecs::WorldListener) callback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("listener failed: {message}")]
pub struct ListenerError {
    message: String,
}

impl ListenerError {
    /// Creates a listener error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message the listener reported.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for world operations.
pub type WorldResult<T> = Result<T, WorldError>;

/// Result type returned by listener callbacks.
pub type ListenerResult = Result<(), ListenerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_error_converts_into_world_error() {
        let err: WorldError = ListenerError::new("renderer lost its texture").into();
        assert_eq!(err.to_string(), "listener failed: renderer lost its texture");
        assert!(matches!(err, WorldError::Listener(ref inner) if inner.message() == "renderer lost its texture"));
    }
}
