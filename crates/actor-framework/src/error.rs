//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself. Entity-level failures (a menu that
//! references a missing product, a table group that cannot be formed) travel inside
//! [`FrameworkError::EntityError`] and can be recovered with
//! [`FrameworkError::downcast_entity`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the concrete entity error carried by [`FrameworkError::EntityError`].
    ///
    /// Returns the original `FrameworkError` untouched when it is a plumbing failure
    /// or when the boxed error is of a different type.
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(entity_error) => Ok(*entity_error),
                Err(inner) => Err(FrameworkError::EntityError(inner)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("table is occupied")]
    struct OccupiedTable;

    #[test]
    fn test_downcast_entity_recovers_concrete_error() {
        let err = FrameworkError::EntityError(Box::new(OccupiedTable));
        assert_eq!(err.downcast_entity::<OccupiedTable>().unwrap(), OccupiedTable);
    }

    #[test]
    fn test_downcast_entity_keeps_other_errors() {
        let err = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        let back = err.downcast_entity::<OccupiedTable>().unwrap_err();
        assert!(back.to_string().contains("disk"));

        let closed = FrameworkError::ActorClosed.downcast_entity::<OccupiedTable>();
        assert!(matches!(closed, Err(FrameworkError::ActorClosed)));
    }
}
