//! # Generic Messages
//!
//! Message types exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// Each actor owns one kind of resource (products, menus, dining tables, ...).
/// Instead of ad-hoc messages per operation, every resource speaks the same
/// lifecycle vocabulary:
///
/// - **Create**: stores a new resource built from [`ActorEntity::Create`] and assigns its id.
/// - **Get**: fetches the current state by id (`None` when absent).
/// - **List**: returns every stored resource, ordered by id.
/// - **Update**: applies an [`ActorEntity::Update`] to an existing resource.
/// - **Delete**: removes the resource.
/// - **Action**: runs a resource-specific [`ActorEntity::Action`].
///
/// The enum is generic over `T: ActorEntity`, so a `MenuCreate` payload can
/// never be delivered to the dining-table actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
