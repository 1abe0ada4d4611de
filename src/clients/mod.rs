//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Every client reports failures as [`PosError`]. Errors raised by an entity inside its
//! actor come back unchanged; a missing id on update becomes
//! [`PosError::NotFound`]; anything else is the store being
//! [`Unavailable`](PosError::Unavailable).

pub mod menu_client;
pub mod menu_group_client;
pub mod order_client;
pub mod order_table_client;
pub mod product_client;
pub mod table_group_client;

pub use menu_client::*;
pub use menu_group_client::*;
pub use order_client::*;
pub use order_table_client::*;
pub use product_client::*;
pub use table_group_client::*;

use crate::domain::{EntityKind, PosError};
use actor_framework::{ActorClient, ActorEntity, FrameworkError};

/// Translates a framework failure for an entity of the given kind.
pub(crate) fn into_pos_error(kind: EntityKind, e: FrameworkError) -> PosError {
    match e {
        FrameworkError::NotFound(id) => PosError::NotFound { kind, id },
        other => match other.downcast_entity::<PosError>() {
            Ok(entity_error) => entity_error,
            Err(other) => PosError::Unavailable(other.to_string()),
        },
    }
}

/// Fetches `id`, turning an absent entity into [`PosError::NotFound`].
pub(crate) async fn require<T, C>(client: &C, kind: EntityKind, id: T::Id) -> Result<T, PosError>
where
    T: ActorEntity,
    C: ActorClient<T, Error = PosError>,
{
    client
        .get(id.clone())
        .await?
        .ok_or_else(|| PosError::not_found(kind, id))
}
