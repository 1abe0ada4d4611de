//! # Menu Client
//!
//! Stores menus that have already been assembled. Validation happens before a menu
//! reaches this client; see [`MenuService`](crate::services::MenuService).
use crate::clients::{into_pos_error, require};
use crate::domain::{EntityKind, PosError};
use crate::model::{Menu, MenuId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<Menu>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<Menu>) -> Self {
        Self { inner }
    }

    /// Persists an assembled menu. Its lines receive their ids on the way in.
    #[instrument(skip(self, menu), fields(name = %menu.name))]
    pub async fn create_menu(&self, menu: Menu) -> Result<MenuId, PosError> {
        debug!(?menu, "create_menu called");
        info!(lines = menu.lines.len(), "Sending create_menu to actor");
        self.inner.create(menu).await.map_err(Self::map_error)
    }

    pub async fn require_menu(&self, id: MenuId) -> Result<Menu, PosError> {
        require::<Menu, _>(self, EntityKind::Menu, id).await
    }
}

#[async_trait]
impl ActorClient<Menu> for MenuClient {
    type Error = PosError;

    fn inner(&self) -> &ResourceClient<Menu> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        into_pos_error(EntityKind::Menu, e)
    }
}
