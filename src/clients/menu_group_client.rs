use crate::clients::{into_pos_error, require};
use crate::domain::{EntityKind, PosError};
use crate::model::{MenuGroup, MenuGroupCreate, MenuGroupId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the MenuGroup actor.
#[derive(Clone)]
pub struct MenuGroupClient {
    inner: ResourceClient<MenuGroup>,
}

impl MenuGroupClient {
    pub fn new(inner: ResourceClient<MenuGroup>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_menu_group(&self, params: MenuGroupCreate) -> Result<MenuGroupId, PosError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    pub async fn require_menu_group(&self, id: MenuGroupId) -> Result<MenuGroup, PosError> {
        require::<MenuGroup, _>(self, EntityKind::MenuGroup, id).await
    }
}

#[async_trait]
impl ActorClient<MenuGroup> for MenuGroupClient {
    type Error = PosError;

    fn inner(&self) -> &ResourceClient<MenuGroup> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        into_pos_error(EntityKind::MenuGroup, e)
    }
}
