use crate::clients::{into_pos_error, require};
use crate::domain::{EntityKind, PosError};
use crate::model::{TableGroup, TableGroupId};
use crate::table_group_actor::TableGroupAction;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the TableGroup actor.
#[derive(Clone)]
pub struct TableGroupClient {
    inner: ResourceClient<TableGroup>,
}

impl TableGroupClient {
    pub fn new(inner: ResourceClient<TableGroup>) -> Self {
        Self { inner }
    }

    /// Persists a group returned by [`TableGroup::form`].
    #[instrument(skip(self, group), fields(tables = group.table_ids().len()))]
    pub async fn create_table_group(&self, group: TableGroup) -> Result<TableGroupId, PosError> {
        debug!(?group, "create_table_group called");
        self.inner.create(group).await.map_err(Self::map_error)
    }

    pub async fn require_table_group(&self, id: TableGroupId) -> Result<TableGroup, PosError> {
        require::<TableGroup, _>(self, EntityKind::TableGroup, id).await
    }

    /// Drops every member of the stored group.
    #[instrument(skip(self))]
    pub async fn dissolve(&self, id: TableGroupId) -> Result<(), PosError> {
        info!("Dissolving table group");
        self.inner
            .perform_action(id, TableGroupAction::Dissolve)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<TableGroup> for TableGroupClient {
    type Error = PosError;

    fn inner(&self) -> &ResourceClient<TableGroup> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        into_pos_error(EntityKind::TableGroup, e)
    }
}
