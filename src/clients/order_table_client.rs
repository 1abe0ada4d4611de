//! # Order Table Client
//!
//! Registers dining tables and stores the table states computed by the grouping rules.
use crate::clients::{into_pos_error, require};
use crate::domain::{EntityKind, PosError};
use crate::model::{OrderTable, OrderTableCreate, OrderTableId, OrderTableUpdate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the OrderTable actor.
#[derive(Clone)]
pub struct OrderTableClient {
    inner: ResourceClient<OrderTable>,
}

impl OrderTableClient {
    pub fn new(inner: ResourceClient<OrderTable>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_table(&self, params: OrderTableCreate) -> Result<OrderTableId, PosError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    pub async fn require_table(&self, id: OrderTableId) -> Result<OrderTable, PosError> {
        require::<OrderTable, _>(self, EntityKind::OrderTable, id).await
    }

    /// Overwrites the stored state of `table.id` with `table`.
    #[instrument(skip(self, table), fields(id = %table.id))]
    pub async fn save_table(&self, table: &OrderTable) -> Result<OrderTable, PosError> {
        debug!(?table, "Saving table");
        self.inner
            .update(table.id, OrderTableUpdate::from(table))
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<OrderTable> for OrderTableClient {
    type Error = PosError;

    fn inner(&self) -> &ResourceClient<OrderTable> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        into_pos_error(EntityKind::OrderTable, e)
    }
}
