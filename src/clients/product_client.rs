//! # Product Client
//!
//! High-level API for the `Product` actor.
use crate::clients::{into_pos_error, require};
use crate::domain::{EntityKind, PosError};
use crate::model::{Product, ProductCreate, ProductId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, PosError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Fetches a product that must exist.
    pub async fn require_product(&self, id: ProductId) -> Result<Product, PosError> {
        require::<Product, _>(self, EntityKind::Product, id).await
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = PosError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        into_pos_error(EntityKind::Product, e)
    }
}
