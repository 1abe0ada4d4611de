//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: default `get`, `list` and `delete`
//! built on top of a generic `ResourceClient`, with framework errors mapped into the
//! client's own error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read/delete operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct MenuGroup { id: u32, name: String }
/// #[derive(Debug)] struct MenuGroupCreate { name: String }
/// #[derive(Debug)] struct MenuGroupUpdate;
/// #[derive(Debug)] enum MenuGroupAction {}
/// #[derive(Debug)] struct CatalogError(String);
///
/// impl std::fmt::Display for CatalogError {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{}", self.0)
///     }
/// }
/// impl std::error::Error for CatalogError {}
/// impl From<String> for CatalogError {
///     fn from(s: String) -> Self { CatalogError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for MenuGroup {
///     type Id = u32;
///     type Create = MenuGroupCreate;
///     type Update = MenuGroupUpdate;
///     type Action = MenuGroupAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = CatalogError;
///
///     fn from_create_params(id: u32, p: MenuGroupCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, name: p.name })
///     }
///     async fn on_update(&mut self, _: MenuGroupUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: MenuGroupAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct MenuGroupClient {
///     inner: ResourceClient<MenuGroup>,
/// }
///
/// #[async_trait]
/// impl ActorClient<MenuGroup> for MenuGroupClient {
///     type Error = CatalogError;
///
///     fn inner(&self) -> &ResourceClient<MenuGroup> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         CatalogError(e.to_string())
///     }
/// }
///
/// async fn usage(client: MenuGroupClient) {
///     // get(), list() and delete() come for free
///     let _ = client.get(1).await;
///     let _ = client.list().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every stored entity, ordered by ID.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
