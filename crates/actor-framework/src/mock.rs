//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of expectations instead of a running actor. Services that orchestrate several
//! resources (menu assembly, table grouping) can then be tested deterministically, including
//! failures that are awkward to provoke against a live store.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | Scripted replies | Subject to scheduler |
//! | **State** | None (expectations) | Real store |
//! | **Use Case** | Logic *around* the client | The actor itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Requires specific state |
//!
//! ## Testing Strategies
//!
//! <details>
//! <summary><b>Pattern 0: Client Logic Test (Pure Mock)</b></summary>
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::ActorEntity;
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Product { id: u32, name: String }
//! #[derive(Debug)] struct ProductCreate { name: String }
//! #[derive(Debug)] struct ProductUpdate;
//! #[derive(Debug)] enum ProductAction {}
//! #[derive(Debug, thiserror::Error)] #[error("product error")] struct ProductError;
//!
//! #[async_trait]
//! impl ActorEntity for Product {
//!     type Id = u32; type Create = ProductCreate; type Update = ProductUpdate;
//!     type Action = ProductAction; type ActionResult = (); type Context = (); type Error = ProductError;
//!     fn from_create_params(id: u32, p: ProductCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: p.name })
//!     }
//!     async fn on_update(&mut self, _: ProductUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: ProductAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut products = MockClient::<Product>::new();
//!     products.expect_get(1).return_ok(Some(Product { id: 1, name: "fried chicken".into() }));
//!
//!     let client = products.client();
//!     let product = client.get(1).await.unwrap().unwrap();
//!     assert_eq!(product.name, "fried chicken");
//!     products.verify();
//! }
//! ```
//! </details>
//!
//! <details>
//! <summary><b>Pattern 1: Single Actor Test</b></summary>
//!
//! Spawn `ResourceActor::<T>::new(n)` with `run(())` and talk to it through its client.
//! See `tests/integration_test.rs` of this crate.
//! </details>
//!
//! <details>
//! <summary><b>Pattern 2: Service with Mocked Dependencies</b></summary>
//!
//! Hand mock clients to a service and script the lookups it performs, then `verify()`
//! that nothing was left unused. The menu service tests in the application crate do this.
//! </details>
//!
//! <details>
//! <summary><b>Pattern 3: Full System Integration Test</b></summary>
//!
//! Start the whole system and drive it end to end. See the application crate's
//! `tests/integration_test.rs`.
//! </details>
//!
//! ## Testing Failure Scenarios
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct MenuGroup { id: u32 }
//! #[derive(Debug)] struct MenuGroupCreate;
//! #[derive(Debug)] struct MenuGroupUpdate;
//! #[derive(Debug)] enum MenuGroupAction {}
//! #[derive(Debug, thiserror::Error)] #[error("menu group error")] struct MenuGroupError;
//!
//! #[async_trait]
//! impl ActorEntity for MenuGroup {
//!     type Id = u32; type Create = MenuGroupCreate; type Update = MenuGroupUpdate;
//!     type Action = MenuGroupAction; type ActionResult = (); type Context = (); type Error = MenuGroupError;
//!     fn from_create_params(id: u32, _: MenuGroupCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: MenuGroupUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: MenuGroupAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<MenuGroup>::new();
//!     let client = mock.client();
//!
//!     // Simulate the store going away mid-request
//!     mock.expect_get(1).return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.get(1).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and the raw receiver, or the fluent
//! [`MockClient`] API.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the reply to give it.
///
/// Requests are matched in order by kind and, where the request carries one, by id.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn push<T: ActorEntity>(expectations: &Expectations<T>, expectation: Expectation<T>) {
    expectations
        .lock()
        .expect("mock expectations poisoned")
        .push_back(expectation);
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut tables = MockClient::<OrderTable>::new();
/// tables.expect_get(OrderTableId(1)).return_ok(Some(table));
/// tables.expect_update(OrderTableId(1)).return_ok(grouped_table);
///
/// let client = tables.client();
/// // exercise the service...
/// tables.verify();
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called inside a Tokio runtime. A request that does not match the next
    /// expectation (wrong kind or wrong id) panics the responder task, which the caller
    /// observes as `FrameworkError::ActorDropped`.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("mock expectations poisoned")
                    .pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "get requested an unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "update targeted an unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "delete targeted an unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "action targeted an unexpected id");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> UpdateExpectationBuilder<T> {
        UpdateExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: T::Id) -> DeleteExpectationBuilder<T> {
        DeleteExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .expect("mock expectations poisoned")
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        push(&self.expectations, Expectation::Get { id: self.id, response: Ok(value) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, Expectation::Get { id: self.id, response: Err(error) });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> ListExpectationBuilder<T> {
    pub fn return_ok(self, items: Vec<T>) {
        push(&self.expectations, Expectation::List { response: Ok(items) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, Expectation::List { response: Err(error) });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        push(&self.expectations, Expectation::Create { response: Ok(id) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, Expectation::Create { response: Err(error) });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> UpdateExpectationBuilder<T> {
    pub fn return_ok(self, updated: T) {
        push(&self.expectations, Expectation::Update { id: self.id, response: Ok(updated) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, Expectation::Update { id: self.id, response: Err(error) });
    }
}

/// Builder for `delete` expectations.
pub struct DeleteExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> DeleteExpectationBuilder<T> {
    pub fn return_ok(self) {
        push(&self.expectations, Expectation::Delete { id: self.id, response: Ok(()) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, Expectation::Delete { id: self.id, response: Err(error) });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        push(&self.expectations, Expectation::Action { id: self.id, response: Ok(result) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, Expectation::Action { id: self.id, response: Err(error) });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Tests read requests off the receiver with the `expect_*` helpers below, assert on
/// their payloads and answer through the returned responder. Useful when the payload
/// itself is what needs checking, e.g. the table state a service tries to persist.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T::Id, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Update,
    tokio::sync::oneshot::Sender<Result<T, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    tokio::sync::oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct DiningTable {
        id: u32,
        guests: u32,
        empty: bool,
    }

    #[derive(Debug)]
    struct DiningTableCreate {
        guests: u32,
    }

    #[derive(Debug)]
    struct DiningTableUpdate {
        empty: bool,
    }

    #[derive(Debug)]
    enum DiningTableAction {}

    #[derive(Debug, thiserror::Error)]
    #[error("dining table error")]
    struct DiningTableError;

    #[async_trait]
    impl ActorEntity for DiningTable {
        type Id = u32;
        type Create = DiningTableCreate;
        type Update = DiningTableUpdate;
        type Action = DiningTableAction;
        type ActionResult = ();
        type Context = ();
        type Error = DiningTableError;

        fn from_create_params(id: u32, params: DiningTableCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                guests: params.guests,
                empty: true,
            })
        }

        async fn on_update(
            &mut self,
            update: DiningTableUpdate,
            _ctx: &Self::Context,
        ) -> Result<(), Self::Error> {
            self.empty = update.empty;
            Ok(())
        }

        async fn handle_action(
            &mut self,
            _action: DiningTableAction,
            _ctx: &Self::Context,
        ) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_raw_mock_client_create() {
        let (client, mut receiver) = create_mock_client::<DiningTable>(10);

        let create_task =
            tokio::spawn(async move { client.create(DiningTableCreate { guests: 4 }).await });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.guests, 4);
        responder.send(Ok(1)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(1)));
    }

    #[tokio::test]
    async fn test_raw_mock_client_update_payload() {
        let (client, mut receiver) = create_mock_client::<DiningTable>(10);

        let update_task = tokio::spawn(async move {
            client.update(7, DiningTableUpdate { empty: false }).await
        });

        let (id, update, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, 7);
        assert!(!update.empty);
        responder
            .send(Ok(DiningTable { id: 7, guests: 2, empty: false }))
            .unwrap();

        let updated = update_task.await.unwrap().unwrap();
        assert!(!updated.empty);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<DiningTable>::new();

        mock.expect_create().return_ok(1);
        mock.expect_get(1)
            .return_ok(Some(DiningTable { id: 1, guests: 4, empty: true }));
        mock.expect_list()
            .return_ok(vec![DiningTable { id: 1, guests: 4, empty: true }]);

        let client = mock.client();

        let id = client.create(DiningTableCreate { guests: 4 }).await.unwrap();
        assert_eq!(id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().guests, 4);

        let all = client.list().await.unwrap();
        assert_eq!(all.len(), 1);

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_wrong_id_surfaces_as_dropped() {
        let mut mock = MockClient::<DiningTable>::new();
        mock.expect_get(7)
            .return_ok(Some(DiningTable { id: 7, guests: 2, empty: true }));
        let client = mock.client();

        let result = client.get(1).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }

    #[tokio::test]
    async fn test_mock_client_wrong_update_target_surfaces_as_dropped() {
        let mut mock = MockClient::<DiningTable>::new();
        mock.expect_update(3)
            .return_ok(DiningTable { id: 3, guests: 2, empty: false });
        let client = mock.client();

        let result = client.update(4, DiningTableUpdate { empty: false }).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }

    #[tokio::test]
    async fn test_mock_client_delete_expectation() {
        let mut mock = MockClient::<DiningTable>::new();
        mock.expect_delete(2).return_ok();
        mock.expect_delete(5).return_err(FrameworkError::NotFound("5".to_string()));
        let client = mock.client();

        client.delete(2).await.unwrap();
        let missing = client.delete(5).await;
        assert!(matches!(missing, Err(FrameworkError::NotFound(id)) if id == "5"));
        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_unexpected_request_surfaces_as_dropped() {
        let mock = MockClient::<DiningTable>::new();
        let client = mock.client();

        let result = client.get(1).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
