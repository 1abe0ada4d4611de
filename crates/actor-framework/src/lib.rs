//! # Actor Framework
//!
//! Building blocks for keeping each kind of restaurant resource (products, menu groups,
//! menus, dining tables, table groups, orders) in its own actor. Every resource kind
//! speaks the same CRUD + Action vocabulary, so the store behind a menu and the store
//! behind a dining table are the same generic [`ResourceActor`].
//!
//! ## Why Resource Actors?
//!
//! - **Isolation**: an actor owns its entities; nothing else can mutate them.
//! - **Sequential writes**: one request at a time per resource kind, no locks.
//! - **Uniform surface**: create, get, list, update, delete and custom actions look the
//!   same for every resource.
//!
//! **Further Reading**:
//! - [Actors with Tokio](https://ryhl.io/blog/actors-with-tokio/)
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - what is stored and how it reacts to hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - message loop and id assignment
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed requests
//!
//! ## Quick Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct MenuGroup {
//!     id: u32,
//!     name: String,
//! }
//!
//! #[derive(Debug)] struct MenuGroupCreate { name: String }
//! #[derive(Debug)] struct MenuGroupUpdate { name: Option<String> }
//! #[derive(Debug)] enum MenuGroupAction {}
//! #[derive(Debug)] struct MenuGroupError(String);
//!
//! impl std::fmt::Display for MenuGroupError {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
//! }
//! impl std::error::Error for MenuGroupError {}
//!
//! #[async_trait]
//! impl ActorEntity for MenuGroup {
//!     type Id = u32;
//!     type Create = MenuGroupCreate;
//!     type Update = MenuGroupUpdate;
//!     type Action = MenuGroupAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = MenuGroupError;
//!
//!     fn from_create_params(id: u32, params: MenuGroupCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: params.name })
//!     }
//!
//!     async fn on_update(&mut self, update: MenuGroupUpdate, _ctx: &Self::Context) -> Result<(), Self::Error> {
//!         if let Some(name) = update.name { self.name = name; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, _: MenuGroupAction, _: &Self::Context) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<MenuGroup>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(MenuGroupCreate { name: "Chicken".into() }).await.unwrap();
//!     let group = client.get(id).await.unwrap().unwrap();
//!     assert_eq!(group.name, "Chicken");
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are handed to `run(context)`, not to `new()`. A menu actor that stamps
//! line ids from a shared sequence receives that sequence as its context; actors with no
//! dependencies run with `()`.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from scripted expectations so services can be
//! tested without spawning actors. See the [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
