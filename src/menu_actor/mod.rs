//! # Menu Actor
//!
//! Stores assembled menus together with their lines.
//!
//! ## Line identities
//!
//! A menu line has no identity of its own until its menu is stored. The actor's context
//! is a [`LineSequence`] shared by every menu, so line ids are unique across menus and
//! are handed out in line order:
//!
//! ```rust
//! use kitchen_pos::menu_actor::{self, LineSequence};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = menu_actor::new(8);
//!     tokio::spawn(actor.run(LineSequence::default()));
//!     # drop(client);
//! }
//! ```

pub mod entity;

use crate::model::{Menu, MenuLineId};
use actor_framework::{ResourceActor, ResourceClient};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Counter for [`MenuLineId`]s, starting at 1.
#[derive(Debug, Clone, Default)]
pub struct LineSequence(Arc<AtomicU32>);

impl LineSequence {
    pub fn next(&self) -> MenuLineId {
        MenuLineId(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

/// Creates a new Menu actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Menu>, ResourceClient<Menu>) {
    ResourceActor::new(buffer_size)
}
