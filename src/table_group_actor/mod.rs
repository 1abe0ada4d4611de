//! # Table Group Actor
//!
//! Stores formed table groups. A group is created from the value returned by
//! [`TableGroup::form`](crate::model::TableGroup::form), so everything in the store has
//! passed the grouping rules. The only change a stored group sees is
//! [`TableGroupAction::Dissolve`].

pub mod entity;

use crate::model::TableGroup;
use actor_framework::{ResourceActor, ResourceClient};

/// Custom operations on a stored table group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableGroupAction {
    /// Forget every member table. The tables themselves are detached separately.
    Dissolve,
}

/// Creates a new TableGroup actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<TableGroup>, ResourceClient<TableGroup>) {
    ResourceActor::new(buffer_size)
}
