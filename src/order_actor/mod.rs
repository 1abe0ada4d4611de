//! # Order Actor
//!
//! Stores orders placed against tables. The status of an order decides whether its
//! table can leave a group, so status changes go through [`OrderAction::ChangeStatus`].

pub mod entity;

use crate::model::{Order, OrderStatus};
use actor_framework::{ResourceActor, ResourceClient};

/// Custom operations on a stored order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Move the order to the given status. Replies with the status it had before.
    ChangeStatus(OrderStatus),
}

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
