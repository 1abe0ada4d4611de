//! # Order Table Actor
//!
//! Stores dining tables. Updates replace the whole mutable state of a table
//! ([`OrderTableUpdate`](crate::model::OrderTableUpdate)); the next state is always
//! computed by the domain layer before it gets here.

pub mod entity;

use crate::model::OrderTable;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new OrderTable actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<OrderTable>, ResourceClient<OrderTable>) {
    ResourceActor::new(buffer_size)
}
