//! # Product Actor
//!
//! Stores the products menus are composed from. Products are created and read, never
//! updated.

pub mod entity;

use crate::model::Product;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}
