//! # Menu Group Actor
//!
//! Stores the categories menus are filed under.

pub mod entity;

use crate::model::MenuGroup;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new MenuGroup actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<MenuGroup>, ResourceClient<MenuGroup>) {
    ResourceActor::new(buffer_size)
}
