use crate::model::MenuGroupId;
use serde::{Deserialize, Serialize};

/// A category of menus ("Chicken", "Sides"). Every menu belongs to exactly one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuGroup {
    pub id: MenuGroupId,
    pub name: String,
}

impl MenuGroup {
    pub fn new(id: MenuGroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Payload for creating a menu group.
#[derive(Debug, Clone)]
pub struct MenuGroupCreate {
    pub name: String,
}
