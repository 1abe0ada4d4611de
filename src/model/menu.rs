use crate::model::{MenuGroupId, MenuId, MenuLineId, Price, ProductId};
use serde::{Deserialize, Serialize};

/// A named, priced bundle of product lines sold as a unit.
///
/// The menu owns its lines. Before it is stored, neither the menu nor its lines carry
/// an identity; the menu actor assigns `id`, each line's `seq` and each line's
/// `menu_id` when the menu is persisted.
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](actor_framework::ResourceActor); the create payload
/// is an unsaved `Menu` as produced by
/// [`assemble`](crate::domain::menu_composition::assemble).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: Option<MenuId>,
    pub name: String,
    pub price: Price,
    pub menu_group_id: MenuGroupId,
    pub lines: Vec<MenuLine>,
}

impl Menu {
    pub fn product_ids(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.lines.iter().map(|line| line.product_id)
    }
}

/// One (product, quantity) entry of a menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuLine {
    pub seq: Option<MenuLineId>,
    pub menu_id: Option<MenuId>,
    pub product_id: ProductId,
    pub quantity: u64,
}

impl MenuLine {
    /// A line that has not been stored yet.
    pub fn unsaved(product_id: ProductId, quantity: u64) -> Self {
        Self {
            seq: None,
            menu_id: None,
            product_id,
            quantity,
        }
    }
}

/// Request to create a menu: the raw ids still have to be resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCreateRequest {
    pub name: String,
    pub price: Price,
    pub menu_group_id: MenuGroupId,
    pub lines: Vec<MenuLineRequest>,
}

/// A requested (product, quantity) line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MenuLineRequest {
    pub product_id: ProductId,
    pub quantity: u64,
}
