//! # Menu Composition
//!
//! Turns a [`MenuCreateRequest`] into an unsaved [`Menu`] once every reference in it
//! resolves. The menu group is resolved first; a missing group fails the request before
//! any product is looked up. Products are then resolved in line order and the first
//! missing one fails the whole request.
//!
//! The assembled menu and its lines carry no ids. Those are assigned when the menu is
//! stored.

use crate::domain::error::{EntityKind, PosError};
use crate::model::{Menu, MenuCreateRequest, MenuGroup, MenuGroupId, MenuLine, Product, ProductId};
use async_trait::async_trait;

/// Find-by-id lookups menu composition depends on.
///
/// `Ok(None)` means the entity does not exist; `Err` means the lookup itself failed.
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    async fn find_menu_group(&self, id: MenuGroupId) -> Result<Option<MenuGroup>, PosError>;

    async fn find_product(&self, id: ProductId) -> Result<Option<Product>, PosError>;
}

/// Validates every reference of `request` and assembles the menu.
pub async fn assemble<C>(catalog: &C, request: MenuCreateRequest) -> Result<Menu, PosError>
where
    C: CatalogLookup + ?Sized,
{
    let group = catalog
        .find_menu_group(request.menu_group_id)
        .await?
        .ok_or_else(|| PosError::not_found(EntityKind::MenuGroup, request.menu_group_id))?;

    let mut lines = Vec::with_capacity(request.lines.len());
    for line in &request.lines {
        let product = catalog
            .find_product(line.product_id)
            .await?
            .ok_or_else(|| PosError::not_found(EntityKind::Product, line.product_id))?;
        lines.push(MenuLine::unsaved(product.id, line.quantity));
    }

    Ok(Menu {
        id: None,
        name: request.name,
        price: request.price,
        menu_group_id: group.id,
        lines,
    })
}
