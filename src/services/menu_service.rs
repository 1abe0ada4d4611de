//! # Menu Service
//!
//! Creates and lists menus. Creation resolves the menu group and every product through
//! the catalog clients, assembles the menu with
//! [`assemble`](crate::domain::menu_composition::assemble) and stores it.

use crate::clients::{MenuClient, MenuGroupClient, ProductClient};
use crate::domain::{assemble, CatalogLookup, PosError};
use crate::model::{Menu, MenuCreateRequest, MenuGroup, MenuGroupId, Product, ProductId};
use actor_framework::ActorClient;
use async_trait::async_trait;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct MenuService {
    products: ProductClient,
    menu_groups: MenuGroupClient,
    menus: MenuClient,
}

impl MenuService {
    pub fn new(products: ProductClient, menu_groups: MenuGroupClient, menus: MenuClient) -> Self {
        Self {
            products,
            menu_groups,
            menus,
        }
    }

    /// Assembles and stores a menu, returning it as stored (ids assigned).
    ///
    /// Nothing is stored when a referenced menu group or product is missing.
    #[instrument(skip(self, request), fields(name = %request.name, group = %request.menu_group_id))]
    pub async fn create(&self, request: MenuCreateRequest) -> Result<Menu, PosError> {
        let menu = assemble(self, request)
            .await
            .inspect_err(|e| warn!(error = %e, "Menu rejected"))?;

        let id = self.menus.create_menu(menu).await?;
        info!(%id, "Menu created");
        self.menus.require_menu(id).await
    }

    /// Every stored menu, oldest first.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Menu>, PosError> {
        self.menus.list().await
    }
}

#[async_trait]
impl CatalogLookup for MenuService {
    async fn find_menu_group(&self, id: MenuGroupId) -> Result<Option<MenuGroup>, PosError> {
        self.menu_groups.get(id).await
    }

    async fn find_product(&self, id: ProductId) -> Result<Option<Product>, PosError> {
        self.products.get(id).await
    }
}
