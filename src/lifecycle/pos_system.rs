use crate::clients::{
    MenuClient, MenuGroupClient, OrderClient, OrderTableClient, ProductClient, TableGroupClient,
};
use crate::domain::{Clock, PosError, SystemClock};
use crate::lifecycle::PosConfig;
use crate::menu_actor::LineSequence;
use crate::services::{MenuService, TableGroupService};
use std::sync::Arc;
use tracing::{error, info};

/// The running point-of-sale core: one actor per resource kind, the clients that talk to
/// them and the services built on top.
///
/// # Architecture
///
/// - **Catalog**: products, menu groups and menus. Menus are written through
///   [`MenuService`], which checks that everything they reference exists.
/// - **Floor**: dining tables, table groups and orders. Groups are formed and dissolved
///   through [`TableGroupService`].
///
/// The clients are public so callers can register products, tables and orders directly.
///
/// # Example
///
/// ```rust
/// use kitchen_pos::lifecycle::PosSystem;
/// use kitchen_pos::model::OrderTableCreate;
///
/// #[tokio::main]
/// async fn main() -> Result<(), kitchen_pos::domain::PosError> {
///     let system = PosSystem::new();
///     let first = system
///         .order_table_client
///         .create_table(OrderTableCreate { number_of_guests: 0, empty: true })
///         .await?;
///     let second = system
///         .order_table_client
///         .create_table(OrderTableCreate { number_of_guests: 0, empty: true })
///         .await?;
///
///     let group = system.table_group_service.create(&[first, second]).await?;
///     assert_eq!(group.table_ids(), &[first, second]);
///
///     system.shutdown().await
/// }
/// ```
pub struct PosSystem {
    pub product_client: ProductClient,
    pub menu_group_client: MenuGroupClient,
    pub menu_client: MenuClient,
    pub order_table_client: OrderTableClient,
    pub table_group_client: TableGroupClient,
    pub order_client: OrderClient,

    pub menu_service: MenuService,
    pub table_group_service: TableGroupService,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for PosSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl PosSystem {
    /// Starts the system with default settings and the wall clock.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(PosConfig::default(), Arc::new(SystemClock))
    }

    /// Starts the system with explicit settings and clock.
    pub fn with_config(config: PosConfig, clock: Arc<dyn Clock>) -> Self {
        let capacity = config.channel_capacity;

        // 1. Create actors
        let (product_actor, products) = crate::product_actor::new(capacity);
        let (menu_group_actor, menu_groups) = crate::menu_group_actor::new(capacity);
        let (menu_actor, menus) = crate::menu_actor::new(capacity);
        let (order_table_actor, order_tables) = crate::order_table_actor::new(capacity);
        let (table_group_actor, table_groups) = crate::table_group_actor::new(capacity);
        let (order_actor, orders) = crate::order_actor::new(capacity);

        // 2. Start actors; only menus need a context
        let handles = vec![
            tokio::spawn(product_actor.run(())),
            tokio::spawn(menu_group_actor.run(())),
            tokio::spawn(menu_actor.run(LineSequence::default())),
            tokio::spawn(order_table_actor.run(())),
            tokio::spawn(table_group_actor.run(())),
            tokio::spawn(order_actor.run(())),
        ];

        // 3. Wrap clients and wire services
        let product_client = ProductClient::new(products);
        let menu_group_client = MenuGroupClient::new(menu_groups);
        let menu_client = MenuClient::new(menus);
        let order_table_client = OrderTableClient::new(order_tables);
        let table_group_client = TableGroupClient::new(table_groups);
        let order_client = OrderClient::new(orders, clock.clone());

        let menu_service = MenuService::new(
            product_client.clone(),
            menu_group_client.clone(),
            menu_client.clone(),
        );
        let table_group_service = TableGroupService::new(
            order_table_client.clone(),
            table_group_client.clone(),
            order_client.clone(),
            clock,
        );

        info!(capacity, actors = handles.len(), "Point of sale started");

        Self {
            product_client,
            menu_group_client,
            menu_client,
            order_table_client,
            table_group_client,
            order_client,
            menu_service,
            table_group_service,
            handles,
        }
    }

    /// Gracefully shuts down every actor.
    ///
    /// Dropping the clients (including the clones held by the services) closes the
    /// channels; each actor then drains its queue and exits. Fails if an actor task
    /// panicked. Clones of a client handed out earlier keep their actor alive, so drop
    /// them before calling this.
    pub async fn shutdown(self) -> Result<(), PosError> {
        info!("Shutting down point of sale...");

        let PosSystem {
            product_client,
            menu_group_client,
            menu_client,
            order_table_client,
            table_group_client,
            order_client,
            menu_service,
            table_group_service,
            handles,
        } = self;

        drop(menu_service);
        drop(table_group_service);
        drop(product_client);
        drop(menu_group_client);
        drop(menu_client);
        drop(order_table_client);
        drop(table_group_client);
        drop(order_client);

        for handle in handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(PosError::Unavailable(format!("Actor task failed: {e}")));
            }
        }

        info!("Point of sale shutdown complete.");
        Ok(())
    }
}
