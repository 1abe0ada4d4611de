use actor_framework::tracing::setup_tracing;
use kitchen_pos::domain::{PosError, SystemClock};
use kitchen_pos::lifecycle::{PosConfig, PosSystem};
use kitchen_pos::model::{
    MenuCreateRequest, MenuGroupCreate, MenuLineRequest, OrderStatus, OrderTableCreate, Price,
    ProductCreate,
};
use std::sync::Arc;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), PosError> {
    setup_tracing();

    info!("Starting point of sale demo");
    let system = PosSystem::with_config(PosConfig::from_env(), Arc::new(SystemClock));

    // Catalog
    let menu = async {
        let fried = system
            .product_client
            .create_product(ProductCreate {
                name: "Fried chicken".to_string(),
                price: Price(16_000),
            })
            .await?;
        let seasoned = system
            .product_client
            .create_product(ProductCreate {
                name: "Seasoned chicken".to_string(),
                price: Price(16_000),
            })
            .await?;
        let group = system
            .menu_group_client
            .create_menu_group(MenuGroupCreate {
                name: "Two chickens".to_string(),
            })
            .await?;

        system
            .menu_service
            .create(MenuCreateRequest {
                name: "Fried + Seasoned".to_string(),
                price: Price(30_000),
                menu_group_id: group,
                lines: vec![
                    MenuLineRequest {
                        product_id: fried,
                        quantity: 1,
                    },
                    MenuLineRequest {
                        product_id: seasoned,
                        quantity: 1,
                    },
                ],
            })
            .await
    }
    .instrument(tracing::info_span!("catalog"))
    .await?;
    info!(name = %menu.name, price = %menu.price, lines = menu.lines.len(), "Menu ready");

    // Floor
    async {
        let mut table_ids = Vec::new();
        for _ in 0..2 {
            let id = system
                .order_table_client
                .create_table(OrderTableCreate {
                    number_of_guests: 0,
                    empty: true,
                })
                .await?;
            table_ids.push(id);
        }

        let group = system.table_group_service.create(&table_ids).await?;
        let group_id = group
            .id
            .ok_or_else(|| PosError::Unavailable("group stored without id".to_string()))?;
        info!(%group_id, created_at = %group.created_at(), "Tables grouped");

        let order = system.order_client.place_order(table_ids[0]).await?;
        if let Err(e) = system.table_group_service.ungroup(group_id).await {
            warn!(error = %e, "Ungroup refused while the kitchen is busy");
        }

        system
            .order_client
            .change_status(order, OrderStatus::Completion)
            .await?;
        let released = system.table_group_service.ungroup(group_id).await?;
        info!(tables = released.len(), "Tables released");
        Ok::<(), PosError>(())
    }
    .instrument(tracing::info_span!("floor"))
    .await?;

    system.shutdown().await
}
