//! # Order Client
//!
//! Places orders, moves them through the kitchen and answers the question the grouping
//! rules ask: which orders belong to which table.
use crate::clients::into_pos_error;
use crate::domain::{Clock, EntityKind, PosError};
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderTableId};
use crate::order_actor::OrderAction;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// New orders are stamped with the time of the injected [`Clock`].
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    clock: Arc<dyn Clock>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, clock: Arc<dyn Clock>) -> Self {
        Self { inner, clock }
    }

    /// Places a new order against `order_table_id`. Orders start out cooking.
    #[instrument(skip(self))]
    pub async fn place_order(&self, order_table_id: OrderTableId) -> Result<OrderId, PosError> {
        let params = OrderCreate {
            order_table_id,
            ordered_at: self.clock.now(),
        };
        info!("Sending place_order to actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Moves an order to `status` and returns the status it had before.
    #[instrument(skip(self))]
    pub async fn change_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<OrderStatus, PosError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::ChangeStatus(status))
            .await
            .map_err(Self::map_error)
    }

    /// Orders placed against a single table.
    pub async fn orders_for_table(&self, table_id: OrderTableId) -> Result<Vec<Order>, PosError> {
        let mut by_table = self.orders_by_table(&[table_id]).await?;
        Ok(by_table.remove(&table_id).unwrap_or_default())
    }

    /// Orders of each of `table_ids`, keyed by table. Tables without orders map to an
    /// empty list.
    #[instrument(skip(self))]
    pub async fn orders_by_table(
        &self,
        table_ids: &[OrderTableId],
    ) -> Result<HashMap<OrderTableId, Vec<Order>>, PosError> {
        let mut by_table: HashMap<OrderTableId, Vec<Order>> =
            table_ids.iter().map(|&id| (id, Vec::new())).collect();
        for order in self.list().await? {
            if let Some(orders) = by_table.get_mut(&order.order_table_id) {
                orders.push(order);
            }
        }
        debug!(tables = by_table.len(), "Collected orders");
        Ok(by_table)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = PosError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        into_pos_error(EntityKind::Order, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FixedClock;
    use actor_framework::mock::{create_mock_client, expect_action, expect_create, MockClient};
    use chrono::{DateTime, TimeZone, Utc};

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock(noon()))
    }

    fn order(id: u32, table: u32, status: OrderStatus) -> Order {
        Order {
            status,
            ..Order::new(OrderId(id), OrderTableId(table), noon())
        }
    }

    #[tokio::test]
    async fn test_place_order_stamps_clock_time() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let orders = OrderClient::new(client, clock());

        let place_task = tokio::spawn(async move { orders.place_order(OrderTableId(3)).await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.order_table_id, OrderTableId(3));
        assert_eq!(params.ordered_at, noon());
        responder.send(Ok(OrderId(1))).unwrap();

        assert_eq!(place_task.await.unwrap().unwrap(), OrderId(1));
    }

    #[tokio::test]
    async fn test_change_status_sends_action() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let orders = OrderClient::new(client, clock());

        let change_task = tokio::spawn(async move {
            orders
                .change_status(OrderId(4), OrderStatus::Completion)
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, OrderId(4));
        assert_eq!(action, OrderAction::ChangeStatus(OrderStatus::Completion));
        responder.send(Ok(OrderStatus::Meal)).unwrap();

        assert_eq!(change_task.await.unwrap().unwrap(), OrderStatus::Meal);
    }

    #[tokio::test]
    async fn test_orders_by_table_groups_and_keeps_empty_tables() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_list().return_ok(vec![
            order(1, 1, OrderStatus::Cooking),
            order(2, 2, OrderStatus::Completion),
            order(3, 1, OrderStatus::Meal),
            order(4, 9, OrderStatus::Cooking),
        ]);
        let orders = OrderClient::new(mock.client(), clock());

        let by_table = orders
            .orders_by_table(&[OrderTableId(1), OrderTableId(3)])
            .await
            .unwrap();

        assert_eq!(by_table.len(), 2);
        let first: Vec<OrderId> = by_table[&OrderTableId(1)].iter().map(|o| o.id).collect();
        assert_eq!(first, vec![OrderId(1), OrderId(3)]);
        assert!(by_table[&OrderTableId(3)].is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn test_change_status_of_unknown_order_is_not_found() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_action(OrderId(8))
            .return_err(FrameworkError::NotFound(OrderId(8).to_string()));
        let orders = OrderClient::new(mock.client(), clock());

        let err = orders
            .change_status(OrderId(8), OrderStatus::Meal)
            .await
            .unwrap_err();

        assert_eq!(err, PosError::not_found(EntityKind::Order, OrderId(8)));
    }
}
