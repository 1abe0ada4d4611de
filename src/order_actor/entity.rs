use crate::domain::PosError;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus};
use crate::order_actor::OrderAction;
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = OrderStatus;
    type Context = ();
    type Error = PosError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Order::new(id, params.order_table_id, params.ordered_at))
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &(),
    ) -> Result<OrderStatus, Self::Error> {
        match action {
            OrderAction::ChangeStatus(status) => Ok(std::mem::replace(&mut self.status, status)),
        }
    }
}
