use crate::domain::PosError;
use crate::model::{OrderTable, OrderTableCreate, OrderTableId, OrderTableUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for OrderTable {
    type Id = OrderTableId;
    type Create = OrderTableCreate;
    type Update = OrderTableUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = PosError;

    fn from_create_params(id: OrderTableId, params: OrderTableCreate) -> Result<Self, Self::Error> {
        Ok(OrderTable::new(id, params.number_of_guests, params.empty))
    }

    async fn on_update(&mut self, update: OrderTableUpdate, _ctx: &()) -> Result<(), Self::Error> {
        self.number_of_guests = update.number_of_guests;
        self.empty = update.empty;
        self.table_group_id = update.table_group_id;
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TableGroupId;

    #[tokio::test]
    async fn test_update_replaces_state() {
        let mut table = OrderTable::new(OrderTableId(1), 0, true);

        table
            .on_update(
                OrderTableUpdate {
                    number_of_guests: 3,
                    empty: false,
                    table_group_id: Some(TableGroupId(2)),
                },
                &(),
            )
            .await
            .unwrap();

        assert_eq!(table.number_of_guests, 3);
        assert!(!table.empty);
        assert_eq!(table.table_group_id, Some(TableGroupId(2)));
    }
}
