use crate::domain::PosError;
use crate::model::{TableGroup, TableGroupId};
use crate::table_group_actor::TableGroupAction;
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for TableGroup {
    type Id = TableGroupId;
    type Create = TableGroup;
    type Update = ();
    type Action = TableGroupAction;
    type ActionResult = ();
    type Context = ();
    type Error = PosError;

    fn from_create_params(id: TableGroupId, mut params: TableGroup) -> Result<Self, Self::Error> {
        params.id = Some(id);
        Ok(params)
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: TableGroupAction,
        _ctx: &(),
    ) -> Result<(), Self::Error> {
        match action {
            TableGroupAction::Dissolve => self.clear_members(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FixedClock;
    use crate::model::{OrderTable, OrderTableId};
    use chrono::Utc;

    #[tokio::test]
    async fn test_dissolve_clears_members_and_keeps_timestamp() {
        let tables = [
            OrderTable::new(OrderTableId(1), 0, true),
            OrderTable::new(OrderTableId(2), 0, true),
        ];
        let clock = FixedClock(Utc::now());
        let formed = TableGroup::form(&tables, &clock).unwrap();
        let mut group = TableGroup::from_create_params(TableGroupId(1), formed).unwrap();

        group
            .handle_action(TableGroupAction::Dissolve, &())
            .await
            .unwrap();

        assert_eq!(group.id, Some(TableGroupId(1)));
        assert!(group.table_ids().is_empty());
        assert_eq!(group.created_at(), clock.0);
    }
}
