//! # Table Group Service
//!
//! Groups dining tables and dissolves groups.
//!
//! Both operations load everything they need first, run the rule in
//! [`table_group_lifecycle`](crate::domain::table_group_lifecycle) and only write once
//! the rule has passed. A rejected request leaves every table and group as it was.
//!
//! Requests touching the same tables are not serialized against each other.

use crate::clients::{OrderClient, OrderTableClient, TableGroupClient};
use crate::domain::{Clock, PosError};
use crate::model::{OrderTable, OrderTableId, TableGroup, TableGroupId};
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct TableGroupService {
    tables: OrderTableClient,
    groups: TableGroupClient,
    orders: OrderClient,
    clock: Arc<dyn Clock>,
}

impl TableGroupService {
    pub fn new(
        tables: OrderTableClient,
        groups: TableGroupClient,
        orders: OrderClient,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            tables,
            groups,
            orders,
            clock,
        }
    }

    /// Groups the given tables.
    ///
    /// Ids are resolved in the given order and the first unknown one fails the request.
    /// On success every member is stored as occupied and linked to the new group.
    #[instrument(skip(self))]
    pub async fn create(&self, table_ids: &[OrderTableId]) -> Result<TableGroup, PosError> {
        let mut tables = Vec::with_capacity(table_ids.len());
        for &id in table_ids {
            tables.push(self.tables.require_table(id).await?);
        }

        let group = TableGroup::form(&tables, self.clock.as_ref())
            .inspect_err(|e| warn!(error = %e, "Grouping rejected"))?;

        let group_id = self.groups.create_table_group(group).await?;
        for table in &tables {
            self.tables.save_table(&table.join_group(group_id)).await?;
        }
        info!(%group_id, "Table group formed");

        self.groups.require_table_group(group_id).await
    }

    /// Dissolves a group once every order on its tables is completed.
    ///
    /// Returns the detached tables as stored. A group that was already dissolved has no
    /// members left, so dissolving it again succeeds with no tables.
    #[instrument(skip(self))]
    pub async fn ungroup(&self, group_id: TableGroupId) -> Result<Vec<OrderTable>, PosError> {
        let group = self.groups.require_table_group(group_id).await?;

        let mut members = Vec::with_capacity(group.table_ids().len());
        for &id in group.table_ids() {
            members.push(self.tables.require_table(id).await?);
        }
        let orders = self.orders.orders_by_table(group.table_ids()).await?;

        let detached = group
            .ungroup(&members, &orders)
            .inspect_err(|e| warn!(error = %e, "Ungrouping rejected"))?;

        let mut saved = Vec::with_capacity(detached.len());
        for table in &detached {
            saved.push(self.tables.save_table(table).await?);
        }
        self.groups.dissolve(group_id).await?;
        info!(%group_id, tables = saved.len(), "Table group dissolved");

        Ok(saved)
    }
}
