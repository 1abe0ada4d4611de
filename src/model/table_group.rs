use crate::model::{OrderTableId, TableGroupId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Tables joined to be served as one unit.
///
/// The group owns the membership relation as a list of table ids; tables point back
/// only through their `table_group_id`. `created_at` is stamped once when the group is
/// formed and never changes.
///
/// Construct through [`TableGroup::form`], which enforces the grouping rules. Groups are
/// serialized for output but never deserialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableGroup {
    pub id: Option<TableGroupId>,
    created_at: DateTime<Utc>,
    table_ids: Vec<OrderTableId>,
}

impl TableGroup {
    pub(crate) fn new_unchecked(created_at: DateTime<Utc>, table_ids: Vec<OrderTableId>) -> Self {
        Self {
            id: None,
            created_at,
            table_ids,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Member tables, in the order they were supplied when the group was formed.
    pub fn table_ids(&self) -> &[OrderTableId] {
        &self.table_ids
    }

    pub fn contains(&self, table_id: OrderTableId) -> bool {
        self.table_ids.contains(&table_id)
    }

    /// Drops every member. Called once the member tables have been detached.
    pub(crate) fn clear_members(&mut self) {
        self.table_ids.clear();
    }
}
