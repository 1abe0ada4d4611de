use crate::model::{OrderTableId, TableGroupId};
use serde::{Deserialize, Serialize};

/// A physical dining table tracked for occupancy and grouping.
///
/// `table_group_id` is `None` while the table stands alone. Grouping, ungrouping and
/// order placement change it; see [`crate::domain::table_group_lifecycle`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTable {
    pub id: OrderTableId,
    pub number_of_guests: u32,
    pub empty: bool,
    pub table_group_id: Option<TableGroupId>,
}

impl OrderTable {
    /// A table that does not belong to any group.
    pub fn new(id: OrderTableId, number_of_guests: u32, empty: bool) -> Self {
        Self {
            id,
            number_of_guests,
            empty,
            table_group_id: None,
        }
    }

    pub fn is_grouped(&self) -> bool {
        self.table_group_id.is_some()
    }
}

/// Payload for registering a dining table.
#[derive(Debug, Clone)]
pub struct OrderTableCreate {
    pub number_of_guests: u32,
    pub empty: bool,
}

/// Full replacement of a table's mutable state.
///
/// Services compute the next state of a table in the domain layer and store it verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTableUpdate {
    pub number_of_guests: u32,
    pub empty: bool,
    pub table_group_id: Option<TableGroupId>,
}

impl From<&OrderTable> for OrderTableUpdate {
    fn from(table: &OrderTable) -> Self {
        Self {
            number_of_guests: table.number_of_guests,
            empty: table.empty,
            table_group_id: table.table_group_id,
        }
    }
}
