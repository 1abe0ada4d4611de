//! # Table Group Lifecycle
//!
//! A table moves between two states:
//!
//! ```text
//! UNGROUPED --form--> GROUPED --ungroup--> UNGROUPED
//! ```
//!
//! [`TableGroup::form`] checks a candidate table set against an ordered rule chain and
//! stops at the first rule that fails. [`TableGroup::ungroup`] refuses while any member
//! table still has an order that is not completed. Both are all-or-nothing: either every
//! table transitions or none does.
//!
//! Neither function touches storage. Callers persist the returned group and table states.

use crate::domain::clock::Clock;
use crate::domain::error::{GroupingViolation, PosError, UngroupViolation};
use crate::model::{Order, OrderTable, OrderTableId, TableGroup, TableGroupId};
use std::collections::{HashMap, HashSet};

/// A predicate that holds when the candidate set breaks the rule, paired with the
/// violation to report.
type GroupingRule = (fn(&[OrderTable]) -> bool, GroupingViolation);

const GROUPING_RULES: [GroupingRule; 4] = [
    (too_few_tables, GroupingViolation::TooFewTables),
    (has_duplicate_table, GroupingViolation::DuplicateTable),
    (has_grouped_table, GroupingViolation::AlreadyGrouped),
    (has_occupied_table, GroupingViolation::NonEmptyTable),
];

fn too_few_tables(tables: &[OrderTable]) -> bool {
    tables.len() < 2
}

fn has_duplicate_table(tables: &[OrderTable]) -> bool {
    let mut seen = HashSet::with_capacity(tables.len());
    tables.iter().any(|table| !seen.insert(table.id))
}

fn has_grouped_table(tables: &[OrderTable]) -> bool {
    tables.iter().any(OrderTable::is_grouped)
}

fn has_occupied_table(tables: &[OrderTable]) -> bool {
    tables.iter().any(|table| !table.empty)
}

impl TableGroup {
    /// Forms a group from `tables`, stamped with `clock.now()`.
    ///
    /// Members keep the order they were given in. The returned group has no id yet, and
    /// the tables themselves are not modified; see [`OrderTable::join_group`].
    pub fn form(tables: &[OrderTable], clock: &dyn Clock) -> Result<TableGroup, PosError> {
        if let Some((_, violation)) = GROUPING_RULES.iter().find(|(broken, _)| broken(tables)) {
            return Err(PosError::InvalidGrouping(*violation));
        }

        let table_ids = tables.iter().map(|table| table.id).collect();
        Ok(TableGroup::new_unchecked(clock.now(), table_ids))
    }

    /// Computes the state of each member table after the group is dissolved.
    ///
    /// Every order list in `orders_by_table` is inspected, so a caller may pass more
    /// than the members' orders. Any order that is not completed aborts the whole call.
    ///
    /// Detached tables keep their guest count and stay marked as occupied.
    pub fn ungroup(
        &self,
        tables: &[OrderTable],
        orders_by_table: &HashMap<OrderTableId, Vec<Order>>,
    ) -> Result<Vec<OrderTable>, PosError> {
        let in_progress = orders_by_table
            .values()
            .flatten()
            .any(|order| !order.status.is_completed());
        if in_progress {
            return Err(UngroupViolation::OrdersInProgress.into());
        }

        Ok(tables
            .iter()
            .map(|table| OrderTable {
                table_group_id: None,
                empty: false,
                ..table.clone()
            })
            .collect())
    }
}

impl OrderTable {
    /// The state of this table once it has joined `group_id`: linked and occupied.
    pub fn join_group(&self, group_id: TableGroupId) -> OrderTable {
        OrderTable {
            table_group_id: Some(group_id),
            empty: false,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::FixedClock;
    use crate::model::{OrderId, OrderStatus};
    use chrono::{DateTime, TimeZone, Utc};

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn clock() -> FixedClock {
        FixedClock(noon())
    }

    fn empty_table(id: u32) -> OrderTable {
        OrderTable::new(OrderTableId(id), 0, true)
    }

    fn order(id: u32, table: u32, status: OrderStatus) -> Order {
        Order {
            status,
            ..Order::new(OrderId(id), OrderTableId(table), noon())
        }
    }

    fn grouped_pair() -> (TableGroup, Vec<OrderTable>) {
        let tables = vec![empty_table(1), empty_table(2)];
        let mut group = TableGroup::form(&tables, &clock()).unwrap();
        group.id = Some(TableGroupId(1));
        let members = tables
            .iter()
            .map(|table| table.join_group(TableGroupId(1)))
            .collect();
        (group, members)
    }

    #[test]
    fn test_form_with_single_table_fails() {
        let err = TableGroup::form(&[empty_table(1)], &clock()).unwrap_err();
        assert_eq!(err, PosError::InvalidGrouping(GroupingViolation::TooFewTables));
    }

    #[test]
    fn test_form_with_no_tables_fails() {
        let err = TableGroup::form(&[], &clock()).unwrap_err();
        assert_eq!(err, PosError::InvalidGrouping(GroupingViolation::TooFewTables));
    }

    #[test]
    fn test_form_with_duplicate_table_fails() {
        let err = TableGroup::form(&[empty_table(1), empty_table(1)], &clock()).unwrap_err();
        assert_eq!(err, PosError::InvalidGrouping(GroupingViolation::DuplicateTable));
    }

    #[test]
    fn test_form_with_grouped_table_fails() {
        let grouped = empty_table(1).join_group(TableGroupId(5));
        let err = TableGroup::form(&[grouped, empty_table(2)], &clock()).unwrap_err();
        assert_eq!(err, PosError::InvalidGrouping(GroupingViolation::AlreadyGrouped));
    }

    #[test]
    fn test_form_with_occupied_table_fails() {
        let occupied = OrderTable::new(OrderTableId(2), 4, false);
        let err = TableGroup::form(&[empty_table(1), occupied], &clock()).unwrap_err();
        assert_eq!(err, PosError::InvalidGrouping(GroupingViolation::NonEmptyTable));
    }

    #[test]
    fn test_first_broken_rule_wins() {
        // Duplicate and occupied at once: duplicate is checked first
        let occupied = OrderTable::new(OrderTableId(3), 2, false);
        let err = TableGroup::form(&[occupied.clone(), occupied], &clock()).unwrap_err();
        assert_eq!(err, PosError::InvalidGrouping(GroupingViolation::DuplicateTable));
    }

    #[test]
    fn test_form_collects_members_and_stamps_time() {
        let group = TableGroup::form(&[empty_table(2), empty_table(1)], &clock()).unwrap();

        assert_eq!(group.id, None);
        assert_eq!(group.table_ids(), &[OrderTableId(2), OrderTableId(1)]);
        assert_eq!(group.created_at(), noon());
    }

    #[test]
    fn test_form_is_not_idempotent() {
        let (_, members) = grouped_pair();
        let err = TableGroup::form(&members, &clock()).unwrap_err();
        assert_eq!(err, PosError::InvalidGrouping(GroupingViolation::AlreadyGrouped));
    }

    #[test]
    fn test_join_group_links_and_occupies() {
        let joined = OrderTable::new(OrderTableId(1), 3, true).join_group(TableGroupId(4));
        assert_eq!(joined.table_group_id, Some(TableGroupId(4)));
        assert!(!joined.empty);
        assert_eq!(joined.number_of_guests, 3);
    }

    #[test]
    fn test_ungroup_with_meal_in_progress_fails() {
        let (group, members) = grouped_pair();
        let orders = HashMap::from([(OrderTableId(1), vec![order(1, 1, OrderStatus::Meal)])]);

        let err = group.ungroup(&members, &orders).unwrap_err();

        assert_eq!(err, PosError::InvalidUngrouping(UngroupViolation::OrdersInProgress));
        assert_eq!(group.table_ids(), &[OrderTableId(1), OrderTableId(2)]);
    }

    #[test]
    fn test_ungroup_checks_every_order_of_every_table() {
        let (group, members) = grouped_pair();
        let orders = HashMap::from([
            (OrderTableId(1), vec![order(1, 1, OrderStatus::Completion)]),
            (
                OrderTableId(2),
                vec![
                    order(2, 2, OrderStatus::Completion),
                    order(3, 2, OrderStatus::Cooking),
                ],
            ),
        ]);

        assert!(group.ungroup(&members, &orders).is_err());
    }

    #[test]
    fn test_ungroup_with_completed_orders_detaches_all_tables() {
        let (group, mut members) = grouped_pair();
        members[0].number_of_guests = 4;
        let orders = HashMap::from([
            (OrderTableId(1), vec![order(1, 1, OrderStatus::Completion)]),
            (OrderTableId(2), vec![order(2, 2, OrderStatus::Completion)]),
        ]);

        let detached = group.ungroup(&members, &orders).unwrap();

        assert_eq!(detached.len(), 2);
        assert!(detached.iter().all(|table| table.table_group_id.is_none()));
        assert!(detached.iter().all(|table| !table.empty));
        assert_eq!(detached[0].number_of_guests, 4);
    }

    #[test]
    fn test_ungroup_without_orders_succeeds() {
        let (group, members) = grouped_pair();
        let detached = group.ungroup(&members, &HashMap::new()).unwrap();
        assert_eq!(detached.len(), 2);
    }
}
