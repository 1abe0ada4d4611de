use crate::model::{OrderId, OrderTableId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Where an order is in the kitchen.
///
/// `Completion` is terminal: only tables whose orders are all completed can be ungrouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Cooking,
    Meal,
    Completion,
}

impl OrderStatus {
    pub fn is_completed(self) -> bool {
        self == OrderStatus::Completion
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Cooking => "COOKING",
            OrderStatus::Meal => "MEAL",
            OrderStatus::Completion => "COMPLETION",
        };
        f.write_str(name)
    }
}

/// An order placed against a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_table_id: OrderTableId,
    pub status: OrderStatus,
    pub ordered_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Notes
    /// New orders start out `Cooking`.
    pub fn new(id: OrderId, order_table_id: OrderTableId, ordered_at: DateTime<Utc>) -> Self {
        Self {
            id,
            order_table_id,
            status: OrderStatus::default(),
            ordered_at,
        }
    }
}

/// Payload for placing an order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub order_table_id: OrderTableId,
    pub ordered_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_in_upper_snake_case() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Completion).unwrap(),
            "\"COMPLETION\""
        );
        assert_eq!(OrderStatus::Meal.to_string(), "MEAL");
    }

    #[test]
    fn test_only_completion_is_terminal() {
        assert!(OrderStatus::Completion.is_completed());
        assert!(!OrderStatus::Cooking.is_completed());
        assert!(!OrderStatus::Meal.is_completed());
    }
}
