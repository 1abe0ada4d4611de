//! Error taxonomy shared by the domain core and the services around it.

use std::fmt::Display;
use thiserror::Error;

/// The kind of entity a failed lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Product,
    MenuGroup,
    Menu,
    OrderTable,
    TableGroup,
    Order,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Product => "product",
            EntityKind::MenuGroup => "menu group",
            EntityKind::Menu => "menu",
            EntityKind::OrderTable => "order table",
            EntityKind::TableGroup => "table group",
            EntityKind::Order => "order",
        };
        f.write_str(name)
    }
}

/// Why a set of tables could not be grouped. Rules are checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GroupingViolation {
    #[error("too few tables")]
    TooFewTables,
    #[error("duplicate table")]
    DuplicateTable,
    #[error("already grouped")]
    AlreadyGrouped,
    #[error("non-empty table")]
    NonEmptyTable,
}

/// Why a table group could not be dissolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UngroupViolation {
    #[error("orders in progress")]
    OrdersInProgress,
}

/// Errors surfaced by menu composition and the table-group lifecycle.
///
/// Every variant is terminal for the request that produced it; nothing is retried and
/// nothing is persisted.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PosError {
    /// A referenced entity does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// A menu-level invariant was violated. Nothing produces this yet.
    #[error("invalid menu composition: {0}")]
    InvalidComposition(String),

    #[error("invalid table group: {0}")]
    InvalidGrouping(GroupingViolation),

    #[error("cannot ungroup: {0}")]
    InvalidUngrouping(UngroupViolation),

    /// The store behind a resource could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl PosError {
    pub fn not_found(kind: EntityKind, id: impl Display) -> Self {
        PosError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

impl From<String> for PosError {
    fn from(msg: String) -> Self {
        PosError::Unavailable(msg)
    }
}

impl From<GroupingViolation> for PosError {
    fn from(violation: GroupingViolation) -> Self {
        PosError::InvalidGrouping(violation)
    }
}

impl From<UngroupViolation> for PosError {
    fn from(violation: UngroupViolation) -> Self {
        PosError::InvalidUngrouping(violation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    #[test]
    fn test_messages_name_the_violated_rule() {
        assert_eq!(
            PosError::from(GroupingViolation::NonEmptyTable).to_string(),
            "invalid table group: non-empty table"
        );
        assert_eq!(
            PosError::from(UngroupViolation::OrdersInProgress).to_string(),
            "cannot ungroup: orders in progress"
        );
    }

    #[test]
    fn test_not_found_uses_display_of_id() {
        let err = PosError::not_found(EntityKind::Product, ProductId(9));
        assert_eq!(
            err,
            PosError::NotFound {
                kind: EntityKind::Product,
                id: "product_9".to_string()
            }
        );
        assert_eq!(err.to_string(), "product not found: product_9");
    }
}
