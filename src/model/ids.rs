//! Type-safe identifiers.
//!
//! Every id wraps the `u32` handed out by its resource actor and prints with a kind
//! prefix (`table_3`, `menu_12`) so log lines and error messages say what they point at.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a [`Product`](crate::model::Product).
    ProductId,
    "product"
);
entity_id!(
    /// Identifier of a [`MenuGroup`](crate::model::MenuGroup).
    MenuGroupId,
    "menu_group"
);
entity_id!(
    /// Identifier of a [`Menu`](crate::model::Menu).
    MenuId,
    "menu"
);
entity_id!(
    /// Identifier of a [`MenuLine`](crate::model::MenuLine), assigned when its menu is stored.
    MenuLineId,
    "menu_line"
);
entity_id!(
    /// Identifier of an [`OrderTable`](crate::model::OrderTable).
    OrderTableId,
    "table"
);
entity_id!(
    /// Identifier of a [`TableGroup`](crate::model::TableGroup).
    TableGroupId,
    "table_group"
);
entity_id!(
    /// Identifier of an [`Order`](crate::model::Order).
    OrderId,
    "order"
);
