//! Pure data structures managed by the resource actors.

pub mod ids;
pub mod menu;
pub mod menu_group;
pub mod order;
pub mod order_table;
pub mod price;
pub mod product;
pub mod table_group;

pub use ids::*;
pub use menu::*;
pub use menu_group::*;
pub use order::*;
pub use order_table::*;
pub use price::*;
pub use product::*;
pub use table_group::*;
