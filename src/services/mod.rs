//! Orchestrators that resolve references through the clients, run the domain rules and
//! persist the result only once the rules pass.

pub mod menu_service;
pub mod table_group_service;

pub use menu_service::MenuService;
pub use table_group_service::TableGroupService;
