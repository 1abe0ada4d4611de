//! # Kitchen POS
//!
//! The core of a restaurant point of sale: products, menus composed of products, dining
//! tables, table groups and the orders placed against tables.
//!
//! Each kind of resource is kept by its own actor (see the `actor-framework` crate). The
//! rules that matter, which menus may be composed and which tables may be grouped or
//! released, live in [`domain`] and run before anything is written.
//!
//! ## Module Tour
//!
//! ### 1. The Rules ([`domain`])
//! - [`assemble`](domain::menu_composition::assemble) builds a menu once its menu group
//!   and every product exist.
//! - [`TableGroup::form`](model::TableGroup::form) and
//!   [`TableGroup::ungroup`](model::TableGroup::ungroup) guard the table-group lifecycle.
//! - [`PosError`](domain::PosError) is the single error type callers see.
//!
//! ### 2. The Data ([`model`])
//! Plain structs with typed ids. They derive `serde` traits so an outer layer can emit
//! them as-is.
//!
//! ### 3. The Stores ([`product_actor`], [`menu_group_actor`], [`menu_actor`],
//! [`order_table_actor`], [`table_group_actor`], [`order_actor`])
//! [`ActorEntity`](actor_framework::ActorEntity) implementations, one per resource.
//!
//! ### 4. The Interface ([`clients`], [`services`])
//! Typed clients over the actors and the two orchestrators,
//! [`MenuService`](services::MenuService) and
//! [`TableGroupService`](services::TableGroupService).
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`PosSystem`](lifecycle::PosSystem) starts and stops everything.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod domain;
pub mod lifecycle;
pub mod menu_actor;
pub mod menu_group_actor;
pub mod model;
pub mod order_actor;
pub mod order_table_actor;
pub mod product_actor;
pub mod services;
pub mod table_group_actor;
