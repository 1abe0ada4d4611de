//! # System Lifecycle
//!
//! Starting, wiring and stopping the actors behind the point of sale.
//!
//! Actors are created first, then started with their context, then wrapped in typed
//! clients that are shared with the services. Shutdown runs the other way: every client
//! is dropped, which closes the channels, and the actor tasks are awaited.

pub mod config;
pub mod pos_system;

pub use config::PosConfig;
pub use pos_system::PosSystem;
