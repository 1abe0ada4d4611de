//! The rules of the point-of-sale core.
//!
//! Nothing in here talks to an actor, logs or stores anything. Functions take the
//! entities they need, enforce their invariants and return either a consistent result
//! or a [`PosError`](error::PosError).

pub mod clock;
pub mod error;
pub mod menu_composition;
pub mod table_group_lifecycle;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{EntityKind, GroupingViolation, PosError, UngroupViolation};
pub use menu_composition::{assemble, CatalogLookup};
