//! # Observability
//!
//! Structured logging setup shared by every binary built on the framework.
//!
//! The actor loop emits one event per request with the entity type and id as fields
//! (`Created entity_type="OrderTable" id=table_3 size=3`), clients open an
//! `#[instrument]` span per call, and services add their own spans on top, so a
//! table-group request reads as one nested trace.
//!
//! ```bash
//! RUST_LOG=info cargo run     # state changes only
//! RUST_LOG=debug cargo run    # payloads and lookups
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Module paths are hidden; the `entity_type` field already says which actor spoke.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
