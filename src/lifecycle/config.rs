//! Runtime settings for [`PosSystem`](crate::lifecycle::PosSystem).

use tracing::warn;

/// Environment variable holding the request channel capacity of every actor.
pub const CHANNEL_CAPACITY_VAR: &str = "KITCHEN_POS_CHANNEL_CAPACITY";

const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosConfig {
    /// Requests each actor buffers before senders have to wait.
    pub channel_capacity: usize,
}

impl Default for PosConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl PosConfig {
    /// Reads the configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let raw = std::env::var(CHANNEL_CAPACITY_VAR).ok();
        Self {
            channel_capacity: parse_capacity(raw.as_deref()),
        }
    }
}

fn parse_capacity(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_CHANNEL_CAPACITY;
    };
    match raw.trim().parse::<usize>() {
        // tokio rejects zero-capacity channels
        Ok(capacity) if capacity > 0 => capacity,
        _ => {
            warn!(
                var = CHANNEL_CAPACITY_VAR,
                value = raw,
                default = DEFAULT_CHANNEL_CAPACITY,
                "Invalid channel capacity, using default"
            );
            DEFAULT_CHANNEL_CAPACITY
        }
    }
}
