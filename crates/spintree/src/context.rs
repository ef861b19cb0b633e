#![forbid(unsafe_code)]

//! Shared tick source for a spinner tree.

use std::time::Duration;

/// The one thing every spinner in a tree shares: the cadence at which the
/// owning driver calls render.
///
/// A driver creates a single `ProcessContext` wrapped in an `Arc`, binds the
/// root spinner to it with [`Spinner::bind`](crate::Spinner::bind), and every
/// later [`add_child`](crate::Spinner::add_child) inherits the same handle.
/// On each render call a working node credits `refresh_interval` to its
/// internal timer, so the context's interval must match the driver's actual
/// sleep period for frame timing to be truthful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessContext {
    refresh_interval: Duration,
}

impl ProcessContext {
    pub fn new(refresh_interval: Duration) -> Self {
        Self { refresh_interval }
    }

    /// The global tick period, read once per render call per node.
    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_interval_round_trips() {
        let ctx = ProcessContext::new(Duration::from_millis(80));
        assert_eq!(ctx.refresh_interval(), Duration::from_millis(80));
    }
}
