//! Simulated network latency
//!
//! Every roster action waits on an [`ActionExecutor`] before it is applied.
//! The app uses [`TimerExecutor`]; tests swap in [`ImmediateExecutor`].

use std::time::Duration;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;

/// Which simulated call is being waited on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latency {
    /// Initial collection fetch
    InitialLoad,
    /// Create, edit or delete
    Action,
}

/// Capability that resolves after the latency of a simulated call
pub trait ActionExecutor: Send + Sync {
    fn delay(&self, latency: Latency) -> BoxFuture<'static, ()>;
}

/// Fixed-duration timers on the tokio runtime
#[derive(Debug, Clone, Copy)]
pub struct TimerExecutor {
    initial_load: Duration,
    action: Duration,
}

impl TimerExecutor {
    pub fn new(initial_load: Duration, action: Duration) -> Self {
        Self {
            initial_load,
            action,
        }
    }

    pub fn duration(&self, latency: Latency) -> Duration {
        match latency {
            Latency::InitialLoad => self.initial_load,
            Latency::Action => self.action,
        }
    }
}

impl ActionExecutor for TimerExecutor {
    fn delay(&self, latency: Latency) -> BoxFuture<'static, ()> {
        let duration = self.duration(latency);
        async move { tokio::time::sleep(duration).await }.boxed()
    }
}

/// Resolves at once
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateExecutor;

impl ActionExecutor for ImmediateExecutor {
    fn delay(&self, _latency: Latency) -> BoxFuture<'static, ()> {
        futures_util::future::ready(()).boxed()
    }
}
