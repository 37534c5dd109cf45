//! Lifecycle owner for the simulated live feed: a periodic tick driven
//! by an injected scheduler so tests can fire ticks by hand.

use crate::domain::logging::{LogComponent, get_logger};
use gloo_timers::callback::Interval;
use std::any::Any;

/// Reference tick period for the simulated feed.
pub const DEFAULT_TICK_MS: u32 = 1500;

/// Opaque cancellation token. Dropping it cancels the underlying timer,
/// which is what makes `stop()` immediate: once the handle is gone no
/// further tick can fire.
pub struct ScheduleHandle(#[allow(dead_code)] Box<dyn Any>);

impl ScheduleHandle {
    pub fn new(token: impl Any + 'static) -> Self {
        Self(Box::new(token))
    }
}

/// Source of periodic callbacks. The browser implementation wraps
/// `setInterval`; tests substitute a manually fired scheduler.
pub trait TickScheduler {
    fn schedule(&mut self, period_ms: u32, tick: Box<dyn FnMut()>) -> ScheduleHandle;
}

/// `setInterval`-backed scheduler via gloo. The `Interval` cancels
/// itself on drop.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalScheduler;

impl TickScheduler for IntervalScheduler {
    fn schedule(&mut self, period_ms: u32, mut tick: Box<dyn FnMut()>) -> ScheduleHandle {
        ScheduleHandle::new(Interval::new(period_ms, move || tick()))
    }
}

/// Two-state feed lifecycle: Stopped (initial) and Running. Both
/// transitions are idempotent, so a teardown-then-restart sequence can
/// never leave two timers live and `start()` twice never doubles the
/// update rate.
pub struct FeedSimulator<S: TickScheduler> {
    scheduler: S,
    period_ms: u32,
    handle: Option<ScheduleHandle>,
}

impl<S: TickScheduler> FeedSimulator<S> {
    pub fn new(scheduler: S) -> Self {
        Self::with_period(scheduler, DEFAULT_TICK_MS)
    }

    pub fn with_period(scheduler: S, period_ms: u32) -> Self {
        Self { scheduler, period_ms, handle: None }
    }

    /// Stopped -> Running. A no-op while already running.
    pub fn start(&mut self, tick: Box<dyn FnMut()>) {
        if self.handle.is_some() {
            return;
        }
        get_logger().info(
            LogComponent::Application("Feed"),
            &format!("Starting simulated feed ({} ms period)", self.period_ms),
        );
        self.handle = Some(self.scheduler.schedule(self.period_ms, tick));
    }

    /// Running -> Stopped. A no-op while already stopped. After this
    /// returns, no further mutation batch is produced.
    pub fn stop(&mut self) {
        if self.handle.take().is_some() {
            get_logger().info(LogComponent::Application("Feed"), "Simulated feed stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl<S: TickScheduler> Drop for FeedSimulator<S> {
    fn drop(&mut self) {
        self.stop();
    }
}
