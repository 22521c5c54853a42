//! Scheduler and event-source seams implemented by the host front end.

use crate::input::EventKind;

/// Handle for a pending frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Handle for an event subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Display-refresh driven callback loop
pub trait FrameScheduler {
    /// Ask for the next frame callback
    fn schedule_next_frame(&mut self) -> FrameHandle;

    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Delivers pointer and keyboard events to subscribers
pub trait EventSource {
    fn subscribe(&mut self, kind: EventKind) -> SubscriptionId;

    fn unsubscribe(&mut self, id: SubscriptionId);
}

/// Everything a running simulation needs from its host
pub trait Host: FrameScheduler + EventSource {}

impl<T: FrameScheduler + EventSource> Host for T {}
