use glam::{Vec2, Vec3};

/// Keys the simulation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Other,
}

/// Which way a wheel event changes the particle count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    /// Up, left or forward: one particle fewer
    Decrement,
    Increment,
}

impl WheelDirection {
    /// Classify raw wheel deltas. Negative deltas on any axis mean up, left
    /// or forward, the DOM convention.
    pub fn from_deltas(delta: Vec3) -> Self {
        if delta.x < 0.0 || delta.y < 0.0 || delta.z < 0.0 {
            WheelDirection::Decrement
        } else {
            WheelDirection::Increment
        }
    }
}

/// A raw input sample delivered by the host's event layer.
///
/// Pointer positions are already in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMoved(Vec2),
    PrimaryClick,
    SecondaryClick,
    TouchStart,
    TouchEnd,
    Wheel(WheelDirection),
    KeyReleased(Key),
}

impl InputEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            InputEvent::PointerMoved(_) => EventKind::PointerMove,
            InputEvent::PrimaryClick => EventKind::PrimaryClick,
            InputEvent::SecondaryClick => EventKind::SecondaryClick,
            InputEvent::TouchStart => EventKind::TouchStart,
            InputEvent::TouchEnd => EventKind::TouchEnd,
            InputEvent::Wheel(_) => EventKind::Wheel,
            InputEvent::KeyReleased(_) => EventKind::KeyRelease,
        }
    }
}

/// Event kinds a simulation subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerMove,
    PrimaryClick,
    SecondaryClick,
    TouchStart,
    TouchEnd,
    Wheel,
    KeyRelease,
}

impl EventKind {
    pub const ALL: [EventKind; 7] = [
        EventKind::PointerMove,
        EventKind::PrimaryClick,
        EventKind::SecondaryClick,
        EventKind::TouchStart,
        EventKind::TouchEnd,
        EventKind::Wheel,
        EventKind::KeyRelease,
    ];
}

/// What the host should do after delivering an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Continue,
    /// Skip the platform's default handling (e.g. the context menu)
    SuppressDefault,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_direction_from_deltas() {
        assert_eq!(
            WheelDirection::from_deltas(Vec3::new(0.0, -3.0, 0.0)),
            WheelDirection::Decrement
        );
        assert_eq!(
            WheelDirection::from_deltas(Vec3::new(-1.0, 0.0, 0.0)),
            WheelDirection::Decrement
        );
        assert_eq!(
            WheelDirection::from_deltas(Vec3::new(0.0, 0.0, -0.5)),
            WheelDirection::Decrement
        );
        assert_eq!(
            WheelDirection::from_deltas(Vec3::new(0.0, 4.0, 0.0)),
            WheelDirection::Increment
        );
        assert_eq!(WheelDirection::from_deltas(Vec3::ZERO), WheelDirection::Increment);
    }

    #[test]
    fn test_every_event_maps_to_a_listed_kind() {
        let events = [
            InputEvent::PointerMoved(Vec2::ZERO),
            InputEvent::PrimaryClick,
            InputEvent::SecondaryClick,
            InputEvent::TouchStart,
            InputEvent::TouchEnd,
            InputEvent::Wheel(WheelDirection::Increment),
            InputEvent::KeyReleased(Key::Space),
        ];
        for event in events {
            assert!(EventKind::ALL.contains(&event.kind()));
        }
    }
}
