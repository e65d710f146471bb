//! Pointer input event records delivered by the host input source.

use serde::{Deserialize, Serialize};
use spatialgrab_math::Ray;
use std::time::Duration;

/// Identity of the pointer device that produced an event (hand, controller).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerId(pub u32);

/// Pointer action phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputAction {
    /// Pointer engaged (pinch/trigger pressed).
    Down,
    /// Pointer moved while engaged.
    Move,
    /// Pointer released.
    Up,
    /// Gesture aborted by the host.
    Cancel,
}

/// One pointer input sample.
///
/// The timestamp is supplied by the host so event processing stays
/// deterministic under replay; handlers never read a wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputEvent {
    /// Action phase.
    pub action: InputAction,
    /// Pointer ray in world space.
    pub ray: Ray,
    /// Which pointer produced the sample.
    pub pointer: PointerId,
    /// Host time of the sample, monotonic per pointer stream.
    pub time: Duration,
}

impl InputEvent {
    /// Convenience constructor.
    pub fn new(action: InputAction, ray: Ray, pointer: PointerId, time: Duration) -> Self {
        Self {
            action,
            ray,
            pointer,
            time,
        }
    }
}
