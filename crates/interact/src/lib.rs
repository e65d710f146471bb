#![warn(missing_docs)]
//! Pointer-driven entity manipulation: drag, follow, and rotate handlers.
//!
//! Handlers in this crate never own scene entities. They read and write poses
//! through the [`PoseTarget`] trait and are driven one [`InputEvent`] at a
//! time from the host's input callback. Delivery must be serial per entity;
//! there is no internal locking.

pub mod drag;
pub mod event;
pub mod follow;
pub mod mover;
pub mod rotate;

pub use drag::{DragOutcome, MoveConfig, MoveHandler};
pub use event::{InputAction, InputEvent, PointerId};
pub use follow::FollowHandler;
pub use mover::LinearMover;
pub use rotate::{RotateConfig, RotateHandler};

use spatialgrab_math::Pose;
use thiserror::Error;

/// Pose access for a host-owned scene entity.
///
/// The host scene graph keeps ownership of its entities; handlers only read
/// the current pose and write one new pose per processed event.
pub trait PoseTarget {
    /// Current pose of the entity.
    fn pose(&self) -> Pose;
    /// Replace the entity's pose.
    fn set_pose(&mut self, pose: Pose);
}

/// Rejected handler tuning values.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Acceleration must be strictly positive for the velocity ramp to work.
    #[error("linear acceleration must be > 0, got {0}")]
    NonPositiveAcceleration(f32),
    /// Negative dead zones are meaningless.
    #[error("dead zone must be >= 0, got {0}")]
    NegativeDeadZone(f32),
    /// A rotation rate of zero would make the handler a no-op.
    #[error("rotation rate must be non-zero, got {0} deg/m")]
    ZeroRotationRate(f32),
}
