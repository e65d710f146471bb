//! Drag-to-move: pointer events become smoothed entity translation.

use crate::event::{InputAction, InputEvent, PointerId};
use crate::mover::LinearMover;
use crate::{ConfigError, PoseTarget};
use glam::Vec3;
use spatialgrab_math::{intersect_ray_plane, Pose};
use std::time::Duration;
use tracing::{debug, trace};

/// Tuning for [`MoveHandler`].
#[derive(Debug, Clone, Copy)]
pub struct MoveConfig {
    /// Accelerate/decelerate rate while chasing the pointer, m/s^2.
    pub acceleration: f32,
    /// Pointer travel (meters) required before a drag counts as movement.
    pub dead_zone: f32,
}

impl MoveConfig {
    /// Validate tuning values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.acceleration <= 0.0 {
            return Err(ConfigError::NonPositiveAcceleration(self.acceleration));
        }
        if self.dead_zone < 0.0 {
            return Err(ConfigError::NegativeDeadZone(self.dead_zone));
        }
        Ok(())
    }
}

impl Default for MoveConfig {
    fn default() -> Self {
        Self {
            acceleration: 2.0,
            dead_zone: 0.02,
        }
    }
}

/// What the handler did with an event. The caller owns dispatch of anything
/// it did not consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Event consumed by the active drag.
    Handled,
    /// This sample crossed the dead zone; reported exactly once per drag.
    MovementStarted,
    /// Not part of a drag (tap-like release, unknown phase); the caller may
    /// reinterpret it, e.g. as a tap.
    Bubbled,
    /// Dropped without effect (foreign pointer, missed plane, no session).
    Ignored,
}

/// Per-drag transient state. Created on pointer-down, dropped on up/cancel.
#[derive(Debug)]
struct Session {
    initial_hit_point: Vec3,
    initial_hit_distance: f32,
    hit_offset_from_origin: Vec3,
    pointer: PointerId,
    started_at: Duration,
    last_update: Duration,
    mover: LinearMover,
    moved: bool,
}

/// Moves an entity by dragging it with a pointer ray.
///
/// On pointer-down an interaction plane is built through the entity's current
/// position, facing the incoming ray; later samples are projected back onto
/// that plane at the initial hit distance and the entity chases the projected
/// point with a trapezoidal velocity ramp. A single pointer owns the drag:
/// events from any other pointer are ignored until the session ends.
#[derive(Debug)]
pub struct MoveHandler {
    config: MoveConfig,
    session: Option<Session>,
}

impl MoveHandler {
    /// Create a handler with validated tuning.
    pub fn new(config: MoveConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            session: None,
        })
    }

    /// Whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Process one input event against `target`.
    pub fn handle(&mut self, target: &mut dyn PoseTarget, event: &InputEvent) -> DragOutcome {
        match event.action {
            InputAction::Down => self.on_down(target, event),
            InputAction::Move => self.on_move(target, event),
            InputAction::Up | InputAction::Cancel => self.on_release(event),
        }
    }

    fn on_down(&mut self, target: &mut dyn PoseTarget, event: &InputEvent) -> DragOutcome {
        // A second pointer grabbing mid-drag changes nothing.
        if let Some(session) = &self.session {
            if session.pointer != event.pointer {
                trace!(pointer = event.pointer.0, "ignoring concurrent grab");
                return DragOutcome::Ignored;
            }
        }

        // Host hit info is not available here; approximate the grab point by
        // intersecting with a plane through the entity, facing the pointer.
        let plane_point = target.pose().translation;
        let plane_normal = -event.ray.direction;

        let Some(hit_point) = intersect_ray_plane(&event.ray, plane_normal, plane_point) else {
            return DragOutcome::Ignored;
        };

        debug!(pointer = event.pointer.0, "drag session started");
        self.session = Some(Session {
            initial_hit_point: hit_point,
            initial_hit_distance: hit_point.distance(event.ray.origin),
            hit_offset_from_origin: hit_point - plane_point,
            pointer: event.pointer,
            started_at: event.time,
            last_update: event.time,
            mover: LinearMover::new(self.config.acceleration),
            moved: false,
        });
        DragOutcome::Handled
    }

    fn on_move(&mut self, target: &mut dyn PoseTarget, event: &InputEvent) -> DragOutcome {
        let Some(session) = &mut self.session else {
            return DragOutcome::Ignored;
        };
        if session.pointer != event.pointer {
            return DragOutcome::Ignored;
        }

        // Keep the grab point at its initial distance along the new ray.
        let target_point = event.ray.point_at(session.initial_hit_distance);

        let mut outcome = DragOutcome::Handled;
        if !session.moved {
            let dead_zone_sq = self.config.dead_zone * self.config.dead_zone;
            if target_point.distance_squared(session.initial_hit_point) < dead_zone_sq {
                return DragOutcome::Handled;
            }
            session.moved = true;
            outcome = DragOutcome::MovementStarted;
            debug!(pointer = event.pointer.0, "dead zone crossed");
        }

        let dt = event.time.saturating_sub(session.last_update).as_secs_f64();
        session.last_update = event.time;

        let target_translation = target_point - session.hit_offset_from_origin;
        let pose = target.pose();
        let next = session.mover.step(pose.translation, target_translation, dt);
        if next != pose.translation {
            target.set_pose(Pose::new(next, pose.rotation));
        }
        outcome
    }

    fn on_release(&mut self, event: &InputEvent) -> DragOutcome {
        let outcome = match &self.session {
            Some(session) if session.pointer == event.pointer => {
                let held = event.time.saturating_sub(session.started_at);
                debug!(
                    pointer = event.pointer.0,
                    held_ms = held.as_millis() as u64,
                    moved = session.moved,
                    "drag session ended"
                );
                if session.moved {
                    DragOutcome::Handled
                } else {
                    // The drag never left the dead zone; let the caller treat
                    // the gesture as a tap.
                    DragOutcome::Bubbled
                }
            }
            Some(_) => return DragOutcome::Ignored,
            None => DragOutcome::Bubbled,
        };
        self.session = None;
        outcome
    }
}
