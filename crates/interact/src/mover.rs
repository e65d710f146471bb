//! Velocity-ramped motion toward a target point.

use glam::Vec3;

// Goals closer than this (squared meters) are treated as already reached.
const GOAL_EPSILON_SQ: f32 = 0.001;

/// Moves a point toward a goal with a trapezoidal velocity profile.
///
/// Speed is a magnitude in meters per second and is never negative; the
/// direction of travel always comes from the current displacement vector.
/// Motion terminates exactly at the goal: when the integrated displacement
/// for a frame would overshoot, the position snaps to the target and the
/// speed resets to zero.
#[derive(Debug, Clone)]
pub struct LinearMover {
    acceleration: f32,
    speed: f64,
}

impl LinearMover {
    /// Create a mover with the given acceleration magnitude (m/s^2).
    ///
    /// Callers validate the rate; see [`MoveConfig`](crate::MoveConfig).
    pub fn new(acceleration: f32) -> Self {
        Self {
            acceleration,
            speed: 0.0,
        }
    }

    /// Current speed in meters per second.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Drop any accumulated speed.
    pub fn reset(&mut self) {
        self.speed = 0.0;
    }

    /// Advance `current` toward `target` over `dt` seconds.
    ///
    /// Accelerates at the configured rate while the stopping distance
    /// (v^2 / 2a) is shorter than the remaining distance, otherwise applies
    /// the deceleration that brings the speed to zero exactly at the goal.
    pub fn step(&mut self, current: Vec3, target: Vec3, dt: f64) -> Vec3 {
        let to_goal = target - current;
        if to_goal.length_squared() < GOAL_EPSILON_SQ {
            return current;
        }

        let distance_to_goal = to_goal.length() as f64;
        let distance_to_stop = (self.speed * self.speed) / (2.0 * self.acceleration as f64);

        let acceleration = if distance_to_stop >= distance_to_goal {
            // Slow down so speed reaches zero exactly at the goal.
            -(self.speed * self.speed) / (2.0 * distance_to_goal)
        } else {
            self.acceleration as f64
        };

        // Speed is a magnitude; a large dt during deceleration must not
        // drive it negative and pull the object backwards.
        let speed = (self.speed + acceleration * dt).max(0.0);
        let displacement = speed * dt;

        if displacement >= distance_to_goal {
            self.speed = 0.0;
            return target;
        }

        self.speed = speed;
        current + to_goal.normalize() * displacement as f32
    }
}
