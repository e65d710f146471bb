//! Property tests for the velocity-ramped mover and the drag dead zone.

use glam::Vec3;
use proptest::prelude::*;
use spatialgrab_interact::{
    DragOutcome, InputAction, InputEvent, LinearMover, MoveConfig, MoveHandler, PointerId,
    PoseTarget,
};
use spatialgrab_math::{Pose, Ray};
use std::time::Duration;

struct Target(Pose);

impl PoseTarget for Target {
    fn pose(&self) -> Pose {
        self.0
    }
    fn set_pose(&mut self, pose: Pose) {
        self.0 = pose;
    }
}

proptest! {
    /// Property: the mover never overshoots the goal
    #[test]
    fn mover_never_overshoots(
        acceleration in 0.1f32..50.0,
        distance in 0.05f32..20.0,
        dt in 0.001f64..0.1,
        steps in 1usize..300,
    ) {
        let mut mover = LinearMover::new(acceleration);
        let target = Vec3::new(distance, 0.0, 0.0);
        let mut pos = Vec3::ZERO;
        for _ in 0..steps {
            let next = mover.step(pos, target, dt);
            // Never past the goal, never moving away from it.
            prop_assert!(next.x <= target.x + 1e-4);
            prop_assert!(next.x + 1e-4 >= pos.x);
            pos = next;
        }
    }

    /// Property: once the goal is reached the mover stays there at rest
    #[test]
    fn mover_terminates_at_goal(
        acceleration in 1.0f32..50.0,
        distance in 0.05f32..5.0,
    ) {
        let mut mover = LinearMover::new(acceleration);
        let target = Vec3::new(distance, 0.0, 0.0);
        let mut pos = Vec3::ZERO;
        for _ in 0..10_000 {
            pos = mover.step(pos, target, 0.05);
            if pos == target {
                break;
            }
        }
        if pos == target {
            prop_assert_eq!(mover.speed(), 0.0);
            prop_assert_eq!(mover.step(pos, target, 0.05), target);
        } else {
            // Parked inside the goal epsilon band.
            prop_assert!(pos.distance(target) < 0.04);
        }
    }

    /// Property: drags that stay inside the dead zone never report movement
    #[test]
    fn dead_zone_suppresses_movement_started(
        dead_zone in 0.1f32..1.0,
        jitter in prop::collection::vec((-0.01f32..0.01, -0.01f32..0.01), 1..40),
    ) {
        let mut handler = MoveHandler::new(MoveConfig {
            acceleration: 2.0,
            dead_zone,
        }).unwrap();
        // Entity two meters ahead of the pointer.
        let mut target = Target(Pose::new(Vec3::new(0.0, 0.0, -2.0), glam::Quat::IDENTITY));
        let origin = Vec3::ZERO;
        let pointer = PointerId(1);

        let down = InputEvent::new(
            InputAction::Down,
            Ray::new(origin, Vec3::NEG_Z),
            pointer,
            Duration::ZERO,
        );
        prop_assert_eq!(handler.handle(&mut target, &down), DragOutcome::Handled);

        // Jitter of up to ~1cm per axis at 2m projects well under a 10cm
        // dead zone.
        for (i, (dx, dy)) in jitter.iter().enumerate() {
            let event = InputEvent::new(
                InputAction::Move,
                Ray::new(origin, Vec3::new(*dx, *dy, -2.0)),
                pointer,
                Duration::from_millis((i as u64 + 1) * 16),
            );
            prop_assert_eq!(handler.handle(&mut target, &event), DragOutcome::Handled);
        }

        // The whole gesture reads as a tap.
        let up = InputEvent::new(
            InputAction::Up,
            Ray::new(origin, Vec3::NEG_Z),
            pointer,
            Duration::from_secs(1),
        );
        prop_assert_eq!(handler.handle(&mut target, &up), DragOutcome::Bubbled);
    }
}
