//! Grab-and-rotate about the entity's Y axis.

use crate::event::{InputAction, InputEvent, PointerId};
use crate::{ConfigError, PoseTarget};
use glam::{EulerRot, Quat, Vec3};
use spatialgrab_math::{intersect_ray_plane, project_on_plane, Pose, PLANE_EPSILON};
use tracing::debug;

/// Tuning for [`RotateHandler`].
#[derive(Debug, Clone, Copy)]
pub struct RotateConfig {
    /// Rotation applied per meter of lateral pointer travel, in degrees.
    pub degrees_per_meter: f32,
}

impl RotateConfig {
    /// Validate tuning values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.degrees_per_meter == 0.0 {
            return Err(ConfigError::ZeroRotationRate(self.degrees_per_meter));
        }
        Ok(())
    }
}

impl Default for RotateConfig {
    fn default() -> Self {
        Self {
            degrees_per_meter: 135.0,
        }
    }
}

#[derive(Debug)]
struct RotateGrip {
    pointer: PointerId,
    initial_yaw: f32,
    plane_point: Vec3,
    plane_normal: Vec3,
    // Unit vector on the interaction plane; lateral hit displacement along it
    // maps to yaw.
    lateral: Vec3,
}

/// Turns an entity about its Y axis as the pointer sweeps sideways.
///
/// At grab time an interaction plane facing the pointer is built through the
/// entity, the entity's up axis is projected onto it, and the cross product
/// gives the lateral direction that drives the rotation. Degenerate geometry
/// (plane miss, up axis perpendicular to the plane) skips the grab.
#[derive(Debug)]
pub struct RotateHandler {
    radians_per_meter: f32,
    grip: Option<RotateGrip>,
}

impl RotateHandler {
    /// Create a handler with validated tuning.
    pub fn new(config: RotateConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            radians_per_meter: config.degrees_per_meter.to_radians(),
            grip: None,
        })
    }

    /// Whether a grab is active.
    pub fn is_gripped(&self) -> bool {
        self.grip.is_some()
    }

    /// Process one input event against `target`.
    ///
    /// Returns the new yaw in radians when the rotation changed.
    pub fn handle(&mut self, target: &mut dyn PoseTarget, event: &InputEvent) -> Option<f32> {
        match event.action {
            InputAction::Down => {
                self.begin(&target.pose(), event);
                None
            }
            InputAction::Move => self.update(target, event),
            InputAction::Up | InputAction::Cancel => {
                self.grip = None;
                None
            }
        }
    }

    fn begin(&mut self, pose: &Pose, event: &InputEvent) {
        if let Some(grip) = &self.grip {
            if grip.pointer != event.pointer {
                return;
            }
        }

        let plane_point = pose.translation;
        let plane_normal = -event.ray.direction;

        // Anchor the plane at the actual grab point rather than the origin.
        let Some(grab_point) = intersect_ray_plane(&event.ray, plane_normal, plane_point) else {
            return;
        };

        let up_on_plane = project_on_plane(pose.up(), plane_normal);
        if up_on_plane.length_squared() < PLANE_EPSILON {
            // Up axis is aligned with the view ray; lateral direction is
            // undefined, so skip the grab.
            return;
        }
        let lateral = plane_normal.cross(up_on_plane.normalize());

        let (initial_yaw, _, _) = pose.rotation.to_euler(EulerRot::YXZ);
        debug!(pointer = event.pointer.0, "rotate grip started");
        self.grip = Some(RotateGrip {
            pointer: event.pointer,
            initial_yaw,
            plane_point: grab_point,
            plane_normal,
            lateral,
        });
    }

    fn update(&mut self, target: &mut dyn PoseTarget, event: &InputEvent) -> Option<f32> {
        let grip = self.grip.as_ref()?;
        if grip.pointer != event.pointer {
            return None;
        }

        let hit = intersect_ray_plane(&event.ray, grip.plane_normal, grip.plane_point)?;
        let travel = (hit - grip.plane_point).dot(grip.lateral);

        let pose = target.pose();
        let (_, pitch, roll) = pose.rotation.to_euler(EulerRot::YXZ);
        let yaw = grip.initial_yaw - travel * self.radians_per_meter;
        target.set_pose(Pose::new(
            pose.translation,
            Quat::from_euler(EulerRot::YXZ, yaw, pitch, roll),
        ));
        Some(yaw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spatialgrab_math::Ray;
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

    fn event(action: InputAction, origin: Vec3, dir: Vec3) -> InputEvent {
        InputEvent::new(action, Ray::new(origin, dir), PointerId(1), Duration::ZERO)
    }

    #[test]
    fn lateral_sweep_rotates_about_y() {
        let mut handler = RotateHandler::new(RotateConfig {
            degrees_per_meter: 90.0,
        })
        .unwrap();
        let mut target = Target(Pose::IDENTITY);

        // Grab from two meters out, straight on.
        let origin = Vec3::new(0.0, 0.0, 2.0);
        handler.handle(&mut target, &event(InputAction::Down, origin, Vec3::NEG_Z));
        assert!(handler.is_gripped());

        // Sweep one meter to the right on the interaction plane.
        let yaw = handler
            .handle(
                &mut target,
                &event(InputAction::Move, origin, Vec3::new(1.0, 0.0, -2.0)),
            )
            .expect("rotation should update");

        // Plane normal is +Z, entity up is +Y, so lateral = Z x Y = -X; a hit
        // at +1m in X gives travel -1 and yaw +90 degrees.
        assert!((yaw - std::f32::consts::FRAC_PI_2).abs() < 1e-3);
        let (applied_yaw, _, _) = target.0.rotation.to_euler(EulerRot::YXZ);
        assert!((applied_yaw - yaw).abs() < 1e-4);
        assert_eq!(target.0.translation, Vec3::ZERO);
    }

    #[test]
    fn release_clears_the_grip() {
        let mut handler = RotateHandler::new(RotateConfig::default()).unwrap();
        let mut target = Target(Pose::IDENTITY);
        let origin = Vec3::new(0.0, 0.0, 2.0);
        handler.handle(&mut target, &event(InputAction::Down, origin, Vec3::NEG_Z));
        handler.handle(&mut target, &event(InputAction::Up, origin, Vec3::NEG_Z));
        assert!(!handler.is_gripped());

        let update = handler.handle(
            &mut target,
            &event(InputAction::Move, origin, Vec3::new(1.0, 0.0, -2.0)),
        );
        assert!(update.is_none());
    }

    #[test]
    fn up_axis_aligned_with_ray_skips_the_grab() {
        let mut handler = RotateHandler::new(RotateConfig::default()).unwrap();
        // Entity below the pointer, grabbed looking straight down: its up
        // axis has no projection on the interaction plane.
        let mut target = Target(Pose::new(Vec3::new(0.0, -2.0, 0.0), Quat::IDENTITY));
        let origin = Vec3::ZERO;
        handler.handle(&mut target, &event(InputAction::Down, origin, Vec3::NEG_Y));
        assert!(!handler.is_gripped());
    }

    #[test]
    fn zero_rate_is_rejected() {
        assert!(RotateHandler::new(RotateConfig {
            degrees_per_meter: 0.0,
        })
        .is_err());
    }
}
