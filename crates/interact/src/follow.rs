//! Pointer-relative pose following: the entity keeps its pose relative to
//! the pointer ray as the ray swings, moving and turning together with it.

use crate::event::PointerId;
use glam::{Quat, Vec3};
use spatialgrab_math::{look_rotation, Pose, Ray};

/// State captured at grab time.
#[derive(Debug, Clone)]
struct Grip {
    pointer: PointerId,
    initial_rotation: Quat,
    initial_offset: Vec3,
    initial_pointer_rotation: Quat,
}

/// Drags an entity so it follows the pointer ray rigidly.
///
/// At grab time the entity's rotation, its offset from the ray origin, and
/// the pointer's look rotation are captured. Each update applies the
/// pointer's delta rotation to both the offset and the rotation, so the
/// entity swings with the pointer like the end of a rigid rod.
#[derive(Debug, Default)]
pub struct FollowHandler {
    grip: Option<Grip>,
}

impl FollowHandler {
    /// Create an idle handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a grip is active.
    pub fn is_gripped(&self) -> bool {
        self.grip.is_some()
    }

    /// The pointer owning the current grip, if any.
    pub fn pointer(&self) -> Option<PointerId> {
        self.grip.as_ref().map(|g| g.pointer)
    }

    /// Capture grip state from the entity's pose and the grab ray.
    pub fn begin(&mut self, pose: &Pose, ray: &Ray, pointer: PointerId) {
        self.grip = Some(Grip {
            pointer,
            initial_rotation: pose.rotation,
            initial_offset: pose.translation - ray.origin,
            initial_pointer_rotation: pointer_rotation(ray.direction),
        });
    }

    /// Pose the entity should take for the current pointer ray.
    ///
    /// Returns `None` when no grip is active.
    pub fn pose_for(&self, ray: &Ray) -> Option<Pose> {
        let grip = self.grip.as_ref()?;
        let delta = pointer_rotation(ray.direction) * grip.initial_pointer_rotation.inverse();
        Some(Pose::new(
            ray.origin + delta * grip.initial_offset,
            delta * grip.initial_rotation,
        ))
    }

    /// Release the grip.
    pub fn end(&mut self) {
        self.grip = None;
    }
}

fn pointer_rotation(ray_dir: Vec3) -> Quat {
    look_rotation(ray_dir, Vec3::Y)
}
