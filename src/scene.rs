//! Minimal in-memory stand-in for the host scene graph.
//!
//! Real deployments receive entities and surface hit-tests from the host
//! runtime; the headless driver owns a few named entities and a single
//! fixture wall so gestures can be replayed without a host.

use glam::Vec3;
use spatialgrab_interact::PoseTarget;
use spatialgrab_math::{intersect_ray_plane, Pose, Ray};
use spatialgrab_snap::{SurfaceHit, SurfaceId, SurfaceOracle};

/// A named entity with a mutable pose.
#[derive(Debug)]
pub struct SceneEntity {
    pub name: String,
    pub pose: Pose,
}

impl SceneEntity {
    pub fn new(name: impl Into<String>, pose: Pose) -> Self {
        Self {
            name: name.into(),
            pose,
        }
    }
}

impl PoseTarget for SceneEntity {
    fn pose(&self) -> Pose {
        self.pose
    }

    fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }
}

/// A single vertical wall plane at `z = depth`, facing +Z.
#[derive(Debug, Clone, Copy)]
pub struct WallPlane {
    pub depth: f32,
    pub surface: SurfaceId,
}

impl SurfaceOracle for WallPlane {
    fn hit_test(&self, ray: &Ray) -> Option<SurfaceHit> {
        let point = intersect_ray_plane(ray, Vec3::Z, Vec3::new(0.0, 0.0, self.depth))?;
        Some(SurfaceHit {
            pose: Pose::look_toward(point, Vec3::Z, Vec3::Y),
            surface: self.surface,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_pose_roundtrips_through_trait() {
        let mut entity = SceneEntity::new("photo", Pose::IDENTITY);
        let pose = Pose::new(Vec3::new(1.0, 2.0, 3.0), glam::Quat::IDENTITY);
        entity.set_pose(pose);
        assert_eq!(entity.pose(), pose);
    }

    #[test]
    fn wall_reports_consistent_surface_id() {
        let wall = WallPlane {
            depth: -2.0,
            surface: SurfaceId(42),
        };
        let a = wall.hit_test(&Ray::new(Vec3::ZERO, Vec3::NEG_Z)).unwrap();
        let b = wall
            .hit_test(&Ray::new(Vec3::ZERO, Vec3::new(0.3, 0.1, -1.0)))
            .unwrap();
        assert_eq!(a.surface, b.surface);
    }
}
