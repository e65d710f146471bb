#![warn(missing_docs)]
//! Geometric primitives shared across the workspace (rays, poses, plane casts).

use glam::{Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Rays closer to parallel than this (|dot(dir, normal)|) never hit a plane.
pub const PLANE_EPSILON: f32 = 0.001;

/// A pointer ray in world space. Immutable, one per input sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Ray origin (typically the pointer device position).
    pub origin: Vec3,
    /// Normalized direction.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing `direction`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Point at parametric distance `t` along the ray.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Position + orientation of an object in 3D space.
///
/// The rotation is a unit quaternion; the local forward axis is -Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// World-space position.
    pub translation: Vec3,
    /// World-space orientation (unit quaternion).
    pub rotation: Quat,
}

impl Pose {
    /// Pose at the origin with no rotation.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Create a pose from position and orientation.
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Pose at `translation` oriented so its forward axis points along `dir`.
    ///
    /// `up` is a hint; when `dir` is (nearly) parallel to it, +Z is used
    /// instead so the basis stays well-formed.
    pub fn look_toward(translation: Vec3, dir: Vec3, up: Vec3) -> Self {
        Self {
            translation,
            rotation: look_rotation(dir, up),
        }
    }

    /// Local forward axis (-Z) in world space.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Local up axis (+Y) in world space.
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Local right axis (+X) in world space.
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Transform a point from this pose's local frame into world space.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * point + self.translation
    }

    /// The inverse pose, mapping world space back into this pose's frame.
    pub fn inverse(&self) -> Self {
        let inv_rotation = self.rotation.conjugate();
        Self {
            translation: -(inv_rotation * self.translation),
            rotation: inv_rotation,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Orientation whose forward axis (-Z) points along `dir`, roll fixed by `up`.
pub fn look_rotation(dir: Vec3, up: Vec3) -> Quat {
    let z_axis = -dir.normalize();
    let mut x_axis = up.cross(z_axis);
    if x_axis.length_squared() < PLANE_EPSILON * PLANE_EPSILON {
        // dir is parallel to up; pick another reference axis
        x_axis = Vec3::Z.cross(z_axis);
    }
    let x_axis = x_axis.normalize();
    let y_axis = z_axis.cross(x_axis);
    Quat::from_mat3(&Mat3::from_cols(x_axis, y_axis, z_axis))
}

/// Intersect `ray` with the plane defined by `plane_normal` and `plane_point`.
///
/// Returns `None` when the ray is parallel to the plane or the intersection
/// lies behind the ray origin (t <= 0). Pure function, no state.
pub fn intersect_ray_plane(ray: &Ray, plane_normal: Vec3, plane_point: Vec3) -> Option<Vec3> {
    let dir_dot_n = ray.direction.dot(plane_normal);
    if dir_dot_n.abs() < PLANE_EPSILON {
        return None;
    }
    let t = (plane_point - ray.origin).dot(plane_normal) / dir_dot_n;
    if t <= 0.0 {
        return None;
    }
    Some(ray.point_at(t))
}

/// Component of `v` lying in the plane with normal `normal` (assumed unit).
pub fn project_on_plane(v: Vec3, normal: Vec3) -> Vec3 {
    v - normal * v.dot(normal)
}
