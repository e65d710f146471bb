#![warn(missing_docs)]
//! Wall-snap placement: quantizes hit poses onto a grid on a detected
//! vertical surface, plus helpers for keeping the grab point centered.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use spatialgrab_math::{intersect_ray_plane, Pose, Ray};
use thiserror::Error;
use tracing::debug;

/// Identity of a detected surface. Opaque; hosts hash their plane handles
/// into it. Two hits belong to the same wall iff the ids are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceId(pub u64);

/// A surface hit returned by the host's hit-test oracle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceHit {
    /// Pose flush with the surface, oriented upright against it.
    pub pose: Pose,
    /// Which surface was hit.
    pub surface: SurfaceId,
}

/// Host-provided surface detection, consumed as a black box.
pub trait SurfaceOracle {
    /// Nearest eligible surface along `ray`, if any.
    fn hit_test(&self, ray: &Ray) -> Option<SurfaceHit>;
}

/// Rejected snapper tuning values.
#[derive(Debug, Error)]
pub enum SnapError {
    /// The grid step must be strictly positive.
    #[error("grid step must be > 0, got {0}")]
    NonPositiveStep(f32),
}

/// Result of feeding one hit sample to [`GridSnapper::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapUpdate {
    /// No surface under the ray; reference state was cleared and any preview
    /// should be hidden.
    Hidden,
    /// The snapped pose moved; show the preview here.
    Moved(Pose),
    /// Still within the current grid cell; keep the previous pose.
    Unchanged,
}

/// Quantizes continuous wall hits into discrete grid steps.
///
/// The first hit on a surface (or on a different surface than before)
/// re-anchors the reference frame at the raw hit pose. Later hits on the same
/// surface only move the snapped pose when the offset from the reference,
/// expressed in the reference's local frame, crosses a whole grid step. Step
/// counts truncate toward zero.
#[derive(Debug)]
pub struct GridSnapper {
    grid_step: f32,
    reference: Option<(Pose, SurfaceId)>,
}

impl GridSnapper {
    /// Create a snapper with the given grid step in meters.
    pub fn new(grid_step: f32) -> Result<Self, SnapError> {
        if grid_step <= 0.0 {
            return Err(SnapError::NonPositiveStep(grid_step));
        }
        Ok(Self {
            grid_step,
            reference: None,
        })
    }

    /// The current snapped pose, if a surface is tracked.
    pub fn current_pose(&self) -> Option<Pose> {
        self.reference.map(|(pose, _)| pose)
    }

    /// Feed the next hit sample (or miss) and get the display update.
    pub fn update(&mut self, hit: Option<SurfaceHit>) -> SnapUpdate {
        let Some(hit) = hit else {
            if self.reference.take().is_some() {
                debug!("surface lost, snap reference cleared");
            }
            return SnapUpdate::Hidden;
        };

        match self.reference {
            Some((reference, surface)) if surface == hit.surface => {
                // Quantize movement into whole grid steps in the reference's
                // local frame; anything less keeps the preview still.
                let offset = reference.inverse().transform_point(hit.pose.translation);
                let x_steps = (offset.x / self.grid_step) as i32;
                let y_steps = (offset.y / self.grid_step) as i32;
                if x_steps == 0 && y_steps == 0 {
                    return SnapUpdate::Unchanged;
                }
                let stepped = Vec3::new(
                    x_steps as f32 * self.grid_step,
                    y_steps as f32 * self.grid_step,
                    offset.z,
                );
                let snapped = Pose::new(reference.transform_point(stepped), hit.pose.rotation);
                self.reference = Some((snapped, surface));
                SnapUpdate::Moved(snapped)
            }
            _ => {
                // First hit, or the pointer crossed onto another wall:
                // re-anchor at the raw hit pose.
                debug!(surface = hit.surface.0, "snap reference anchored");
                self.reference = Some((hit.pose, hit.surface));
                SnapUpdate::Moved(hit.pose)
            }
        }
    }
}

/// Offset of the entity's center from the grab point, in the entity's local
/// frame.
///
/// `hit_point` is the host-reported grab position when available. Without
/// one, the grab point is recovered by intersecting `ray` with the entity's
/// local xy plane; a ray parallel to that plane yields a zero offset.
pub fn grab_offset(entity_pose: &Pose, ray: &Ray, hit_point: Option<Vec3>) -> Vec3 {
    let hit_point = match hit_point {
        Some(p) => p,
        None => {
            let normal = entity_pose.forward();
            match intersect_ray_plane(ray, normal, entity_pose.translation) {
                Some(p) => p,
                None => return Vec3::ZERO,
            }
        }
    };
    // Negate to get the vector from the grab point to the entity center.
    -entity_pose.inverse().transform_point(hit_point)
}

/// Entity pose that puts its center back under the grab point for a snapped
/// wall pose.
pub fn centered_pose(hit_pose: &Pose, grab_offset: Vec3) -> Pose {
    Pose::new(hit_pose.transform_point(grab_offset), hit_pose.rotation)
}
