//! Wall placement flow: drag an entity freely, snapping it onto a wall
//! whenever the pointer ray finds one.

use glam::Vec3;
use spatialgrab_interact::{FollowHandler, InputAction, InputEvent, PointerId, PoseTarget};
use spatialgrab_snap::{
    centered_pose, grab_offset, GridSnapper, SnapError, SnapUpdate, SurfaceOracle,
};
use tracing::debug;

/// What the controller did with an event; the host uses this to show or hide
/// the snap preview and to anchor the entity after placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementUpdate {
    /// Event not part of this placement (foreign pointer, no drag active).
    Ignored,
    /// Drag started; `on_wall` tells whether the entity snapped immediately.
    Grabbed { on_wall: bool },
    /// Drag continued; `on_wall` tells whether the wall snap drove the pose.
    Moved { on_wall: bool },
    /// Drag finished; `anchored` is true when the entity landed on a wall
    /// and should be pinned to it by the host.
    Placed { anchored: bool },
    /// Drag aborted; the entity keeps its last pose.
    Canceled,
}

/// Per-entity placement controller combining follow-drag and grid snapping.
///
/// While a wall is under the pointer the entity rides the quantized wall
/// pose (centered under the grab point); otherwise it follows the pointer
/// ray rigidly. One pointer owns the gesture from down to up/cancel.
pub struct PlacementController {
    follow: FollowHandler,
    snapper: GridSnapper,
    grab: Vec3,
    dragging: Option<PointerId>,
}

impl PlacementController {
    pub fn new(grid_step: f32) -> Result<Self, SnapError> {
        Ok(Self {
            follow: FollowHandler::new(),
            snapper: GridSnapper::new(grid_step)?,
            grab: Vec3::ZERO,
            dragging: None,
        })
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    /// Process one input event for `target`, consulting `oracle` for walls.
    pub fn handle(
        &mut self,
        target: &mut dyn PoseTarget,
        oracle: &dyn SurfaceOracle,
        event: &InputEvent,
    ) -> PlacementUpdate {
        match event.action {
            InputAction::Down => {
                if self.dragging.is_some() {
                    return PlacementUpdate::Ignored;
                }
                let pose = target.pose();
                self.grab = grab_offset(&pose, &event.ray, None);
                self.follow.begin(&pose, &event.ray, event.pointer);
                self.dragging = Some(event.pointer);

                let on_wall = self.apply_snap_or_follow(target, oracle, event);
                debug!(pointer = event.pointer.0, on_wall, "placement grab");
                PlacementUpdate::Grabbed { on_wall }
            }
            InputAction::Move => {
                if self.dragging != Some(event.pointer) {
                    return PlacementUpdate::Ignored;
                }
                let on_wall = self.apply_snap_or_follow(target, oracle, event);
                PlacementUpdate::Moved { on_wall }
            }
            InputAction::Up => {
                if self.dragging != Some(event.pointer) {
                    return PlacementUpdate::Ignored;
                }
                let anchored = self.apply_snap_or_follow(target, oracle, event);
                self.finish();
                debug!(pointer = event.pointer.0, anchored, "placement finished");
                PlacementUpdate::Placed { anchored }
            }
            InputAction::Cancel => {
                if self.dragging != Some(event.pointer) {
                    return PlacementUpdate::Ignored;
                }
                // Leave the entity at its last drag pose.
                self.finish();
                PlacementUpdate::Canceled
            }
        }
    }

    /// Snap to the wall when one is hit, otherwise follow the pointer.
    /// Returns whether the wall drove the pose.
    fn apply_snap_or_follow(
        &mut self,
        target: &mut dyn PoseTarget,
        oracle: &dyn SurfaceOracle,
        event: &InputEvent,
    ) -> bool {
        match self.snapper.update(oracle.hit_test(&event.ray)) {
            SnapUpdate::Moved(pose) => {
                target.set_pose(centered_pose(&pose, self.grab));
                true
            }
            // Inside the current grid cell: the entity stays pinned.
            SnapUpdate::Unchanged => true,
            SnapUpdate::Hidden => {
                if let Some(pose) = self.follow.pose_for(&event.ray) {
                    target.set_pose(pose);
                }
                false
            }
        }
    }

    fn finish(&mut self) {
        self.follow.end();
        self.snapper.update(None);
        self.dragging = None;
    }
}
