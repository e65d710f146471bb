#![warn(missing_docs)]
//! Deterministic testing surfaces: recorded pose targets, scripted pointer
//! streams, fixture surfaces, and a JSONL pose trace sink.

use anyhow::Result;
use glam::Vec3;
use serde::Serialize;
use spatialgrab_interact::{InputAction, InputEvent, PointerId, PoseTarget};
use spatialgrab_math::{intersect_ray_plane, Pose, Ray};
use spatialgrab_snap::{SurfaceHit, SurfaceId, SurfaceOracle};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// A pose target that remembers every pose written to it.
#[derive(Debug)]
pub struct RecordingTarget {
    pose: Pose,
    /// Every pose written via `set_pose`, in order.
    pub history: Vec<Pose>,
}

impl RecordingTarget {
    /// Create a target at `pose` with empty history.
    pub fn new(pose: Pose) -> Self {
        Self {
            pose,
            history: Vec::new(),
        }
    }

    /// Number of pose writes observed.
    pub fn writes(&self) -> usize {
        self.history.len()
    }
}

impl PoseTarget for RecordingTarget {
    fn pose(&self) -> Pose {
        self.pose
    }

    fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
        self.history.push(pose);
    }
}

/// Builds a down/move.../up pointer gesture with evenly spaced timestamps.
///
/// The ray origin stays fixed while the direction sweeps linearly from
/// `from_dir` to `to_dir` (renormalized per sample), which is how a wrist
/// swing looks to the input system.
pub fn sweep_gesture(
    origin: Vec3,
    from_dir: Vec3,
    to_dir: Vec3,
    moves: usize,
    frame: Duration,
    pointer: PointerId,
) -> Vec<InputEvent> {
    let mut events = Vec::with_capacity(moves + 2);
    let mut time = Duration::ZERO;
    events.push(InputEvent::new(
        InputAction::Down,
        Ray::new(origin, from_dir),
        pointer,
        time,
    ));
    for i in 1..=moves {
        time += frame;
        let t = i as f32 / moves as f32;
        let dir = from_dir.lerp(to_dir, t);
        events.push(InputEvent::new(
            InputAction::Move,
            Ray::new(origin, dir),
            pointer,
            time,
        ));
    }
    time += frame;
    events.push(InputEvent::new(
        InputAction::Up,
        Ray::new(origin, to_dir),
        pointer,
        time,
    ));
    events
}

/// An infinite vertical wall fixture implementing the surface oracle.
///
/// The wall is the plane `z = depth` facing +Z, reported under a fixed
/// surface id. Hit poses are upright and flush with the wall, matching what
/// a host plane tracker reports for wall planes.
#[derive(Debug, Clone, Copy)]
pub struct FixtureWall {
    /// Plane depth along -Z.
    pub depth: f32,
    /// Identity reported for every hit.
    pub surface: SurfaceId,
}

impl SurfaceOracle for FixtureWall {
    fn hit_test(&self, ray: &Ray) -> Option<SurfaceHit> {
        let point = intersect_ray_plane(ray, Vec3::Z, Vec3::new(0.0, 0.0, self.depth))?;
        Some(SurfaceHit {
            pose: Pose::look_toward(point, Vec3::Z, Vec3::Y),
            surface: self.surface,
        })
    }
}

/// An oracle that never reports a surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSurfaces;

impl SurfaceOracle for NoSurfaces {
    fn hit_test(&self, _ray: &Ray) -> Option<SurfaceHit> {
        None
    }
}

/// One pose trace line captured by headless runs.
#[derive(Debug, Serialize)]
pub struct PoseRecord<'a> {
    /// Seconds since the start of the run.
    pub time_s: f64,
    /// Which entity the pose belongs to.
    pub entity: &'a str,
    /// The applied pose.
    pub pose: Pose,
}

/// A sink that writes newline-delimited JSON pose records to disk.
pub struct PoseTraceSink {
    file: File,
}

impl PoseTraceSink {
    /// Create a new sink at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self { file })
    }

    /// Append a record to the trace.
    pub fn write(&mut self, record: &PoseRecord<'_>) -> Result<()> {
        let line = serde_json::to_string(record)?;
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        Ok(())
    }
}
