//! Pointer gesture scripts for headless replay.
//!
//! Scripts are JSON files describing a serial stream of pointer samples:
//!
//! ```json
//! {
//!   "events": [
//!     { "action": "down", "origin": [0, 0, 0], "direction": [0, 0, -1] },
//!     { "action": "move", "origin": [0, 0, 0], "direction": [0.2, 0, -1], "dt_ms": 16 },
//!     { "action": "up",   "origin": [0, 0, 0], "direction": [0.2, 0, -1] }
//!   ]
//! }
//! ```

use glam::Vec3;
use serde::Deserialize;
use spatialgrab_interact::{InputAction, InputEvent, PointerId};
use spatialgrab_math::Ray;
use std::{fs, path::Path, time::Duration};

#[derive(Debug, Deserialize)]
struct ScriptFile {
    events: Vec<ScriptedEvent>,
}

#[derive(Debug, Clone, Deserialize)]
struct ScriptedEvent {
    action: InputAction,
    origin: [f32; 3],
    direction: [f32; 3],
    #[serde(default = "default_dt_ms")]
    dt_ms: u64,
    #[serde(default)]
    pointer: u32,
}

fn default_dt_ms() -> u64 {
    16
}

/// Load a gesture script and expand it into timestamped input events.
pub fn load_script(path: &Path) -> anyhow::Result<Vec<InputEvent>> {
    let contents = fs::read_to_string(path)?;
    let file: ScriptFile = serde_json::from_str(&contents)?;
    if file.events.is_empty() {
        anyhow::bail!("gesture script contains no events");
    }

    let mut time = Duration::ZERO;
    let mut events = Vec::with_capacity(file.events.len());
    for step in &file.events {
        time += Duration::from_millis(step.dt_ms);
        events.push(InputEvent::new(
            step.action,
            Ray::new(Vec3::from(step.origin), Vec3::from(step.direction)),
            PointerId(step.pointer),
            time,
        ));
    }
    Ok(events)
}
