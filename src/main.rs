//! spatialgrab - pointer-driven entity manipulation toolkit
//!
//! Headless driver: replays a pointer gesture script against a small scene
//! and traces the resulting entity poses as JSONL.

mod config;
mod placement;
mod scene;
mod scripted_input;

use anyhow::{Context, Result};
use config::TuningConfig;
use glam::{Quat, Vec3};
use placement::{PlacementController, PlacementUpdate};
use scene::{SceneEntity, WallPlane};
use serde::Serialize;
use spatialgrab_math::Pose;
use spatialgrab_snap::SurfaceId;
use std::io::Write;
use std::{env, fs::File, path::PathBuf};
use tracing::info;

fn main() -> Result<()> {
    // Initialize tracing with INFO level by default (override via RUST_LOG)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting spatialgrab v{}", env!("CARGO_PKG_VERSION"));

    let cli = CliOptions::parse(env::args().skip(1))?;
    let tuning = match &cli.config_path {
        Some(path) => TuningConfig::load_from_path(path),
        None => TuningConfig::load(),
    };

    let events = scripted_input::load_script(&cli.script_path)
        .with_context(|| format!("failed to load gesture script {}", cli.script_path.display()))?;
    info!(events = events.len(), "gesture script loaded");

    let wall = WallPlane {
        depth: tuning.wall_depth,
        surface: SurfaceId(1),
    };
    let mut entity = SceneEntity::new(
        "photo",
        Pose::new(Vec3::new(0.0, 0.0, -1.5), Quat::IDENTITY),
    );
    let mut controller =
        PlacementController::new(tuning.grid_step).context("invalid grid step in tuning")?;

    let mut trace = cli
        .trace_path
        .as_ref()
        .map(|path| {
            File::create(path)
                .with_context(|| format!("failed to create trace file {}", path.display()))
        })
        .transpose()?;

    for event in &events {
        let update = controller.handle(&mut entity, &wall, event);
        match update {
            PlacementUpdate::Grabbed { on_wall } => {
                info!(on_wall, "entity grabbed");
            }
            PlacementUpdate::Placed { anchored } => {
                info!(anchored, pose = ?entity.pose.translation, "entity placed");
            }
            PlacementUpdate::Canceled => info!("gesture canceled"),
            PlacementUpdate::Moved { .. } | PlacementUpdate::Ignored => {}
        }

        if let Some(file) = trace.as_mut() {
            let record = TraceLine {
                time_s: event.time.as_secs_f64(),
                entity: &entity.name,
                pose: entity.pose,
            };
            let line = serde_json::to_string(&record)?;
            file.write_all(line.as_bytes())?;
            file.write_all(b"\n")?;
        }
    }

    info!(final_pose = ?entity.pose.translation, "replay finished");
    Ok(())
}

#[derive(Debug, Serialize)]
struct TraceLine<'a> {
    time_s: f64,
    entity: &'a str,
    pose: Pose,
}

#[derive(Debug)]
struct CliOptions {
    script_path: PathBuf,
    config_path: Option<PathBuf>,
    trace_path: Option<PathBuf>,
}

impl CliOptions {
    fn parse<I>(mut args: I) -> Result<Self>
    where
        I: Iterator<Item = String>,
    {
        let mut script_path: Option<PathBuf> = None;
        let mut config_path: Option<PathBuf> = None;
        let mut trace_path: Option<PathBuf> = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--script" => script_path = args.next().map(PathBuf::from),
                "--config" => config_path = args.next().map(PathBuf::from),
                "--trace-out" => trace_path = args.next().map(PathBuf::from),
                other => anyhow::bail!("unknown argument: {other}"),
            }
        }
        let script_path = script_path.context("--script <file> is required")?;
        Ok(Self {
            script_path,
            config_path,
            trace_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_requires_a_script() {
        assert!(CliOptions::parse(std::iter::empty()).is_err());
    }

    #[test]
    fn cli_parses_all_flags() {
        let args = [
            "--script",
            "gesture.json",
            "--config",
            "tuning.toml",
            "--trace-out",
            "trace.jsonl",
        ]
        .into_iter()
        .map(String::from);
        let cli = CliOptions::parse(args).unwrap();
        assert_eq!(cli.script_path, PathBuf::from("gesture.json"));
        assert_eq!(cli.config_path, Some(PathBuf::from("tuning.toml")));
        assert_eq!(cli.trace_path, Some(PathBuf::from("trace.jsonl")));
    }

    #[test]
    fn cli_rejects_unknown_flags() {
        let args = ["--wat"].into_iter().map(String::from);
        assert!(CliOptions::parse(args).is_err());
    }
}
