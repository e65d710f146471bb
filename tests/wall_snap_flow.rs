//! Wall snapping driven by a scripted gesture against a fixture wall.

use glam::Vec3;
use spatialgrab_math::Ray;
use spatialgrab_snap::{GridSnapper, SnapUpdate, SurfaceId, SurfaceOracle};
use spatialgrab_testkit::{FixtureWall, NoSurfaces};

const STEP: f32 = 0.1;

fn wall() -> FixtureWall {
    FixtureWall {
        depth: -3.0,
        surface: SurfaceId(1),
    }
}

#[test]
fn slow_sweep_moves_the_preview_in_whole_steps() {
    let wall = wall();
    let mut snapper = GridSnapper::new(STEP).unwrap();

    // Anchor straight ahead.
    let anchor = snapper.update(wall.hit_test(&Ray::new(Vec3::ZERO, Vec3::NEG_Z)));
    assert!(matches!(anchor, SnapUpdate::Moved(_)));

    // Creep sideways; at 3m depth, x = 3 * dx / dz per unit of direction.
    let mut moves = 0;
    for i in 1..=30 {
        let dx = i as f32 * 0.001; // up to 0.09m of wall travel
        let update = snapper.update(wall.hit_test(&Ray::new(Vec3::ZERO, Vec3::new(dx, 0.0, -1.0))));
        if matches!(update, SnapUpdate::Moved(_)) {
            moves += 1;
        }
    }
    assert_eq!(moves, 0, "sub-step drift must not move the preview");

    // Crossing a full step moves it exactly once, by exactly one step.
    let update = snapper.update(wall.hit_test(&Ray::new(Vec3::ZERO, Vec3::new(0.04, 0.0, -1.0))));
    let SnapUpdate::Moved(pose) = update else {
        panic!("expected the preview to move");
    };
    let travel = pose.translation.x;
    assert!(
        (travel.abs() - STEP).abs() < 1e-4,
        "expected one grid step of travel, got {travel}"
    );
}

#[test]
fn leaving_the_wall_hides_and_re_anchors() {
    let wall = wall();
    let mut snapper = GridSnapper::new(STEP).unwrap();

    snapper.update(wall.hit_test(&Ray::new(Vec3::ZERO, Vec3::NEG_Z)));

    // Pointer swings off the wall entirely.
    let miss = snapper.update(NoSurfaces.hit_test(&Ray::new(Vec3::ZERO, Vec3::NEG_Z)));
    assert_eq!(miss, SnapUpdate::Hidden);
    assert_eq!(snapper.current_pose(), None);

    // Coming back re-anchors at the raw hit even at a tiny offset.
    let update = snapper.update(wall.hit_test(&Ray::new(Vec3::ZERO, Vec3::new(0.003, 0.0, -1.0))));
    assert!(matches!(update, SnapUpdate::Moved(_)));
}

#[test]
fn surface_identity_change_re_anchors() {
    let near = wall();
    let far = FixtureWall {
        depth: -5.0,
        surface: SurfaceId(2),
    };
    let mut snapper = GridSnapper::new(STEP).unwrap();

    snapper.update(near.hit_test(&Ray::new(Vec3::ZERO, Vec3::NEG_Z)));

    // Same ray, different wall: snap immediately to the new surface.
    let update = snapper.update(far.hit_test(&Ray::new(Vec3::ZERO, Vec3::new(0.02, 0.0, -1.0))));
    let SnapUpdate::Moved(pose) = update else {
        panic!("expected a re-anchor on the new wall");
    };
    assert!((pose.translation.z - -5.0).abs() < 1e-4);
}
