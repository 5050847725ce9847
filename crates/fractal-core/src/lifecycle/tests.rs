//! Tests for the fractal lifecycle state machine.

use super::*;
use crate::hierarchy::{Depth, LevelTable};
use crate::instancing::InstanceTransform;
use crate::placement::Placement;
use crate::testing::{RecordedBuffer, RecordingBackend, RecordingTarget};
use fractal_common::{FractalError, InstanceError};
use glam::{Quat, Vec3};

type Lifecycle = FractalLifecycle<RecordedBuffer, &'static str>;

fn depth(n: u8) -> Depth {
    Depth::clamped(n)
}

#[test]
fn starts_inactive_without_buffers() {
    let lifecycle = Lifecycle::new(depth(3), "cube");
    assert!(!lifecycle.is_active());
    assert!(lifecycle.table().is_none());
    assert!(lifecycle.bounds().is_none());
    assert_eq!(lifecycle.stats().draw_calls, 0);
}

#[test]
fn enable_builds_table_and_buffers() {
    let mut backend = RecordingBackend::default();
    let mut lifecycle = Lifecycle::new(depth(3), "cube");

    lifecycle.enable(&mut backend).unwrap();

    assert!(lifecycle.is_active());
    assert_eq!(lifecycle.table().unwrap().level_sizes(), vec![1, 5, 25]);
    assert_eq!(backend.live_capacities(), vec![1, 5, 25]);
}

#[test]
fn enable_twice_is_noop() {
    let mut backend = RecordingBackend::default();
    let mut lifecycle = Lifecycle::new(depth(2), "cube");
    lifecycle.enable(&mut backend).unwrap();
    lifecycle.enable(&mut backend).unwrap();
    assert_eq!(backend.created, 2);
}

#[test]
fn disable_releases_everything() {
    let mut backend = RecordingBackend::default();
    let mut lifecycle = Lifecycle::new(depth(4), "cube");
    lifecycle.enable(&mut backend).unwrap();

    lifecycle.disable(&mut backend);

    assert!(!lifecycle.is_active());
    assert_eq!(backend.live_count(), 0);
    assert_eq!(backend.released, 4);

    // Disabling again changes nothing.
    lifecycle.disable(&mut backend);
    assert_eq!(backend.released, 4);
}

#[test]
fn inactive_tick_and_draw_do_nothing() {
    let mut backend = RecordingBackend::default();
    let mut target: RecordingTarget<&str> = RecordingTarget::default();
    let mut lifecycle = Lifecycle::new(depth(3), "cube");

    lifecycle.tick(0.016, &Placement::IDENTITY, &mut backend);
    lifecycle.draw(&mut target);

    assert!(backend.writes.is_empty());
    assert!(target.calls.is_empty());
}

#[test]
fn depth_one_draws_single_root_instance() {
    let mut backend = RecordingBackend::default();
    let mut target: RecordingTarget<&str> = RecordingTarget::default();
    let mut lifecycle = Lifecycle::new(depth(1), "cube");
    lifecycle.enable(&mut backend).unwrap();

    let placement = Placement::new(Vec3::new(0.5, 1.0, -2.0), Quat::from_rotation_y(0.3));
    lifecycle.tick(0.0, &placement, &mut backend);
    lifecycle.draw(&mut target);

    assert_eq!(target.calls.len(), 1);
    assert_eq!(target.calls[0].instance_count, 1);
    assert_eq!(target.calls[0].resource, "cube");

    let m = backend.writes[0].instances[0];
    let expected = InstanceTransform::new(placement.position, placement.rotation, 1.0);
    for (col, exp) in m.model.iter().zip(expected.model.iter()) {
        for (a, b) in col.iter().zip(exp.iter()) {
            assert!((a - b).abs() < 1e-5);
        }
    }
}

#[test]
fn draw_bounds_follow_root() {
    let mut backend = RecordingBackend::default();
    let mut target: RecordingTarget<&str> = RecordingTarget::default();
    let mut lifecycle = Lifecycle::new(depth(3), "cube");
    lifecycle.enable(&mut backend).unwrap();

    let placement = Placement::new(Vec3::new(4.0, 0.0, 0.0), Quat::IDENTITY);
    lifecycle.tick(0.5, &placement, &mut backend);
    lifecycle.draw(&mut target);

    assert_eq!(target.calls.len(), 3);
    for call in &target.calls {
        assert_eq!(call.bounds.center, placement.position);
        assert_eq!(call.bounds.half_extent, Vec3::splat(1.5));
    }
    let table = lifecycle.table().unwrap();
    let bounds = lifecycle.bounds().unwrap();
    for level in table.levels() {
        for part in level.parts() {
            assert!(bounds.contains(part.world_position));
        }
    }
}

#[test]
fn set_same_depth_is_noop() {
    let mut backend = RecordingBackend::default();
    let mut lifecycle = Lifecycle::new(depth(3), "cube");
    lifecycle.enable(&mut backend).unwrap();

    lifecycle.set_depth(depth(3), &mut backend).unwrap();

    assert_eq!(backend.created, 3);
    assert_eq!(backend.released, 0);
}

#[test]
fn depth_change_while_active_rebuilds() {
    let mut backend = RecordingBackend::default();
    let mut lifecycle = Lifecycle::new(depth(3), "cube");
    lifecycle.enable(&mut backend).unwrap();
    lifecycle.tick(1.0, &Placement::IDENTITY, &mut backend);

    lifecycle.set_depth(depth(5), &mut backend).unwrap();

    assert!(lifecycle.is_active());
    assert_eq!(lifecycle.depth(), depth(5));
    assert_eq!(backend.released, 3);
    assert_eq!(backend.live_capacities(), vec![1, 5, 25, 125, 625]);
    // Rebuilt from scratch: spin restarts at zero.
    assert_eq!(lifecycle.table().unwrap().root().spin_angle, 0.0);
}

#[test]
fn depth_change_while_inactive_only_records_depth() {
    let mut backend = RecordingBackend::default();
    let mut lifecycle = Lifecycle::new(depth(3), "cube");

    lifecycle.set_depth(depth(6), &mut backend).unwrap();

    assert!(!lifecycle.is_active());
    assert_eq!(backend.created, 0);

    lifecycle.enable(&mut backend).unwrap();
    assert_eq!(lifecycle.table().unwrap().depth(), depth(6));
}

#[test]
fn resource_change_while_active_rebuilds() {
    let mut backend = RecordingBackend::default();
    let mut target: RecordingTarget<&str> = RecordingTarget::default();
    let mut lifecycle = Lifecycle::new(depth(2), "cube");
    lifecycle.enable(&mut backend).unwrap();

    lifecycle.set_resource("sphere", &mut backend).unwrap();
    lifecycle.tick(0.0, &Placement::IDENTITY, &mut backend);
    lifecycle.draw(&mut target);

    assert_eq!(backend.released, 2);
    assert_eq!(backend.live_count(), 2);
    assert!(target.calls.iter().all(|c| c.resource == "sphere"));
}

#[test]
fn failed_enable_leaks_nothing_and_stays_inactive() {
    let mut backend = RecordingBackend::failing_at(2);
    let mut lifecycle = Lifecycle::new(depth(4), "cube");

    let err = lifecycle.enable(&mut backend).unwrap_err();

    assert!(matches!(
        err,
        FractalError::Instance(InstanceError::Allocation { level: 2, .. })
    ));
    assert!(!lifecycle.is_active());
    assert_eq!(backend.live_count(), 0);
    assert_eq!(backend.created, backend.released);

    // A later attempt succeeds once the backend recovers.
    lifecycle.enable(&mut backend).unwrap();
    assert!(lifecycle.is_active());
    assert_eq!(backend.live_count(), 4);
}

#[test]
fn failed_rebuild_ends_inactive() {
    // Depth 2 uses attempts 0 and 1; the rebuild to depth 3 fails on its second buffer.
    let mut backend = RecordingBackend::failing_at(3);
    let mut lifecycle = Lifecycle::new(depth(2), "cube");
    lifecycle.enable(&mut backend).unwrap();

    let err = lifecycle.set_depth(depth(3), &mut backend).unwrap_err();

    assert!(matches!(
        err,
        FractalError::Instance(InstanceError::Allocation { level: 1, .. })
    ));
    assert!(!lifecycle.is_active());
    assert_eq!(lifecycle.depth(), depth(3));
    assert_eq!(backend.live_count(), 0);
}

#[test]
fn disable_enable_cycle_reproduces_initial_state() {
    let mut backend = RecordingBackend::default();
    let mut lifecycle = Lifecycle::new(depth(4), "cube");

    lifecycle.enable(&mut backend).unwrap();
    let fresh = lifecycle.table().unwrap().clone();
    lifecycle.tick(2.5, &Placement::IDENTITY, &mut backend);

    for _ in 0..3 {
        lifecycle.disable(&mut backend);
        lifecycle.enable(&mut backend).unwrap();
    }

    assert_eq!(lifecycle.table().unwrap(), &fresh);
    assert_eq!(fresh, LevelTable::build(depth(4)));
    assert_eq!(backend.live_count(), 4);
    assert_eq!(backend.created - backend.released, 4);
}

#[test]
fn stats_track_last_frame() {
    let mut backend = RecordingBackend::default();
    let mut target: RecordingTarget<&str> = RecordingTarget::default();
    let mut lifecycle = Lifecycle::new(depth(3), "cube");
    lifecycle.enable(&mut backend).unwrap();

    lifecycle.tick(0.016, &Placement::IDENTITY, &mut backend);
    lifecycle.draw(&mut target);

    let stats = lifecycle.stats();
    assert_eq!(stats.draw_calls, 3);
    assert_eq!(stats.instances, 31);
    assert_eq!(stats.bytes_uploaded, 31 * 64);
}
