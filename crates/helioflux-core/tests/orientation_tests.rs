// Host-side tests for the component viewer's drag state machine.

use glam::Vec2;
use helioflux_core::orientation::*;

#[test]
fn starts_at_reset_orientation() {
    let ctl = OrientationController::new();
    assert_eq!(ctl.orientation(), Orientation { pitch: -15.0, yaw: 15.0 });
    assert!(!ctl.is_dragging());
    assert_eq!(
        ctl.orientation().css_transform(),
        "translate(-50%, -50%) rotateX(-15deg) rotateY(15deg)"
    );
}

#[test]
fn moves_without_drag_are_ignored() {
    let mut ctl = OrientationController::new();
    assert!(ctl.drag_to(Vec2::new(100.0, 100.0)).is_none());
    assert_eq!(ctl.orientation(), Orientation::default());
}

#[test]
fn deltas_are_taken_from_previous_move() {
    let mut ctl = OrientationController::new();
    ctl.begin_drag(Vec2::new(0.0, 0.0));

    let o = ctl.drag_to(Vec2::new(10.0, 0.0)).unwrap();
    assert_eq!(o.yaw, 20.0);
    assert_eq!(o.pitch, -15.0);

    // Anchor moved to (10, 0): only the new 20px of vertical travel counts
    let o = ctl.drag_to(Vec2::new(10.0, 20.0)).unwrap();
    assert_eq!(o.yaw, 20.0);
    assert_eq!(o.pitch, -25.0);
}

#[test]
fn pitch_is_clamped_and_yaw_accumulates() {
    let mut ctl = OrientationController::new();
    let moves = [
        (40.0, -300.0),
        (-15.0, 500.0),
        (300.0, -80.0),
        (-7.0, 1000.0),
        (1.0, -2000.0),
        (720.0, 3.0),
    ];
    let mut pos = Vec2::ZERO;
    let mut expected_yaw = 15.0;
    ctl.begin_drag(pos);
    for (dx, dy) in moves {
        pos += Vec2::new(dx, dy);
        expected_yaw += 0.5 * dx;
        let o = ctl.drag_to(pos).unwrap();
        assert!((-60.0..=60.0).contains(&o.pitch), "pitch {} out of range", o.pitch);
        assert_eq!(o.yaw, expected_yaw);
    }
}

#[test]
fn release_ends_drag() {
    let mut ctl = OrientationController::new();
    assert!(!ctl.end_drag());
    ctl.begin_drag(Vec2::new(5.0, 5.0));
    assert!(ctl.is_dragging());
    assert!(ctl.end_drag());
    assert!(!ctl.is_dragging());
    assert!(ctl.drag_to(Vec2::new(50.0, 50.0)).is_none());
}

#[test]
fn auto_rotate_suspends_manual_orientation() {
    let mut ctl = OrientationController::new();
    ctl.begin_drag(Vec2::ZERO);
    ctl.drag_to(Vec2::new(20.0, 0.0));
    let before = ctl.orientation();

    assert!(ctl.toggle_auto_rotate());
    assert!(ctl.drag_to(Vec2::new(200.0, 200.0)).is_none());
    assert_eq!(ctl.orientation(), before);

    assert!(!ctl.toggle_auto_rotate());
    // Resumes from the last manual values, anchored at the latest pointer
    let o = ctl.drag_to(Vec2::new(210.0, 200.0)).unwrap();
    assert_eq!(o.yaw, before.yaw + 5.0);
    assert_eq!(o.pitch, before.pitch);
}

#[test]
fn exploded_toggle_is_independent_of_orientation() {
    let mut ctl = OrientationController::new();
    assert!(ctl.toggle_exploded());
    assert_eq!(ctl.orientation(), Orientation::default());
    assert!(!ctl.toggle_exploded());
}

#[test]
fn select_highlights_one_component() {
    let mut ctl = OrientationController::new();
    let info = ctl.select("40mm Cooling Fan");
    assert_eq!(info.name, "40mm Cooling Fan");
    assert!(info.description.starts_with("5V brushless cooling fan"));
    assert_eq!(ctl.highlighted(), Some("40mm Cooling Fan"));

    let info = ctl.select("Flux Capacitor");
    assert_eq!(info.description, GENERIC_COMPONENT_DESCRIPTION);
    assert_eq!(ctl.highlighted(), Some("Flux Capacitor"));
}

#[test]
fn catalog_names_are_unique_and_described() {
    for (i, (name, desc)) in COMPONENT_CATALOG.iter().enumerate() {
        assert!(!desc.is_empty());
        assert_eq!(describe_component(name), *desc);
        assert!(
            COMPONENT_CATALOG[i + 1..].iter().all(|(n, _)| n != name),
            "duplicate catalog entry {name}"
        );
    }
}

#[test]
fn reset_restores_everything() {
    let mut ctl = OrientationController::new();
    ctl.begin_drag(Vec2::ZERO);
    ctl.drag_to(Vec2::new(33.0, -41.0));
    ctl.end_drag();
    ctl.toggle_auto_rotate();
    ctl.toggle_exploded();
    ctl.select("Aluminum Heat Sinks");

    ctl.reset();
    assert_eq!(ctl.orientation(), Orientation { pitch: -15.0, yaw: 15.0 });
    assert!(!ctl.auto_rotate());
    assert!(!ctl.exploded());
    assert_eq!(ctl.highlighted(), None);
}
