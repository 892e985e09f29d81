// Host-side tests for section tracking and navbar state.

use helioflux_core::scroll::*;

fn sections() -> Vec<Section> {
    [("hero", 0.0), ("features", 800.0), ("pricing", 1600.0)]
        .into_iter()
        .map(|(id, top)| Section {
            id: id.to_string(),
            top,
        })
        .collect()
}

#[test]
fn current_section_uses_look_ahead() {
    let tracker = ScrollTracker::new(sections());
    let at = |offset| tracker.current_section(offset).map(|s| s.id.as_str());
    assert_eq!(at(0.0), Some("hero"));
    assert_eq!(at(599.0), Some("hero"));
    assert_eq!(at(600.0), Some("features"));
    assert_eq!(at(1400.0), Some("pricing"));
    assert_eq!(at(9000.0), Some("pricing"));
}

#[test]
fn no_section_before_first_top() {
    let tracker = ScrollTracker::new(vec![Section {
        id: "about".into(),
        top: 500.0,
    }]);
    assert!(tracker.current_section(0.0).is_none());
    assert!(ScrollTracker::default().current_section(100.0).is_none());
}

#[test]
fn update_reports_only_changes() {
    let mut tracker = ScrollTracker::new(sections());
    assert_eq!(
        tracker.update(0.0).into_vec(),
        vec![ScrollChange::ActiveSection(Some("hero".into()))]
    );
    assert!(tracker.update(10.0).is_empty());
    assert_eq!(
        tracker.update(60.0).into_vec(),
        vec![ScrollChange::NavbarScrolled(true)]
    );
    assert_eq!(
        tracker.update(700.0).into_vec(),
        vec![
            ScrollChange::ActiveSection(Some("features".into())),
            ScrollChange::BodyScrolledDown(true),
        ]
    );
    assert_eq!(tracker.active(), Some("features"));
    assert_eq!(
        tracker.update(0.0).into_vec(),
        vec![
            ScrollChange::ActiveSection(Some("hero".into())),
            ScrollChange::NavbarScrolled(false),
            ScrollChange::BodyScrolledDown(false),
        ]
    );
}

#[test]
fn parallax_and_scroll_target() {
    let p = parallax(100.0);
    assert_eq!(p.background_y, -50.0);
    assert!((p.particles_y + 30.0).abs() < 1e-9);
    assert_eq!(scroll_target(800.0), 720.0);
}
