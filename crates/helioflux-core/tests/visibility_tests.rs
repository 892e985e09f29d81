// Host-side tests for first-time visibility tracking.

use helioflux_core::visibility::{ObserverOptions, VisibilityObserver};
use helioflux_core::{Category, CoreError, ElementId, LazyKind};

#[test]
fn default_options_match_observer_setup() {
    let opts = ObserverOptions::default();
    assert_eq!(opts.threshold, 0.1);
    assert_eq!(opts.root_margin(), "0px 0px -50px 0px");
}

#[test]
fn enters_once_per_element() {
    let mut obs = VisibilityObserver::default();
    let a = obs.observe(Category::Reveal);
    let b = obs.observe(Category::Stat);

    assert!(obs.report(a, false).unwrap().is_none());
    let fired = obs.report(a, true).unwrap().map(|el| el.id);
    assert_eq!(fired, Some(a));

    // Leaving and re-entering never fires again
    assert!(obs.report(a, true).unwrap().is_none());
    assert!(obs.report(a, false).unwrap().is_none());
    assert!(obs.report(a, true).unwrap().is_none());
    assert!(obs.get(a).unwrap().has_fired());

    assert!(!obs.get(b).unwrap().has_fired());
}

#[test]
fn arbitrary_report_sequences_fire_at_most_once() {
    let patterns: [&[bool]; 4] = [
        &[true, true, true],
        &[false, true, false, true, false, true],
        &[false, false, false],
        &[true, false, true, false],
    ];
    for pattern in patterns {
        let mut obs = VisibilityObserver::default();
        let id = obs.observe(Category::ChartBar);
        let fired = pattern
            .iter()
            .filter(|v| obs.report(id, **v).unwrap().is_some())
            .count();
        let expected = usize::from(pattern.contains(&true));
        assert_eq!(fired, expected, "pattern {pattern:?}");
    }
}

#[test]
fn unknown_element_is_an_error() {
    let mut obs = VisibilityObserver::default();
    assert_eq!(
        obs.report(ElementId(3), true).unwrap_err(),
        CoreError::UnknownElement(ElementId(3))
    );
}

#[test]
fn enter_all_skips_elements_that_already_fired() {
    let mut obs = VisibilityObserver::default();
    let a = obs.observe(Category::Reveal);
    let b = obs.observe(Category::Lazy(LazyKind::Content));
    let c = obs.observe(Category::Stat);
    obs.report(a, true).unwrap();

    let entered = obs.enter_all();
    assert_eq!(
        entered,
        vec![(b, Category::Lazy(LazyKind::Content)), (c, Category::Stat)]
    );
    assert!(obs.enter_all().is_empty());
    assert!(obs.report(b, true).unwrap().is_none());
}
