// Host-side tests for counter parsing, formatting and count-up stepping.

use helioflux_core::counter::{format_value, step_interval, value_at, CounterSpec};
use helioflux_core::CoreError;
use std::time::Duration;

#[test]
fn parse_splits_number_and_suffix() {
    let spec = CounterSpec::parse("85%").unwrap();
    assert_eq!(spec.target(), 85.0);
    assert_eq!(spec.suffix(), "%");
    assert_eq!(spec.initial_text(), "0%");

    let spec = CounterSpec::parse("2.5K+").unwrap();
    assert_eq!(spec.target(), 2.5);
    assert_eq!(spec.suffix(), "K+");

    let spec = CounterSpec::parse("1200").unwrap();
    assert_eq!(spec.target(), 1200.0);
    assert_eq!(spec.suffix(), "");
}

#[test]
fn parse_rejects_text_without_digits() {
    assert_eq!(
        CounterSpec::parse("N/A").unwrap_err(),
        CoreError::InvalidCounterText("N/A".to_string())
    );
    assert!(CounterSpec::parse(".").is_err());
}

#[test]
fn format_value_policy() {
    assert_eq!(format_value(0.0), "0");
    assert_eq!(format_value(42.0), "42");
    assert_eq!(format_value(12.34), "12.3");
    assert_eq!(format_value(0.25), "0.3"); // ties round up
    assert_eq!(format_value(2.75), "2.8");
    assert_eq!(format_value(0.35), "0.3"); // stored just below the tie
    assert_eq!(format_value(1.45), "1.4");
    assert_eq!(format_value(1250.0), "1.3K");
    assert_eq!(format_value(999.9), "999.9");
    assert_eq!(format_value(1000.0), "1.0K");
    assert_eq!(format_value(1500.0), "1.5K");
    assert_eq!(format_value(22_700.0), "22.7K");
}

#[test]
fn value_at_is_pinned_on_last_step() {
    assert_eq!(value_at(0, 60, 85.0), 0.0);
    assert_eq!(value_at(30, 60, 85.0), 42.5);
    assert_eq!(value_at(60, 60, 0.1 * 3.0), 0.1 * 3.0);
    assert_eq!(value_at(75, 60, 85.0), 85.0);
}

#[test]
fn step_interval_spreads_duration() {
    let dt = step_interval(Duration::from_millis(2000), 60);
    assert!((dt.as_secs_f64() - 2.0 / 60.0).abs() < 1e-6);
    assert_eq!(step_interval(Duration::from_millis(100), 0), Duration::from_millis(100));
}

#[test]
fn count_up_ends_exactly_on_target_and_never_decreases() {
    let cases = [
        ("0", 0.0),
        ("1", 1.0),
        ("7+", 7.0),
        ("85%", 85.0),
        ("99.9%", 99.9),
        ("150", 150.0),
        ("1000+", 1000.0),
        ("2500", 2500.0),
        ("12345.6", 12345.6),
    ];
    for (text, target) in cases {
        let mut spec = CounterSpec::parse(text).unwrap();
        assert!(spec.start());
        let mut prev = 0.0;
        let mut last = String::new();
        let mut steps = 0;
        while !spec.is_animated() {
            last = spec.advance().expect("counting");
            assert!(spec.current() >= prev, "{text}: value decreased");
            prev = spec.current();
            steps += 1;
            assert!(steps <= 60, "{text}: too many steps");
        }
        assert_eq!(spec.current(), target);
        assert_eq!(last, format!("{}{}", format_value(target), spec.suffix()));
    }
}

#[test]
fn zero_target_finishes_on_first_step() {
    let mut spec = CounterSpec::parse("0%").unwrap();
    spec.start();
    assert_eq!(spec.advance().as_deref(), Some("0%"));
    assert!(spec.is_animated());
}

#[test]
fn start_is_idempotent() {
    let mut spec = CounterSpec::parse_with_steps("40%", 4).unwrap();
    assert!(!spec.is_started());
    assert!(spec.start());
    assert!(!spec.start());
    while spec.advance().is_some() {}
    let shown = spec.display();
    assert_eq!(shown, "40%");

    // A finished counter neither restarts nor changes its text
    assert!(!spec.start());
    assert!(spec.advance().is_none());
    assert_eq!(spec.display(), shown);
}

#[test]
fn first_step_rounds_like_the_browser() {
    // 21 / 60 = 0.35, which is stored as 0.34999...
    let mut spec = CounterSpec::parse("21").unwrap();
    assert!(spec.start());
    assert_eq!(spec.advance().as_deref(), Some("0.3"));
}
