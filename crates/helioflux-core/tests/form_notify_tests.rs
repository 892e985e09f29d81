// Host-side tests for required-field checks and notification kinds.

use helioflux_core::form::check_required;
use helioflux_core::notify::NotificationQueue;
use helioflux_core::NotificationKind;
use std::time::Duration;

#[test]
fn blank_required_fields_fail() {
    let check = check_required(["Ada", "   ", "ada@example.com", ""]);
    assert_eq!(check.blank, vec![false, true, false, true]);
    assert!(!check.is_valid());

    assert!(check_required(["x", " y "]).is_valid());
    assert!(check_required(std::iter::empty()).is_valid());
}

#[test]
fn kinds_parse_with_info_fallback() {
    assert_eq!(NotificationKind::parse("success"), NotificationKind::Success);
    assert_eq!(NotificationKind::parse("ERROR"), NotificationKind::Error);
    assert_eq!(NotificationKind::parse("warning"), NotificationKind::Info);
    assert_eq!(NotificationKind::parse(""), NotificationKind::Info);
    assert_eq!(NotificationKind::Success.background(), "#10B981");
    assert_eq!(NotificationKind::Error.as_str(), "error");
}

#[test]
fn queue_is_unbounded_and_keeps_duplicates() {
    let mut queue = NotificationQueue::new();
    let ids: Vec<_> = (0..50)
        .map(|i| queue.push("same", NotificationKind::Info, Duration::from_millis(i)).id)
        .collect();
    assert_eq!(queue.len(), 50);
    assert!(queue.iter().all(|n| n.message == "same"));

    let removed = queue.remove(ids[10]).unwrap();
    assert_eq!(removed.created_at, Duration::from_millis(10));
    assert!(queue.remove(ids[10]).is_none());
    assert_eq!(queue.len(), 49);
}
