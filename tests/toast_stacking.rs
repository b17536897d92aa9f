// SPDX-License-Identifier: MPL-2.0
//! Toast stacking and dismissal across a sequence of copy actions.

use demo_preview::config::{DEFAULT_TOAST_DISMISS_MS, TOAST_EXIT_MS};
use demo_preview::ui::notifications::{stacking_offset, Phase, ToastRegistry};
use std::time::{Duration, Instant};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn three_rapid_toasts_stack_downwards() {
    let start = Instant::now();
    let mut registry = ToastRegistry::new("Copied!");

    let ids: Vec<_> = (0..3)
        .map(|i| registry.open(None, start + ms(i * 50)))
        .collect();

    let offsets: Vec<f32> = ids
        .iter()
        .map(|id| registry.get(*id).expect("open").top_offset())
        .collect();
    assert_eq!(offsets, vec![10.0, 62.0, 114.0]);
    assert_eq!(offsets[1], stacking_offset(1));
    assert!(registry.active().all(|t| t.content() == "Copied!"));
}

#[test]
fn toast_hides_after_dismiss_delay_and_is_removed_after_exit() {
    let start = Instant::now();
    let mut registry = ToastRegistry::new("Copied!");
    let id = registry.open(None, start);

    assert!(registry.tick(start + ms(DEFAULT_TOAST_DISMISS_MS - 1)).is_empty());
    assert!(registry.get(id).expect("still open").is_visible());

    let hide_at = start + ms(DEFAULT_TOAST_DISMISS_MS);
    assert!(registry.tick(hide_at).is_empty());
    assert!(matches!(
        registry.get(id).expect("still open").phase(),
        Phase::Hiding { .. }
    ));

    let removed = registry.tick(hide_at + ms(TOAST_EXIT_MS));
    assert_eq!(removed, vec![id]);
    assert!(registry.is_empty());
    assert!(!registry.has_pending_work());
}

#[test]
fn removal_is_by_identity_and_keeps_other_offsets() {
    let start = Instant::now();
    let mut registry = ToastRegistry::new("Copied!");

    let first = registry.open(None, start);
    let second = registry.open(None, start + ms(1000));
    let third = registry.open(None, start + ms(2000));

    // Only the first toast is due.
    let hide_first = start + ms(DEFAULT_TOAST_DISMISS_MS);
    registry.tick(hide_first);
    let removed = registry.tick(hide_first + ms(TOAST_EXIT_MS));

    assert_eq!(removed, vec![first]);
    assert!(registry.get(first).is_none());
    assert_eq!(registry.get(second).expect("open").top_offset(), 62.0);
    assert_eq!(registry.get(third).expect("open").top_offset(), 114.0);

    // A new toast takes the offset for the current depth.
    let fourth = registry.open(None, hide_first + ms(TOAST_EXIT_MS));
    assert_eq!(registry.get(fourth).expect("open").top_offset(), 114.0);
}

#[test]
fn explicit_content_overrides_default() {
    let start = Instant::now();
    let mut registry = ToastRegistry::new("Copied!");
    let id = registry.open(Some("Settings could not be read".to_string()), start);
    assert_eq!(
        registry.get(id).expect("open").content(),
        "Settings could not be read"
    );
}
