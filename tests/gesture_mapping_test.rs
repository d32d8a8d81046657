//! Integration tests for pointer-to-section mapping in the navigator
//!
//! Uses a reference measurement of the first row at y=100 with a row height
//! of 40, so row `i` covers `100 + 40*i .. 100 + 40*(i+1)`.

use alphalist::model::{LayoutMeasurement, NavSection, SelectSource};
use alphalist::ui::SectionIndexNavigator;

fn navigator(active: &[bool]) -> SectionIndexNavigator {
    let mut nav = SectionIndexNavigator::new();
    nav.set_sections(
        active
            .iter()
            .enumerate()
            .map(|(i, &active)| NavSection {
                key: char::from(b'A' + i as u8).to_string(),
                active,
            })
            .collect(),
    );
    nav.schedule_measurement(LayoutMeasurement {
        y: 100,
        width: 3,
        height: 40,
    });
    assert!(nav.tick(), "measurement should resolve on the first tick");
    nav
}

fn fired_key(selection: Option<alphalist::model::NavSelection>) -> Option<String> {
    selection.map(|s| {
        assert_eq!(s.source, SelectSource::Touch);
        s.key
    })
}

/// Test: 185 falls in row floor((185-100)/40) = 2 and fires once per gesture
#[test]
fn test_move_fires_section_once() {
    let mut nav = navigator(&[false, true, true, false, true]);

    assert_eq!(fired_key(nav.on_grant(185)), Some("C".to_string()));
    assert_eq!(fired_key(nav.on_move(185)), None, "same row must not fire twice");
    assert_eq!(fired_key(nav.on_move(199)), None, "still row 2");
    assert_eq!(nav.gesture().last_selected(), Some(2));
}

/// Test: pointer above the first row is ignored
#[test]
fn test_pointer_above_first_row_ignored() {
    let mut nav = navigator(&[true, true, true, true, true]);

    assert_eq!(fired_key(nav.on_grant(50)), None);
    assert_eq!(nav.gesture().last_selected(), None);
    assert!(nav.gesture().is_tracking());
}

/// Test: an inactive row fires nothing and leaves the tracker alone
#[test]
fn test_inactive_section_keeps_tracker() {
    let mut nav = navigator(&[true, true, false, true, true]);

    assert_eq!(fired_key(nav.on_grant(110)), Some("A".to_string()));
    assert_eq!(fired_key(nav.on_move(150)), Some("B".to_string()));

    // Row 2 is empty
    assert_eq!(fired_key(nav.on_move(185)), None);
    assert_eq!(nav.gesture().last_selected(), Some(1));

    // Back to row 1: still the last fired index, so no repeat
    assert_eq!(fired_key(nav.on_move(150)), None);

    // Back to row 0: differs from the last fired index
    assert_eq!(fired_key(nav.on_move(110)), Some("A".to_string()));
}

/// Test: releasing resets the tracker so the next gesture fires again
#[test]
fn test_release_resets_tracker() {
    let mut nav = navigator(&[true, true, true, true, true]);

    assert_eq!(fired_key(nav.on_grant(185)), Some("C".to_string()));
    nav.on_release();
    assert!(!nav.gesture().is_tracking());
    assert_eq!(nav.gesture().last_selected(), None);

    assert_eq!(fired_key(nav.on_grant(185)), Some("C".to_string()));
}

/// Test: pointer below the last row clamps to the last section
#[test]
fn test_pointer_below_last_row_clamps() {
    let mut nav = navigator(&[true, true, true, true, true]);
    assert_eq!(fired_key(nav.on_grant(1000)), Some("E".to_string()));
}

/// Test: without a measurement every gesture is ignored
#[test]
fn test_unmeasured_navigator_ignores_gestures() {
    let mut nav = SectionIndexNavigator::new();
    nav.set_sections(vec![NavSection {
        key: "A".to_string(),
        active: true,
    }]);

    assert_eq!(nav.on_grant(0), None);
    assert_eq!(nav.on_move(5), None);
}

/// Test: a direct select resets the tracker mid-gesture
#[test]
fn test_direct_select_resets_tracker() {
    let mut nav = navigator(&[true, true, true, true, true]);

    assert_eq!(fired_key(nav.on_grant(185)), Some("C".to_string()));
    let selection = nav.select("A");
    assert_eq!(selection.source, SelectSource::Direct);
    assert_eq!(selection.key, "A");

    assert_eq!(fired_key(nav.on_move(185)), Some("C".to_string()));
}
