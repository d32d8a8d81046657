//! Integration tests for the sectioned list view
//!
//! Renders through ratatui's TestBackend on a 20x8 terminal. With five
//! one-letter sections the navigator strip sits at columns 16..19, rows 1..7,
//! one row per section starting at y=1.

use std::cell::RefCell;
use std::rc::Rc;

use alphalist::model::{ListConfig, ScrollOutcome, SectionMap};
use alphalist::ui::SectionedListView;
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};

const NAV_X: u16 = 17;

fn data() -> SectionMap<String> {
    let section = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    [
        ("A", section(&["Ada", "Alan"])),
        ("B", section(&[])),
        ("C", section(&["Cleo"])),
        ("D", section(&["Dan", "Dee", "Dot"])),
        ("E", section(&["Eve"])),
    ]
    .into_iter()
    .collect()
}

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(20, 8)).unwrap()
}

fn draw(terminal: &mut Terminal<TestBackend>, view: &mut SectionedListView<String>) {
    terminal
        .draw(|f| {
            let area = f.area();
            view.render(f, area);
        })
        .unwrap();
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn recording_view() -> (SectionedListView<String>, Rc<RefCell<Vec<String>>>) {
    let jumps = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&jumps);
    let view = SectionedListView::new(ListConfig::new(1), data())
        .on_scroll_to_section(move |key| sink.borrow_mut().push(key.to_string()));
    (view, jumps)
}

/// Test: sections come out in the order the keys were inserted
#[test]
fn test_sections_keep_key_order() {
    let view = SectionedListView::new(ListConfig::new(1), data());
    let keys: Vec<_> = view.sections().iter().map(|s| s.key).collect();
    assert_eq!(keys, vec!["A", "B", "C", "D", "E"]);

    let active: Vec<_> = view.sections().iter().map(|s| s.is_active()).collect();
    assert_eq!(active, vec![true, false, true, true, true]);
}

/// Test: only the first section uses the configured item height
#[test]
fn test_item_height_lookup() {
    let view = SectionedListView::new(ListConfig::new(3), data());
    assert_eq!(view.item_height(0, 0), 3);
    assert_eq!(view.item_height(0, 1), 3);
    assert_eq!(view.item_height(2, 0), 1);
    assert_eq!(view.item_height(4, 0), 1);
}

/// Test: scrolling before the first render does nothing
#[test]
fn test_scroll_before_render_is_detached() {
    let (mut view, jumps) = recording_view();
    assert_eq!(view.scroll_to_section("C"), ScrollOutcome::Detached);
    assert!(jumps.borrow().is_empty());
}

/// Test: unknown keys leave the list alone and skip the callback
#[test]
fn test_scroll_to_unknown_section() {
    let (mut view, jumps) = recording_view();
    let mut terminal = terminal();
    draw(&mut terminal, &mut view);

    assert_eq!(view.scroll_to_section("Z"), ScrollOutcome::UnknownSection);
    assert_eq!(view.list().map(|l| l.offset()), Some(0));
    assert!(jumps.borrow().is_empty());
}

/// Test: scrolling to a section animates to its first item under the sticky header
#[test]
fn test_scroll_to_section_animates_and_notifies() {
    let (mut view, jumps) = recording_view();
    let mut terminal = terminal();
    draw(&mut terminal, &mut view);

    // C header at 4, Cleo at 5; one header row stays pinned on top
    assert_eq!(
        view.scroll_to_section("C"),
        ScrollOutcome::Scrolled {
            section_index: 2,
            offset: 4
        }
    );
    assert_eq!(*jumps.borrow(), vec!["C".to_string()]);

    let list = view.list().unwrap();
    assert!(list.is_animating());
    assert_eq!(list.target_offset(), 4);

    while view.tick() {}
    assert_eq!(view.list().map(|l| l.offset()), Some(4));
    assert_eq!(view.current_section(), Some("C"));
}

/// Test: headers and labels are drawn, the navigator over the list
#[test]
fn test_render_draws_headers_and_labels() {
    let (mut view, _) = recording_view();
    let mut terminal = terminal();
    draw(&mut terminal, &mut view);

    let buffer = terminal.backend().buffer();
    assert_eq!(buffer[(0, 0)].symbol(), "A");
    assert_eq!(buffer[(0, 1)].symbol(), "A");
    assert_eq!(buffer[(1, 1)].symbol(), "d");
    for (i, label) in ["A", "B", "C", "D", "E"].iter().enumerate() {
        assert_eq!(buffer[(NAV_X, 1 + i as u16)].symbol(), *label);
    }
}

/// Test: a render alone doesn't arm the navigator; the next tick does
#[test]
fn test_gestures_wait_for_measurement_tick() {
    let (mut view, jumps) = recording_view();
    let mut terminal = terminal();
    draw(&mut terminal, &mut view);
    assert!(view.navigator().has_pending_measurement());

    // Claimed by the strip, but nothing is measured yet
    assert!(view.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), NAV_X, 3)));
    assert!(jumps.borrow().is_empty());

    assert!(view.tick());
    assert!(view.navigator().measurement().is_some());

    assert!(view.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), NAV_X, 3)));
    assert_eq!(*jumps.borrow(), vec!["C".to_string()]);

    // Same row again: no repeat within the gesture
    assert!(view.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), NAV_X, 3)));
    // Empty section B
    assert!(view.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), NAV_X, 2)));
    assert_eq!(jumps.borrow().len(), 1);

    assert!(view.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), NAV_X, 2)));
    assert!(view.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), NAV_X, 3)));
    assert_eq!(*jumps.borrow(), vec!["C".to_string(), "C".to_string()]);
}

/// Test: unmounting cancels the pending measurement and detaches the list
#[test]
fn test_unmount_cancels_pending_measurement() {
    let (mut view, jumps) = recording_view();
    let mut terminal = terminal();
    draw(&mut terminal, &mut view);

    view.unmount();
    assert!(!view.navigator().has_pending_measurement());
    assert!(!view.tick());
    assert!(view.navigator().measurement().is_none());

    assert!(!view.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), NAV_X, 3)));
    assert_eq!(view.scroll_to_section("C"), ScrollOutcome::Detached);
    assert!(jumps.borrow().is_empty());
}

/// Test: hidden navigator draws nothing and claims no pointer input
#[test]
fn test_hidden_navigator() {
    let (view, jumps) = recording_view();
    let mut view = view.hide_nav(true);
    let mut terminal = terminal();
    draw(&mut terminal, &mut view);
    view.tick();

    let buffer = terminal.backend().buffer();
    assert_eq!(buffer[(NAV_X, 1)].symbol(), " ");
    assert!(view.navigator().bounds().is_none());

    assert!(!view.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), NAV_X, 3)));
    assert!(jumps.borrow().is_empty());
}

/// Test: mouse wheel over the list scrolls it one row
#[test]
fn test_wheel_scrolls_list() {
    let (mut view, _) = recording_view();
    let mut terminal = terminal();
    draw(&mut terminal, &mut view);

    assert!(view.handle_mouse(mouse(MouseEventKind::ScrollDown, 2, 2)));
    assert_eq!(view.list().map(|l| l.offset()), Some(1));
    assert!(view.handle_mouse(mouse(MouseEventKind::ScrollUp, 2, 2)));
    assert_eq!(view.list().map(|l| l.offset()), Some(0));
}

/// Test: row keys default to the item text followed by its index
#[test]
fn test_visible_item_keys() {
    let (view, _) = recording_view();
    let mut view = view;
    let mut terminal = terminal();
    draw(&mut terminal, &mut view);
    assert_eq!(view.visible_item_keys(), vec!["Ada0", "Alan1", "Cleo0", "Dan0"]);

    let mut view = SectionedListView::new(ListConfig::new(1), data())
        .key_extractor(|item: &String, _| item.to_lowercase());
    draw(&mut terminal, &mut view);
    assert_eq!(view.visible_item_keys(), vec!["ada", "alan", "cleo", "dan"]);
}

/// Test: next/previous section skips empty sections and wraps
#[test]
fn test_step_section_skips_empty() {
    let (mut view, jumps) = recording_view();
    let mut terminal = terminal();
    draw(&mut terminal, &mut view);

    view.step_section(true);
    while view.tick() {}
    assert_eq!(view.current_section(), Some("C"));

    view.step_section(false);
    while view.tick() {}
    assert_eq!(view.current_section(), Some("A"));

    view.step_section(false);
    assert_eq!(jumps.borrow().last().map(String::as_str), Some("E"));
}

/// Test: a lost release doesn't swallow the next press on the same section
#[test]
fn test_press_after_lost_release_fires_again() {
    let (mut view, jumps) = recording_view();
    let mut terminal = terminal();
    draw(&mut terminal, &mut view);
    view.tick();

    assert!(view.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), NAV_X, 3)));
    // No Up event; the next press lands on the list
    assert!(!view.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0, 6)));
    assert!(!view.navigator().gesture().is_tracking());

    assert!(view.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), NAV_X, 3)));
    assert_eq!(*jumps.borrow(), vec!["C".to_string(), "C".to_string()]);

    // Press, press with no release in between, same row
    assert!(view.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), NAV_X, 3)));
    assert_eq!(jumps.borrow().len(), 3);
}

/// Test: with more sections than rows, a drag down the strip still reaches the end
#[test]
fn test_crowded_navigator_reaches_last_sections() {
    let jumps = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&jumps);
    let mut view = SectionedListView::new(ListConfig::new(1), alphalist::sample::contacts())
        .on_scroll_to_section(move |key| sink.borrow_mut().push(key.to_string()));
    let mut terminal = Terminal::new(TestBackend::new(80, 21)).unwrap();
    draw(&mut terminal, &mut view);
    view.tick();

    let bounds = view.navigator().bounds().unwrap();
    let x = bounds.x + 1;
    assert!(view.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), x, bounds.y)));
    for y in bounds.y + 1..bounds.bottom() {
        view.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), x, y));
    }
    view.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), x, bounds.bottom() - 1));

    let jumps = jumps.borrow();
    assert_eq!(jumps.first().map(String::as_str), Some("A"));
    assert!(jumps.iter().any(|key| key == "Y"));
    assert_eq!(jumps.last().map(String::as_str), Some("Z"));

    // First and last labels are drawn
    let buffer = terminal.backend().buffer();
    assert_eq!(buffer[(x, bounds.y)].symbol(), "A");
    assert_eq!(buffer[(x, bounds.bottom() - 1)].symbol(), "Z");
}
