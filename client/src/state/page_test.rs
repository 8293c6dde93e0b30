use std::cell::RefCell;

use super::*;

/// Viewport double that knows a fixed set of element ids and records scrolls.
struct FakeViewport {
    known: &'static [&'static str],
    scrolled: RefCell<Vec<String>>,
}

impl FakeViewport {
    fn with_ids(known: &'static [&'static str]) -> Self {
        Self { known, scrolled: RefCell::new(Vec::new()) }
    }

    fn scrolled(&self) -> Vec<String> {
        self.scrolled.borrow().clone()
    }
}

impl Viewport for FakeViewport {
    fn scroll_to(&self, id: &str) -> bool {
        if self.known.contains(&id) {
            self.scrolled.borrow_mut().push(id.to_owned());
            true
        } else {
            false
        }
    }
}

const PAGE_IDS: &[&str] = &["about", "services", "process", "pricing"];

// =============================================================
// Defaults
// =============================================================

#[test]
fn page_state_default_is_closed_with_no_modal() {
    let state = PageState::default();
    assert!(!state.menu_open);
    assert_eq!(state.modal, ActiveModal::None);
    assert!(!state.has_overlay());
}

#[test]
fn active_modal_default_is_none() {
    assert_eq!(ActiveModal::default(), ActiveModal::None);
}

// =============================================================
// Menu
// =============================================================

#[test]
fn menu_tracks_most_recent_call() {
    let mut state = PageState::default();
    state.open_menu();
    assert!(state.menu_open);
    state.open_menu();
    assert!(state.menu_open);
    state.close_menu();
    assert!(!state.menu_open);
    state.close_menu();
    assert!(!state.menu_open);
    state.open_menu();
    assert!(state.menu_open);
}

#[test]
fn menu_sequences_end_on_last_value() {
    let sequences: &[&[bool]] = &[&[true], &[false], &[true, false, true], &[false, true, false], &[true, true, false, false]];
    for seq in sequences {
        let mut state = PageState::default();
        for &open in *seq {
            if open {
                state.open_menu();
            } else {
                state.close_menu();
            }
        }
        assert_eq!(state.menu_open, *seq.last().unwrap());
    }
}

// =============================================================
// Modal
// =============================================================

#[test]
fn open_modal_last_write_wins() {
    let kinds = [ModalKind::Privacy, ModalKind::Terms];
    for first in kinds {
        for second in kinds {
            let mut state = PageState::default();
            state.open_modal(first);
            state.open_modal(second);
            assert_eq!(state.modal, ActiveModal::from(second));
            assert!(state.is_modal_open(second));
        }
    }
}

#[test]
fn close_modal_is_idempotent() {
    let mut state = PageState::default();
    state.close_modal();
    assert_eq!(state.modal, ActiveModal::None);
    state.open_modal(ModalKind::Terms);
    state.close_modal();
    state.close_modal();
    assert_eq!(state.modal, ActiveModal::None);
}

#[test]
fn opening_modal_leaves_menu_untouched() {
    let mut state = PageState::default();
    state.open_menu();
    state.open_modal(ModalKind::Privacy);
    assert!(state.menu_open);
    assert_eq!(state.modal, ActiveModal::Privacy);
}

#[test]
fn is_modal_open_only_matches_active_kind() {
    let mut state = PageState::default();
    assert!(!state.is_modal_open(ModalKind::Privacy));
    assert!(!state.is_modal_open(ModalKind::Terms));
    state.open_modal(ModalKind::Privacy);
    assert!(state.is_modal_open(ModalKind::Privacy));
    assert!(!state.is_modal_open(ModalKind::Terms));
}

// =============================================================
// Section selection
// =============================================================

#[test]
fn select_existing_section_scrolls_and_closes_menu() {
    let viewport = FakeViewport::with_ids(PAGE_IDS);
    for menu_open in [true, false] {
        let mut state = PageState { menu_open, modal: ActiveModal::None };
        assert!(state.select_section("about", &viewport));
        assert!(!state.menu_open);
    }
    assert_eq!(viewport.scrolled(), vec!["about", "about"]);
}

#[test]
fn select_missing_section_skips_scroll_and_closes_menu() {
    let viewport = FakeViewport::with_ids(PAGE_IDS);
    let mut state = PageState::default();
    state.open_menu();
    assert!(!state.select_section("nonexistent-id", &viewport));
    assert!(!state.menu_open);
    assert!(viewport.scrolled().is_empty());
}

#[test]
fn select_section_keeps_active_modal() {
    let viewport = FakeViewport::with_ids(PAGE_IDS);
    let mut state = PageState::default();
    state.open_modal(ModalKind::Terms);
    state.select_section("pricing", &viewport);
    assert_eq!(state.modal, ActiveModal::Terms);
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn menu_navigation_to_services() {
    let viewport = FakeViewport::with_ids(PAGE_IDS);
    let mut state = PageState::default();

    state.open_menu();
    assert_eq!(state, PageState { menu_open: true, modal: ActiveModal::None });

    state.select_section("services", &viewport);
    assert_eq!(state, PageState::default());
    assert_eq!(viewport.scrolled(), vec!["services"]);
}

#[test]
fn footer_privacy_then_backdrop() {
    let mut state = PageState::default();

    state.open_modal(ModalKind::Privacy);
    assert_eq!(state, PageState { menu_open: false, modal: ActiveModal::Privacy });

    // Backdrop click routes to close_modal.
    state.close_modal();
    assert_eq!(state, PageState::default());
}

// =============================================================
// Escape dismissal
// =============================================================

#[test]
fn dismiss_top_closes_modal_before_menu() {
    let mut state = PageState::default();
    state.open_menu();
    state.open_modal(ModalKind::Terms);

    state.dismiss_top();
    assert!(state.menu_open);
    assert_eq!(state.modal, ActiveModal::None);

    state.dismiss_top();
    assert!(!state.menu_open);
    assert!(!state.has_overlay());
}

#[test]
fn dismiss_top_without_overlay_is_noop() {
    let mut state = PageState::default();
    state.dismiss_top();
    assert_eq!(state, PageState::default());
}
