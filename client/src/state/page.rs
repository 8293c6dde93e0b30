//! Page controller state: slide-in menu visibility and the active legal modal.
//!
//! DESIGN
//! ======
//! Both flags live in one plain value owned by the landing page. Children
//! receive read-only signals and transition callbacks instead of touching
//! the value directly, so every transition goes through the methods below.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::util::viewport::Viewport;

/// Which legal modal, if any, is currently shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveModal {
    #[default]
    None,
    Privacy,
    Terms,
}

/// Modal kinds that can be opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Privacy,
    Terms,
}

impl From<ModalKind> for ActiveModal {
    fn from(kind: ModalKind) -> Self {
        match kind {
            ModalKind::Privacy => Self::Privacy,
            ModalKind::Terms => Self::Terms,
        }
    }
}

/// Transient UI state for the landing page. Resets on every load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    pub menu_open: bool,
    pub modal: ActiveModal,
}

impl PageState {
    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Scroll the section with `id` into view and close the menu.
    ///
    /// An unknown `id` skips the scroll without complaint; the menu closes
    /// either way. Returns whether a scroll was issued.
    pub fn select_section(&mut self, id: &str, viewport: &impl Viewport) -> bool {
        let scrolled = viewport.scroll_to(id);
        self.close_menu();
        scrolled
    }

    /// Show `kind`, replacing whichever modal was active.
    pub fn open_modal(&mut self, kind: ModalKind) {
        self.modal = kind.into();
    }

    pub fn close_modal(&mut self) {
        self.modal = ActiveModal::None;
    }

    /// Close the top-most overlay: the modal if one is open, else the menu.
    pub fn dismiss_top(&mut self) {
        if self.modal != ActiveModal::None {
            self.close_modal();
        } else {
            self.close_menu();
        }
    }

    pub fn is_modal_open(&self, kind: ModalKind) -> bool {
        self.modal == ActiveModal::from(kind)
    }

    pub fn has_overlay(&self) -> bool {
        self.menu_open || self.modal != ActiveModal::None
    }
}
