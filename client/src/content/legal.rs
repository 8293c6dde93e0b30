//! Privacy policy and terms of service.
//!
//! Both documents are kept as Markdown next to this file and rendered to
//! HTML once per modal mount.

#[cfg(test)]
#[path = "legal_test.rs"]
mod legal_test;

use pulldown_cmark::{Event, Options, Parser, html};

use crate::state::page::ModalKind;

/// A legal text shown in a modal.
#[derive(Clone, Copy, Debug)]
pub struct LegalDoc {
    pub kind: ModalKind,
    pub title: &'static str,
    pub markdown: &'static str,
}

impl LegalDoc {
    pub fn html(&self) -> String {
        render_html(self.markdown)
    }
}

pub fn privacy() -> LegalDoc {
    LegalDoc {
        kind: ModalKind::Privacy,
        title: "プライバシーポリシー",
        markdown: include_str!("legal/privacy.md"),
    }
}

pub fn terms() -> LegalDoc {
    LegalDoc {
        kind: ModalKind::Terms,
        title: "利用規約",
        markdown: include_str!("legal/terms.md"),
    }
}

pub fn for_kind(kind: ModalKind) -> LegalDoc {
    match kind {
        ModalKind::Privacy => privacy(),
        ModalKind::Terms => terms(),
    }
}

/// Render Markdown to HTML with raw HTML dropped.
pub fn render_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty()).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
