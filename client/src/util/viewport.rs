//! Viewport capability used for in-page navigation.
//!
//! The page controller only needs two things from the host: find an element
//! by id, and scroll it into view with smooth animation. `BrowserViewport`
//! does both through `web-sys` when hydrated; server rendering and native
//! tests get a no-op that reports "not found".

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Host-provided scrolling.
pub trait Viewport {
    /// Smooth-scroll the element with `id` into view.
    ///
    /// Returns `false` when no element matches; callers treat that as a
    /// silent no-op.
    fn scroll_to(&self, id: &str) -> bool;
}

/// The real browser window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_to(&self, id: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let Some(element) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(id))
            else {
                return false;
            };

            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            false
        }
    }
}
