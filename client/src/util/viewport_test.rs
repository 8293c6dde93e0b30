#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn browser_viewport_reports_not_found_outside_browser() {
    assert!(!BrowserViewport.scroll_to("about"));
    assert!(!BrowserViewport.scroll_to(""));
}
