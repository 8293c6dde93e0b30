use std::collections::HashSet;

use super::*;
use crate::content::NAV_ITEMS;

#[test]
fn page_order_starts_with_hero_and_ends_with_final_cta() {
    assert_eq!(PAGE_ORDER.first(), Some(&PageSection::Hero));
    assert_eq!(PAGE_ORDER.last(), Some(&PageSection::FinalCta));
}

#[test]
fn page_order_lists_each_section_once() {
    let mut seen = HashSet::new();
    for section in PAGE_ORDER {
        assert!(seen.insert(format!("{section:?}")), "{section:?} listed twice");
    }
}

#[test]
fn anchors_appear_in_nav_order() {
    let anchors: Vec<SectionId> = PAGE_ORDER.into_iter().filter_map(PageSection::anchor).collect();
    let nav: Vec<SectionId> = NAV_ITEMS.iter().map(|item| item.target).collect();
    assert_eq!(anchors, nav);
}

#[test]
fn about_precedes_services_precedes_process_precedes_pricing() {
    let position = |s: PageSection| PAGE_ORDER.iter().position(|p| *p == s).unwrap();
    assert!(position(PageSection::Philosophy) < position(PageSection::About));
    assert!(position(PageSection::About) < position(PageSection::Services));
    assert!(position(PageSection::Services) < position(PageSection::Process));
    assert!(position(PageSection::Process) < position(PageSection::Pricing));
}
