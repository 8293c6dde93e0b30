//! The landing page: overlays, nav bar, marketing sections, footer.
//!
//! DESIGN
//! ======
//! `LandingPage` owns the only mutable state (`PageState`) in a signal.
//! Children get derived read-only signals and `Callback`s that apply one
//! `PageState` transition each, so the overlay tree is a pure function of
//! that value.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::components::analytics::Analytics;
use crate::components::footer::Footer;
use crate::components::legal_modal::LegalModal;
use crate::components::nav_bar::NavBar;
use crate::components::sections::{
    About, Benefits, Catchphrase, FinalCta, Hero, OptionalPlans, Philosophy, Pricing, Problems, Process, Profile,
    Services, UseCases,
};
use crate::components::side_menu::SideMenu;
use crate::content::{SectionId, legal};
use crate::state::page::{ModalKind, PageState};
use crate::util::viewport::BrowserViewport;

/// Content blocks of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSection {
    Hero,
    Problems,
    Philosophy,
    About,
    Services,
    UseCases,
    Process,
    Benefits,
    Pricing,
    OptionalPlans,
    Profile,
    Catchphrase,
    FinalCta,
}

/// Render order, top to bottom. The footer always follows.
pub const PAGE_ORDER: [PageSection; 13] = [
    PageSection::Hero,
    PageSection::Problems,
    PageSection::Philosophy,
    PageSection::About,
    PageSection::Services,
    PageSection::UseCases,
    PageSection::Process,
    PageSection::Benefits,
    PageSection::Pricing,
    PageSection::OptionalPlans,
    PageSection::Profile,
    PageSection::Catchphrase,
    PageSection::FinalCta,
];

impl PageSection {
    /// The scroll target id carried by this block, if any.
    pub fn anchor(self) -> Option<SectionId> {
        match self {
            Self::About => Some(SectionId::About),
            Self::Services => Some(SectionId::Services),
            Self::Process => Some(SectionId::Process),
            Self::Pricing => Some(SectionId::Pricing),
            _ => None,
        }
    }

    fn render(self) -> AnyView {
        match self {
            Self::Hero => view! { <Hero/> }.into_any(),
            Self::Problems => view! { <Problems/> }.into_any(),
            Self::Philosophy => view! { <Philosophy/> }.into_any(),
            Self::About => view! { <About/> }.into_any(),
            Self::Services => view! { <Services/> }.into_any(),
            Self::UseCases => view! { <UseCases/> }.into_any(),
            Self::Process => view! { <Process/> }.into_any(),
            Self::Benefits => view! { <Benefits/> }.into_any(),
            Self::Pricing => view! { <Pricing/> }.into_any(),
            Self::OptionalPlans => view! { <OptionalPlans/> }.into_any(),
            Self::Profile => view! { <Profile/> }.into_any(),
            Self::Catchphrase => view! { <Catchphrase/> }.into_any(),
            Self::FinalCta => view! { <FinalCta/> }.into_any(),
        }
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let page = RwSignal::new(PageState::default());

    let menu_open = Signal::derive(move || page.get().menu_open);
    let privacy_open = Signal::derive(move || page.get().is_modal_open(ModalKind::Privacy));
    let terms_open = Signal::derive(move || page.get().is_modal_open(ModalKind::Terms));

    let open_menu = Callback::new(move |()| page.update(PageState::open_menu));
    let close_menu = Callback::new(move |()| page.update(PageState::close_menu));
    let select_section = Callback::new(move |id: SectionId| {
        page.update(|p| {
            p.select_section(id.as_str(), &BrowserViewport);
        });
    });
    let open_modal = Callback::new(move |kind: ModalKind| page.update(|p| p.open_modal(kind)));
    let close_modal = Callback::new(move |()| page.update(PageState::close_modal));

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && page.get_untracked().has_overlay() {
                page.update(PageState::dismiss_top);
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div class="landing">
            <LegalModal doc=legal::privacy() open=privacy_open on_close=close_modal/>
            <LegalModal doc=legal::terms() open=terms_open on_close=close_modal/>
            <SideMenu open=menu_open on_close=close_menu on_select=select_section/>

            <NavBar on_open_menu=open_menu/>

            {PAGE_ORDER.into_iter().map(PageSection::render).collect_view()}

            <Footer on_open_modal=open_modal/>
            <Analytics/>
        </div>
    }
}
