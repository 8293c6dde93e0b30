//! Slide-in navigation panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted only while the menu is open. Item clicks hand the section id back
//! to the page, which scrolls and closes the menu in one transition.

use leptos::prelude::*;

use crate::components::contact_link::ContactLink;
use crate::components::icon::Icon;
use crate::content::{BRAND, CONTACT_LABEL, IconKind, NAV_ITEMS, SectionId};

#[component]
pub fn SideMenu(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    on_select: Callback<SectionId>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="side-menu__backdrop" on:click=move |_| on_close.run(())></div>
            <aside class="side-menu">
                <div class="side-menu__header">
                    <h2 class="side-menu__brand">{BRAND}</h2>
                    <button class="side-menu__close" on:click=move |_| on_close.run(()) title="メニューを閉じる">
                        <Icon kind=IconKind::Close class="icon--md"/>
                    </button>
                </div>
                <nav class="side-menu__nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let target = item.target;
                            view! {
                                <button class="side-menu__item" on:click=move |_| on_select.run(target)>
                                    {item.label}
                                </button>
                            }
                        })
                        .collect_view()}
                    <div class="side-menu__footer">
                        <ContactLink class="side-menu__contact">{CONTACT_LABEL}</ContactLink>
                    </div>
                </nav>
            </aside>
        </Show>
    }
}
