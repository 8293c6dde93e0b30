//! Sticky top bar with the menu toggle, brand, and contact link.

use leptos::prelude::*;

use crate::components::contact_link::ContactLink;
use crate::components::icon::Icon;
use crate::content::{BRAND, CONTACT_LABEL, IconKind};

#[component]
pub fn NavBar(on_open_menu: Callback<()>) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <button class="nav-bar__toggle" on:click=move |_| on_open_menu.run(()) title="メニューを開く">
                <Icon kind=IconKind::Menu class="icon--md"/>
            </button>
            <h1 class="nav-bar__brand">{BRAND}</h1>
            <div class="nav-bar__actions">
                <ContactLink class="nav-bar__contact">{CONTACT_LABEL}</ContactLink>
            </div>
        </nav>
    }
}
