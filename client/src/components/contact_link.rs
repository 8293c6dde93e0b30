//! Outbound link to the external contact form.

use leptos::prelude::*;

use crate::content::FORM_URL;

/// Opens the contact form in a new browsing context.
#[component]
pub fn ContactLink(#[prop(into)] class: String, children: Children) -> impl IntoView {
    view! {
        <a class=class href=FORM_URL target="_blank" rel="noopener noreferrer">
            {children()}
        </a>
    }
}
