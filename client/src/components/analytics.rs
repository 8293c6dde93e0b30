//! Page-view collector include. Nothing flows back into the app.

use leptos::prelude::*;
use leptos_meta::Script;

pub const ANALYTICS_SCRIPT_SRC: &str = "/_vercel/insights/script.js";

#[component]
pub fn Analytics() -> impl IntoView {
    view! { <Script defer="true" src=ANALYTICS_SCRIPT_SRC/> }
}
