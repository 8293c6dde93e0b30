//! Inline SVG icons (lucide outlines, 24x24, stroke-based).

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;

use leptos::prelude::*;

use crate::content::IconKind;

/// Path data for each icon, drawn on a 24x24 grid.
pub fn icon_paths(kind: IconKind) -> &'static [&'static str] {
    match kind {
        IconKind::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
        IconKind::Close => &["M18 6 6 18", "m6 6 12 12"],
        IconKind::Mail => &[
            "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
        ],
        IconKind::AlertCircle => &["M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z", "M12 8v4", "M12 16h.01"],
        IconKind::MessageSquare => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
        IconKind::BarChart => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
        IconKind::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
        IconKind::Handshake => &[
            "m11 17 2 2a1 1 0 1 0 3-3",
            "m14 14 2.5 2.5a1 1 0 1 0 3-3l-3.88-3.88a3 3 0 0 0-4.24 0l-.88.88a1 1 0 1 1-3-3l2.81-2.81a5.79 5.79 0 0 1 7.06-.87l.47.28a2 2 0 0 0 1.42.25L21 4",
            "m21 3 1 11h-2",
            "M3 3 2 14l6.5 6.5a1 1 0 1 0 3-3",
            "M3 4h8",
        ],
        IconKind::Brush => &[
            "m9.06 11.9 8.07-8.06a2.85 2.85 0 1 1 4.03 4.03l-8.06 8.08",
            "M7.07 14.94c-1.66 0-3 1.35-3 3.02 0 1.33-2.5 1.52-2 2.02 1.08 1.1 2.49 2.02 4 2.02 2.2 0 4-1.8 4-4.04a3.01 3.01 0 0 0-3-3.02z",
        ],
    }
}

#[component]
pub fn Icon(kind: IconKind, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <svg
            class=format!("icon {class}")
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon_paths(kind).iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}
