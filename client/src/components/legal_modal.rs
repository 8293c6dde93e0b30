//! Overlay panel showing one legal document.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::content::IconKind;
use crate::content::legal::LegalDoc;

/// Rendered only while `open` is true. Backdrop and close button both call
/// `on_close`; clicks inside the panel do not reach the backdrop.
#[component]
pub fn LegalModal(doc: LegalDoc, #[prop(into)] open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="legal-modal__backdrop" on:click=move |_| on_close.run(())>
                <div class="legal-modal" role="dialog" aria-modal="true" on:click=move |ev| ev.stop_propagation()>
                    <div class="legal-modal__header">
                        <h3>{doc.title}</h3>
                        <button class="legal-modal__close" on:click=move |_| on_close.run(()) title="閉じる">
                            <Icon kind=IconKind::Close class="icon--md"/>
                        </button>
                    </div>
                    <div class="legal-modal__body" inner_html=doc.html()></div>
                </div>
            </div>
        </Show>
    }
}
