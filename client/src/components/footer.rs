//! Page footer: company details, mail link, and legal modal triggers.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::content::{
    BRAND, COMPANY_ADDRESS, COMPANY_NAME, COMPANY_URL, CONTACT_EMAIL, COPYRIGHT, FOOTER_COMPANY_LINK, IconKind,
    legal, mailto,
};
use crate::state::page::ModalKind;

#[component]
pub fn Footer(on_open_modal: Callback<ModalKind>) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <h1 class="footer__brand">{BRAND}</h1>
                <div class="footer__company">
                    <p class="footer__company-name">{COMPANY_NAME}</p>
                    <p>{COMPANY_ADDRESS}</p>
                    <p class="footer__mail">
                        <Icon kind=IconKind::Mail class="icon--sm"/>
                        <a href=mailto()>{CONTACT_EMAIL}</a>
                    </p>
                </div>
                <div class="footer__links">
                    <a href=COMPANY_URL>{FOOTER_COMPANY_LINK}</a>
                    <button on:click=move |_| on_open_modal.run(ModalKind::Privacy)>{legal::privacy().title}</button>
                    <button on:click=move |_| on_open_modal.run(ModalKind::Terms)>{legal::terms().title}</button>
                </div>
                <p class="footer__copyright">{COPYRIGHT}</p>
            </div>
        </footer>
    }
}
