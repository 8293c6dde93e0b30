//! Static marketing sections, top to bottom.
//!
//! None of these read page state; they only lay out `crate::content`.
//! Anchored sections take their DOM id from `SectionId`.

use leptos::prelude::*;

use crate::components::contact_link::ContactLink;
use crate::components::icon::Icon;
use crate::content::*;

/// Two-line heading split by a `<br/>`.
fn two_lines(lines: [&'static str; 2]) -> impl IntoView {
    view! { {lines[0]}<br/>{lines[1]} }
}

#[component]
fn CardView(card: Card, #[prop(into)] class: String) -> impl IntoView {
    view! {
        <div class=class>
            {card.icon.map(|kind| view! {
                <div class="card__icon">
                    <Icon kind=kind class="icon--lg"/>
                </div>
            })}
            <h3 class="card__title">{card.title}</h3>
            {card.price.map(|price| view! { <p class="card__price">{price}</p> })}
            <p class="card__body">{card.body}</p>
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let background = format!(
        "background-image: linear-gradient(rgba(0, 0, 0, 0.3), rgba(0, 0, 0, 0.5)), url(\"{HERO_IMAGE_URL}\")"
    );

    view! {
        <section class="hero">
            <div class="hero__inner" style=background>
                <div class="hero__copy">
                    <h2 class="hero__headline">{two_lines(HERO_HEADLINE)}</h2>
                    <div class="hero__price-card">
                        <p class="hero__tagline">{HERO_TAGLINE}</p>
                        <p class="hero__price">
                            {HERO_PRICE}
                            <span class="hero__price-note">{HERO_PRICE_NOTE}</span>
                        </p>
                    </div>
                </div>
                <ContactLink class="cta cta--hero">{CONSULT_LABEL}</ContactLink>
            </div>
        </section>
    }
}

#[component]
pub fn Problems() -> impl IntoView {
    view! {
        <section class="section section--light problems">
            <h2 class="section__heading">{PROBLEMS_HEADING}</h2>
            <div class="problems__list">
                {PROBLEMS
                    .iter()
                    .map(|text| {
                        view! {
                            <div class="problems__item">
                                <span class="problems__icon">
                                    <Icon kind=IconKind::AlertCircle class="icon--sm"/>
                                </span>
                                <p>{*text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Philosophy() -> impl IntoView {
    view! {
        <section class="section section--primary philosophy">
            <div class="philosophy__inner">
                <h2 class="philosophy__heading">{PHILOSOPHY_HEADING}</h2>
                <div class="philosophy__rule"></div>
                <p class="philosophy__body">{PHILOSOPHY_BODY}</p>
            </div>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=SectionId::About.as_str() class="section section--light about">
            <div class="section__title-block">
                <p class="section__eyebrow">{ABOUT_EYEBROW}</p>
                <h2 class="section__heading">{ABOUT_HEADING}</h2>
            </div>
            <div class="about__grid">
                <div class="about__media">
                    <img class="about__image" alt=ABOUT_IMAGE_ALT src=ABOUT_IMAGE_URL referrerpolicy="no-referrer"/>
                    <div class="about__shade"></div>
                    <div class="about__callout">
                        <p>{two_lines(ABOUT_CALLOUT)}</p>
                    </div>
                </div>
                <div class="about__text">
                    {ABOUT_PARAGRAPHS.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id=SectionId::Services.as_str() class="section section--divider services">
            <div class="services__grid">
                {SERVICES.iter().map(|card| view! { <CardView card=*card class="card card--service"/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn UseCases() -> impl IntoView {
    view! {
        <section class="section section--light use-cases">
            <h2 class="section__heading">{USE_CASES_HEADING}</h2>
            <div class="use-cases__grid">
                {USE_CASES.iter().map(|card| view! { <CardView card=*card class="card card--use-case"/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Process() -> impl IntoView {
    view! {
        <section id=SectionId::Process.as_str() class="section section--divider process">
            <div class="process__inner">
                <h2 class="section__heading">{PROCESS_HEADING}</h2>
                <ol class="process__steps">
                    {PROCESS_STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            view! {
                                <li class="process__step">
                                    <span class="process__number">{i + 1}</span>
                                    <div class="process__text">
                                        <h4>{step.title}</h4>
                                        <p>{step.desc}</p>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}

#[component]
pub fn Benefits() -> impl IntoView {
    view! {
        <section class="section section--light benefits">
            <h2 class="section__heading">{BENEFITS_HEADING}</h2>
            <div class="benefits__list">
                {BENEFITS
                    .iter()
                    .map(|benefit| {
                        view! {
                            <div class="benefits__item">
                                <Icon kind=IconKind::CheckCircle class="icon--lg"/>
                                <span>{*benefit}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id=SectionId::Pricing.as_str() class="section section--tint pricing">
            <div class="pricing__card">
                <div class="pricing__header">
                    <h3>{PLAN.name}</h3>
                </div>
                <div class="pricing__body">
                    <p class="pricing__scope">{PLAN.scope}</p>
                    <div class="pricing__amount">
                        <span class="pricing__figure">{PLAN.amount}</span>
                        <span class="pricing__unit">{PLAN.unit}</span>
                    </div>
                    <p class="pricing__notes">{two_lines(PLAN.notes)}</p>
                    <ul class="pricing__includes">
                        {PLAN.includes.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn OptionalPlans() -> impl IntoView {
    view! {
        <section class="section section--white optional-plans">
            <div class="section__title-block">
                <p class="section__eyebrow">{OPTIONAL_EYEBROW}</p>
                <h2 class="section__heading">{OPTIONAL_HEADING}</h2>
            </div>
            <div class="optional-plans__grid">
                {OPTIONAL_PLANS.iter().map(|card| view! { <CardView card=*card class="card card--option"/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Profile() -> impl IntoView {
    view! {
        <section class="section section--light profile">
            <div class="profile__inner">
                <div class="profile__avatar">
                    <img alt=PROFILE_IMAGE_ALT src=PROFILE_IMAGE_URL referrerpolicy="no-referrer"/>
                </div>
                <h3 class="profile__title">{PROFILE_TITLE}</h3>
                <p class="profile__body">{PROFILE_BODY}</p>
            </div>
        </section>
    }
}

#[component]
pub fn Catchphrase() -> impl IntoView {
    view! {
        <section class="section section--accent catchphrase">
            <h2 class="catchphrase__heading">{two_lines(CATCHPHRASE)}</h2>
            <p class="catchphrase__sub">{CATCHPHRASE_EN}</p>
        </section>
    }
}

#[component]
pub fn FinalCta() -> impl IntoView {
    view! {
        <section class="section section--light final-cta">
            <h2 class="final-cta__heading">{two_lines(FINAL_CTA_HEADING)}</h2>
            <ContactLink class="cta cta--final">{CONSULT_LABEL}</ContactLink>
            <p class="final-cta__note">
                <Icon kind=IconKind::Mail class="icon--sm"/>
                {FINAL_CTA_NOTE}
            </p>
        </section>
    }
}
