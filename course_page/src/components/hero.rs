use leptos::prelude::*;

use crate::content::HERO;

/// Headline, tagline and the two call-to-action buttons.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <h1 class="hero-title">
                    {HERO.headline_lead}
                    <br />
                    <span class="hero-title-accent">{HERO.headline_accent}</span>
                </h1>
                <p class="hero-description">{HERO.tagline}</p>
                <div class="hero-actions">
                    <a href={HERO.primary_cta.href} class="btn btn-primary">
                        {HERO.primary_cta.label}
                    </a>
                    <a href={HERO.secondary_cta.href} class="btn btn-secondary">
                        {HERO.secondary_cta.label}
                    </a>
                </div>
            </div>
        </section>
    }
}
