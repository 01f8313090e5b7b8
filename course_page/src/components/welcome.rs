use leptos::prelude::*;

use crate::content::WELCOME;

/// Body of the welcome variant: one centered heading and tagline.
#[component]
pub fn Welcome() -> impl IntoView {
    view! {
        <main class="container welcome">
            <h1 class="welcome-title">{WELCOME.title}</h1>
            <p class="welcome-tagline">{WELCOME.tagline}</p>
        </main>
    }
}
