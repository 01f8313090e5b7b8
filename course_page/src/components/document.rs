//! Root document component - the complete HTML page
//!
//! Owns `<head>` (charset, viewport, CSP, inline stylesheet) and picks the
//! body for the requested [`PageVariant`].

use super::{Hero, Nav, StatsBlock, Welcome};
use crate::content::{BRAND, PageVariant};
use crate::styles::{CSP, PAGE_CSS};
use leptos::prelude::*;

/// The complete HTML document for one page variant
#[component]
pub fn PageDocument(
    /// Body to render; defaults to the landing page
    #[prop(default = PageVariant::Landing)]
    variant: PageVariant,
) -> impl IntoView {
    let body = match variant {
        PageVariant::Landing => view! {
            <Nav />
            <main>
                <Hero />
                <StatsBlock />
            </main>
        }
        .into_any(),
        PageVariant::Welcome => view! { <Welcome /> }.into_any(),
    };

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{BRAND}</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <div class="page" data-variant={variant.as_str()}>
                    {body}
                </div>
            </body>
        </html>
    }
}
