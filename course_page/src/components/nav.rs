//! Navigation bar - brand on the left, authentication links on the right

use leptos::prelude::*;

use crate::content::{BRAND, NAV_LINKS};

/// Header strip with the brand and the [`NAV_LINKS`].
///
/// The brand is plain text so the bar holds exactly the authentication
/// links. The last link is styled as the call to action.
#[component]
pub fn Nav() -> impl IntoView {
    let last = NAV_LINKS.len() - 1;

    view! {
        <nav class="nav">
            <div class="container nav-inner">
                <span class="nav-brand">{BRAND}</span>
                <div class="nav-links">
                    {NAV_LINKS.iter().enumerate().map(|(idx, link)| {
                        let class = if idx == last { "nav-link nav-cta" } else { "nav-link" };
                        view! {
                            <a href={link.href} class={class}>{link.label}</a>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </nav>
    }
}
