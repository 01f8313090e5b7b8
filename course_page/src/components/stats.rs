//! Stats block - labeled figures for social proof

use leptos::prelude::*;

use crate::content::{STATS, Stat};

/// Grid of the [`STATS`] entries, in declaration order.
#[component]
pub fn StatsBlock() -> impl IntoView {
    view! {
        <section class="container stats">
            {STATS.into_iter().map(|stat| view! { <StatItem stat=stat /> }).collect::<Vec<_>>()}
        </section>
    }
}

/// One figure with its caption.
#[component]
pub fn StatItem(stat: Stat) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-value">{stat.value}</div>
            <div class="stat-label">{stat.label}</div>
        </div>
    }
}
