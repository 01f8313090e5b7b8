//! Leptos UI components for the course platform page.
//!
//! Each component is a Leptos `#[component]` function with no props beyond
//! the variant switch; all copy comes from [`crate::content`].
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── Landing (default)
//! │   ├── Nav
//! │   └── main
//! │       ├── Hero
//! │       └── StatsBlock
//! │           └── StatItem (x3)
//! └── Welcome
//! ```
//!
//! # Usage
//!
//! Components are normally rendered via [`crate::render_page`], but can be
//! composed directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use course_page::components::{Hero, StatsBlock};
//!
//! view! {
//!     <Hero />
//!     <StatsBlock />
//! }
//! ```

mod document;
mod hero;
mod nav;
mod stats;
mod welcome;

pub use document::PageDocument;
pub use hero::Hero;
pub use nav::Nav;
pub use stats::{StatItem, StatsBlock};
pub use welcome::Welcome;
