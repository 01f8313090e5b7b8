//! Display copy for the course platform page.
//!
//! Every string the page shows lives here as a `const`, so components stay
//! pure layout and tests can check the copy without parsing HTML.
//!
//! # Example
//!
//! ```rust
//! use course_page::content::{page_content, STATS};
//!
//! let content = page_content();
//! assert_eq!(content.stats.len(), 3);
//! assert_eq!(STATS[0].value, "50K+");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Product name shown in the navigation bar and the document title.
pub const BRAND: &str = "Course Platform";

/// A static hyperlink with its visible label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Visible link text
    pub label: &'static str,
    /// Target path
    pub href: &'static str,
}

/// One labeled highlight in the stats block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Stat {
    /// Headline figure, e.g. `"50K+"`
    pub value: &'static str,
    /// Caption under the figure
    pub label: &'static str,
}

/// Copy for the hero call-to-action block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HeroCopy {
    /// First line of the headline
    pub headline_lead: &'static str,
    /// Highlighted second line of the headline
    pub headline_accent: &'static str,
    /// Paragraph under the headline
    pub tagline: &'static str,
    /// Filled button
    pub primary_cta: NavLink,
    /// Outlined button
    pub secondary_cta: NavLink,
}

/// Copy for the minimal welcome page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WelcomeCopy {
    /// Page heading
    pub title: &'static str,
    /// Line under the heading
    pub tagline: &'static str,
}

/// Authentication links in the navigation bar, left to right.
pub const NAV_LINKS: [NavLink; 2] = [
    NavLink {
        label: "Log in",
        href: "/login",
    },
    NavLink {
        label: "Get Started",
        href: "/signup",
    },
];

/// Hero headline, tagline and buttons.
pub const HERO: HeroCopy = HeroCopy {
    headline_lead: "Learn Anything,",
    headline_accent: "Anytime",
    tagline: "Expert-led courses with real-time quizzes and progress tracking. \
              Study at your own pace, from any device.",
    primary_cta: NavLink {
        label: "Browse Courses",
        href: "/courses",
    },
    secondary_cta: NavLink {
        label: "Start Learning",
        href: "/signup",
    },
};

/// Social-proof figures, rendered in this order.
pub const STATS: [Stat; 3] = [
    Stat {
        value: "50K+",
        label: "Active Students",
    },
    Stat {
        value: "200+",
        label: "Courses",
    },
    Stat {
        value: "4.9★",
        label: "Rating",
    },
];

/// Copy for [`PageVariant::Welcome`].
pub const WELCOME: WelcomeCopy = WelcomeCopy {
    title: "Welcome to Course Platform",
    tagline: "Your learning journey starts here",
};

/// Everything the landing variant displays, in one serializable value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageContent {
    /// Product name
    pub brand: &'static str,
    /// Navigation bar links
    pub nav_links: Vec<NavLink>,
    /// Hero block copy
    pub hero: HeroCopy,
    /// Stats block entries
    pub stats: Vec<Stat>,
}

/// Collect the landing page copy.
pub fn page_content() -> PageContent {
    PageContent {
        brand: BRAND,
        nav_links: NAV_LINKS.to_vec(),
        hero: HERO,
        stats: STATS.to_vec(),
    }
}

/// Which page body the route renders.
///
/// The route has shipped two different bodies: the full landing page and an
/// earlier single-block welcome page. Both stay renderable until the product
/// owner picks one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageVariant {
    /// Navigation bar, hero and stats block
    #[default]
    Landing,
    /// Single centered heading and tagline
    Welcome,
}

impl PageVariant {
    /// All variants, default first.
    pub const ALL: [PageVariant; 2] = [PageVariant::Landing, PageVariant::Welcome];

    /// Lowercase name, as accepted by `FromStr` and serde.
    pub fn as_str(self) -> &'static str {
        match self {
            PageVariant::Landing => "landing",
            PageVariant::Welcome => "welcome",
        }
    }
}

impl fmt::Display for PageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known [`PageVariant`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page variant {0:?} (expected \"landing\" or \"welcome\")")]
pub struct UnknownVariant(pub String);

impl FromStr for PageVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "landing" => Ok(PageVariant::Landing),
            "welcome" => Ok(PageVariant::Welcome),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}
