//! CSS for the course platform page.
//!
//! The stylesheet is inlined into `<head>` so the exported HTML is a single
//! self-contained file.
//!
//! # Customization
//!
//! ```rust
//! use course_page::styles::PAGE_CSS;
//!
//! let my_css = ".hero-title { letter-spacing: -0.02em; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! assert!(combined.contains(".stats"));
//! ```

/// Complete CSS for both page variants - light theme.
///
/// Layout scale follows a 4px grid; the content column is capped at 80rem
/// (`--container-max`) with 1rem side gutters.
pub const PAGE_CSS: &str = r#"
:root {
    --bg-page: #f9fafb;
    --bg-card: #ffffff;
    --text-strong: #111827;
    --text-body: #4b5563;
    --text-muted: #6b7280;
    --border-subtle: #e5e7eb;
    --accent: #2563eb;
    --accent-hover: #1d4ed8;
    --font-sans: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
    --container-max: 80rem;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--text-strong);
    background: var(--bg-page);
    line-height: 1.5;
}

a {
    color: inherit;
    text-decoration: none;
}

.page {
    min-height: 100vh;
    background: var(--bg-page);
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 1rem;
}

/* Navigation */
.nav {
    background: var(--bg-card);
    border-bottom: 1px solid var(--border-subtle);
}

.nav-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 4rem;
}

.nav-brand {
    font-size: 1.25rem;
    font-weight: 700;
}

.nav-links {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.nav-link {
    color: var(--text-body);
    font-weight: 500;
}

.nav-link:hover {
    color: var(--text-strong);
}

.nav-cta {
    padding: 0.5rem 1rem;
    border-radius: 0.5rem;
    background: var(--accent);
    color: #ffffff;
}

.nav-cta:hover {
    background: var(--accent-hover);
    color: #ffffff;
}

/* Hero */
.hero {
    padding: 5rem 0;
    text-align: center;
}

.hero-title {
    margin: 0 0 1.5rem;
    font-size: 3rem;
    font-weight: 700;
    line-height: 1.1;
}

.hero-title-accent {
    color: var(--accent);
}

.hero-description {
    max-width: 42rem;
    margin: 0 auto 2rem;
    font-size: 1.25rem;
    color: var(--text-body);
}

.hero-actions {
    display: flex;
    justify-content: center;
    gap: 1rem;
}

.btn {
    display: inline-block;
    padding: 0.75rem 1.5rem;
    border-radius: 0.5rem;
    font-weight: 600;
}

.btn-primary {
    background: var(--accent);
    color: #ffffff;
}

.btn-primary:hover {
    background: var(--accent-hover);
}

.btn-secondary {
    border: 1px solid var(--border-subtle);
    background: var(--bg-card);
}

/* Stats */
.stats {
    display: grid;
    grid-template-columns: repeat(3, minmax(0, 1fr));
    gap: 2rem;
    padding-bottom: 5rem;
    text-align: center;
}

.stat-value {
    font-size: 2.25rem;
    font-weight: 700;
    color: var(--accent);
}

.stat-label {
    color: var(--text-muted);
}

/* Welcome */
.welcome {
    padding: 5rem 1rem;
}

.welcome-title {
    margin: 0 0 1.5rem;
    font-size: 3rem;
    font-weight: 700;
    text-align: center;
}

.welcome-tagline {
    margin: 0;
    font-size: 1.25rem;
    text-align: center;
    color: var(--text-body);
}

@media (max-width: 640px) {
    .hero-title,
    .welcome-title {
        font-size: 2.25rem;
    }

    .stats {
        grid-template-columns: 1fr;
    }
}
"#;

/// Content-Security-Policy for the exported page: no scripts, no remote
/// fetches, inline styles only.
pub const CSP: &str = "default-src 'self'; img-src 'self' data:; style-src 'self' 'unsafe-inline'; script-src 'none'; connect-src 'none';";
