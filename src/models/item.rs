//! Trending item model
//!
//! Transient per-request representation of one repository card scraped from
//! the source page. Items are never persisted; they live only between the
//! fetch and the rendered response.

/// One repository card extracted from the trending page
///
/// `name` and `url` are required; a card missing either is dropped before
/// rendering. Every other field is independently optional and rendered only
/// when present. All fields hold the source page's human-formatted text,
/// whitespace-trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingItem {
    /// Repository name as displayed, e.g. "octo / repo"
    pub name: String,
    /// Repository path relative to the source host, e.g. "/octo/repo"
    pub url: String,
    /// Short repository description
    pub description: Option<String>,
    /// Primary programming language label
    pub language: Option<String>,
    /// Total star count, human-formatted (e.g. "1,234")
    pub total_stars: Option<String>,
    /// Stars gained today (e.g. "12 stars today")
    pub stars_today: Option<String>,
    /// Fork count, human-formatted
    pub forks: Option<String>,
}
