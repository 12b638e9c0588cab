//! Card Extraction Service
//!
//! Selects repository cards from the parsed trending page and pulls out the
//! per-card text and attribute fields. Selection is isolated behind a small
//! set of pre-parsed selectors so extraction logic stays independent of the
//! tree-query library.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::models::TrendingItem;

/// Pre-parsed structural selectors for one repository card
///
/// All patterns are fixed strings matching the source page's markup; they are
/// parsed once at service construction.
#[derive(Debug, Clone)]
struct CardSelectors {
    card: Selector,
    title_link: Selector,
    description: Selector,
    stars_today: Selector,
    language: Selector,
    total_stars: Selector,
    forks: Selector,
}

impl CardSelectors {
    fn new() -> Self {
        Self {
            card: parse_selector("article.Box-row"),
            title_link: parse_selector("h2 a"),
            description: parse_selector("p.col-9"),
            stars_today: parse_selector("span.d-inline-block.float-sm-right"),
            language: parse_selector("span[itemprop='programmingLanguage']"),
            total_stars: parse_selector("a[href$='/stargazers']"),
            forks: parse_selector("a[href$='/forks']"),
        }
    }
}

// Selectors are compile-time constants; a parse failure is a programming
// error, not a runtime condition.
fn parse_selector(pattern: &str) -> Selector {
    Selector::parse(pattern).expect("static selector must parse")
}

/// Extracts `TrendingItem`s from the source page HTML
#[derive(Debug, Clone)]
pub struct CardExtractor {
    selectors: CardSelectors,
}

impl Default for CardExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl CardExtractor {
    pub fn new() -> Self {
        Self {
            selectors: CardSelectors::new(),
        }
    }

    /// Extract all structurally valid repository cards, in document order
    ///
    /// Cards missing a name or url are dropped here and never reach
    /// rendering; the gap is logged at debug level and does not affect
    /// neighboring cards.
    pub fn extract(&self, body: &str) -> Vec<TrendingItem> {
        let document = Html::parse_document(body);

        let mut items = Vec::new();
        for card in document.select(&self.selectors.card) {
            match self.extract_card(&card) {
                Some(item) => items.push(item),
                None => debug!("Skipping card with missing name or url"),
            }
        }
        items
    }

    fn extract_card(&self, card: &ElementRef<'_>) -> Option<TrendingItem> {
        let title_link = card.select(&self.selectors.title_link).next()?;
        let name = trimmed_text(&title_link)?;
        let url = title_link
            .value()
            .attr("href")
            .map(str::trim)
            .filter(|href| !href.is_empty())?
            .to_string();

        Some(TrendingItem {
            name,
            url,
            description: self.field(card, &self.selectors.description),
            language: self.field(card, &self.selectors.language),
            total_stars: self.field(card, &self.selectors.total_stars),
            stars_today: self.field(card, &self.selectors.stars_today),
            forks: self.field(card, &self.selectors.forks),
        })
    }

    fn field(&self, card: &ElementRef<'_>, selector: &Selector) -> Option<String> {
        card.select(selector).next().and_then(|el| trimmed_text(&el))
    }
}

/// Collect an element's text, trimmed; `None` if empty after trimming
fn trimmed_text(element: &ElementRef<'_>) -> Option<String> {
    let text = element.text().collect::<String>();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
