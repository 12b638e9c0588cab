//! Widget Service
//!
//! Ties the per-request pipeline together: fetch the source page, extract
//! repository cards, render the embeddable fragment. Stateless between
//! requests; every invocation re-fetches and re-parses.

use tracing::debug;

use crate::services::extract::CardExtractor;
use crate::services::render::render_fragment;
use crate::services::source::{SourceClient, SourceError};

/// Service producing the trending widget fragment
#[derive(Debug, Clone)]
pub struct WidgetService {
    source: SourceClient,
    extractor: CardExtractor,
}

impl WidgetService {
    pub fn new(source: SourceClient) -> Self {
        Self {
            source,
            extractor: CardExtractor::new(),
        }
    }

    /// Fetch the source page and render the widget fragment
    pub async fn build_fragment(&self) -> Result<String, SourceError> {
        let body = self.source.fetch().await?;
        Ok(self.render_page(&body))
    }

    /// Extract and render from an already-fetched source document
    ///
    /// Split out from the fetch so the pipeline can be exercised directly
    /// against a constructed document.
    pub fn render_page(&self, body: &str) -> String {
        let items = self.extractor.extract(body);
        debug!(count = items.len(), "Extracted trending items");
        render_fragment(&items)
    }
}
