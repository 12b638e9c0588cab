//! Trending Widget Service
//!
//! Serves a dashboard-embeddable HTML fragment listing trending GitHub
//! repositories. Each request fetches the trending page, extracts repository
//! cards, and renders them; nothing is cached or persisted between requests.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use models::TrendingItem;
pub use services::{CardExtractor, SourceClient, SourceError, WidgetService};

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    pub widget: WidgetService,
}
