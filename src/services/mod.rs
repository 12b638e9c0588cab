pub mod extract;
pub mod render;
pub mod source;
pub mod widget;


pub use extract::CardExtractor;
pub use render::{escape_html, render_fragment};
pub use source::{SourceClient, SourceError};
pub use widget::WidgetService;
