pub mod widget;

#[cfg(test)]
mod widget_http_tests;

pub use widget::configure_widget_routes;
