//! Fragment Rendering Service
//!
//! Renders extracted items into the HTML fragment the dashboard host embeds.
//! Markup and class names are a rendering contract with the host and follow
//! its list/badge vocabulary exactly. Unlike the markup itself, all
//! interpolated text and attribute values are HTML-escaped.

use std::fmt::Write;

use crate::models::TrendingItem;

/// Scoped styling for the widget list, emitted ahead of the fragment
const WIDGET_STYLE: &str = r#"
<style>
  .gh-trending-list .list-item {
    border-bottom: 2px solid var(--color-border);
    padding: 10px;
    margin-bottom: 10px;
    background-color: rgba(255, 255, 255, 0.05);
  }
  .gh-trending-list .list-item:last-child {
    margin-bottom: 0;
    border-bottom: none;
    padding: 10px;
  }
  .gh-trending-list .repo-language-color {
	display: inline-block;
	width: 10px;
	height: 10px;
	border-radius: 50%;
	margin-right: 4px;
	vertical-align: middle;
	background-color: var(--color-text-secondary);
  }
</style>
"#;

/// Inline fork glyph used for the fork-count badge
const FORK_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16" width="1em" height="1em" fill="currentColor"><path d="M5 5.372v.878c0 .414.336.75.75.75h4.5a.75.75 0 0 0 .75-.75v-.878a2.25 2.25 0 1 1 1.5 0v.878a2.25 2.25 0 0 1-2.25 2.25h-1.5v2.128a2.251 2.251 0 1 1-1.5 0V8.5h-1.5A2.25 2.25 0 0 1 3.5 6.25v-.878a2.25 2.25 0 1 1 1.5 0ZM5 3.25a.75.75 0 1 0-1.5 0 .75.75 0 0 0 1.5 0Zm6.5.75a.75.75 0 1 0 0-1.5.75.75 0 0 0 0 1.5Zm-5 8.25a.75.75 0 1 0-1.5 0 .75.75 0 0 0 1.5 0Z"></path></svg>"#;

/// Base URL the relative card links resolve against
const LINK_BASE: &str = "https://github.com";

/// Render items, in the order given, into the embeddable fragment
///
/// Zero items still produce the style block and a well-formed empty outer
/// list. Optional badges (language, total stars, forks, stars today) are
/// emitted only when the source field is present.
pub fn render_fragment(items: &[TrendingItem]) -> String {
    let mut html = String::with_capacity(WIDGET_STYLE.len() + 512 * items.len());
    html.push_str(WIDGET_STYLE);
    html.push_str(r#"<ul class="list gh-trending-list">"#);

    for item in items {
        render_item(&mut html, item);
    }

    html.push_str("</ul>");
    html
}

fn render_item(html: &mut String, item: &TrendingItem) {
    html.push_str(r#"<li class="list-item">"#);

    let _ = write!(
        html,
        r#"<a class="size-h4 color-highlight block text-truncate" href="{}{}" target="_blank">{}</a>"#,
        LINK_BASE,
        escape_html(&item.url),
        escape_html(&item.name),
    );

    if let Some(description) = &item.description {
        let _ = write!(
            html,
            r#"<p class="color-paragraph size-h5 margin-top-5">{}</p>"#,
            escape_html(description),
        );
    }

    html.push_str(r#"<ul class="list-horizontal-text size-h6 margin-top-10">"#);
    if let Some(language) = &item.language {
        let _ = write!(
            html,
            r#"<li><span class="repo-language-color"></span> {}</li>"#,
            escape_html(language),
        );
    }
    if let Some(total_stars) = &item.total_stars {
        let _ = write!(html, "<li>⭐ {}</li>", escape_html(total_stars));
    }
    if let Some(forks) = &item.forks {
        let _ = write!(html, "<li>{} {}</li>", FORK_ICON, escape_html(forks));
    }
    if let Some(stars_today) = &item.stars_today {
        let _ = write!(html, "<li>⭐ {}</li>", escape_html(stars_today));
    }
    html.push_str("</ul>");

    html.push_str("</li>");
}

/// Escape text for interpolation into HTML content or attribute values
///
/// The source page is third-party content; anything lifted from it must not
/// be able to break out of the fragment's markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
