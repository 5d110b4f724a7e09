//! HTML rendering for dashboard cards.
//!
//! Every value interpolated into markup goes through [`escape_html`]; link
//! targets additionally go through [`safe_href`].

pub mod cards;
pub mod datetime;

pub use cards::{buzz_level, general_info_card, news_card, price_card, sentiment_card, Card};
pub use datetime::{format_date_time, format_date_time_in};

pub const ERROR_MARKUP: &str = r#"<p class="text-red-500">Error loading data</p>"#;

pub const LOADING_MARKUP: &str = r#"<p class="loading">Loading...</p>"#;

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Returns the link unchanged when it is http(s) or relative, `#` otherwise.
pub fn safe_href(raw: &str) -> &str {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return trimmed;
    }
    match lower.find(':') {
        // a colon before any path separator means a scheme we don't allow
        Some(colon) if !lower[..colon].contains(&['/', '?', '#'][..]) => "#",
        _ => trimmed,
    }
}
