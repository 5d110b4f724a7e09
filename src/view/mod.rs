//! View side of the dashboard: containers and the page that hosts them.
//!
//! A container is any region whose markup is replaced wholesale by a load
//! routine. [`MarkupSlot`] is the in-process implementation backing the
//! served page.

mod page;

pub use page::{render_page, STYLES};

use crate::error::Result;
use crate::render::LOADING_MARKUP;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

pub const GENERAL_INFO_CONTAINER: &str = "general-info-container";
pub const PRICES_CONTAINER: &str = "prices-container";
pub const NEWS_CONTAINER: &str = "news-container";
pub const SENTIMENT_CONTAINER: &str = "sentiment-container";
pub const REFRESH_BUTTON: &str = "refresh-btn";

pub trait Container: Send + Sync {
    fn id(&self) -> &str;
    fn set_markup(&self, markup: String);
}

#[derive(Debug)]
pub struct MarkupSlot {
    id: String,
    markup: RwLock<String>,
}

impl MarkupSlot {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            markup: RwLock::new(LOADING_MARKUP.to_string()),
        }
    }

    pub fn markup(&self) -> String {
        self.markup
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Container for MarkupSlot {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_markup(&self, markup: String) {
        *self.markup.write().unwrap_or_else(PoisonError::into_inner) = markup;
    }
}

/// The four containers of the dashboard page.
#[derive(Debug, Clone)]
pub struct Page {
    pub general_info: Arc<MarkupSlot>,
    pub prices: Arc<MarkupSlot>,
    pub news: Arc<MarkupSlot>,
    pub sentiment: Arc<MarkupSlot>,
}

impl Page {
    pub fn new() -> Self {
        Self {
            general_info: Arc::new(MarkupSlot::new(GENERAL_INFO_CONTAINER)),
            prices: Arc::new(MarkupSlot::new(PRICES_CONTAINER)),
            news: Arc::new(MarkupSlot::new(NEWS_CONTAINER)),
            sentiment: Arc::new(MarkupSlot::new(SENTIMENT_CONTAINER)),
        }
    }

    pub fn render(&self) -> String {
        render_page(self)
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.render())?;
        Ok(())
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_starts_loading_and_replaces_wholesale() {
        let slot = MarkupSlot::new(PRICES_CONTAINER);
        assert_eq!(slot.markup(), LOADING_MARKUP);

        slot.set_markup("<p>first</p>".to_string());
        slot.set_markup("<p>second</p>".to_string());
        assert_eq!(slot.markup(), "<p>second</p>");
        assert_eq!(slot.id(), "prices-container");
    }

    #[test]
    fn test_write_to_saves_rendered_page() {
        let page = Page::new();
        page.news.set_markup("<p>headline</p>".to_string());

        let path = std::env::temp_dir().join(format!("coin-dashboard-{}.html", std::process::id()));
        page.write_to(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(written, page.render());
        assert!(written.contains("<p>headline</p>"));
    }

    #[test]
    fn test_write_to_missing_directory_is_io_error() {
        let path = std::env::temp_dir()
            .join("coin-dashboard-missing-dir")
            .join("nested")
            .join("page.html");
        let err = Page::new().write_to(&path).unwrap_err();
        assert!(matches!(err, crate::error::DashboardError::Io(_)));
    }

    #[test]
    fn test_page_containers_have_fixed_ids() {
        let page = Page::new();
        assert_eq!(page.general_info.id(), GENERAL_INFO_CONTAINER);
        assert_eq!(page.prices.id(), PRICES_CONTAINER);
        assert_eq!(page.news.id(), NEWS_CONTAINER);
        assert_eq!(page.sentiment.id(), SENTIMENT_CONTAINER);
    }
}
