//! Dashboard controller: one fetch → render → write pipeline per category.

use crate::api::{fetch_records, DataSource, Endpoint, FetchOutcome};
use crate::models::{GeneralInfo, NewsItem, PriceRecord, SentimentRecord};
use crate::render::{Card, ERROR_MARKUP};
use crate::view::{Container, Page};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Handles to the four containers the controller writes to.
#[derive(Clone)]
pub struct Containers {
    pub general_info: Arc<dyn Container>,
    pub prices: Arc<dyn Container>,
    pub news: Arc<dyn Container>,
    pub sentiment: Arc<dyn Container>,
}

impl From<&Page> for Containers {
    fn from(page: &Page) -> Self {
        Self {
            general_info: page.general_info.clone(),
            prices: page.prices.clone(),
            news: page.news.clone(),
            sentiment: page.sentiment.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    PageLoad,
    RefreshButton,
}

pub struct DashboardController {
    source: Arc<dyn DataSource>,
    containers: Containers,
}

impl DashboardController {
    pub fn new(source: Arc<dyn DataSource>, containers: Containers) -> Self {
        Self { source, containers }
    }

    pub async fn load_general_info(&self) {
        let container = self.containers.general_info.as_ref();
        self.load::<GeneralInfo>(Endpoint::GeneralInfo, container).await;
    }

    pub async fn load_prices(&self) {
        self.load::<PriceRecord>(Endpoint::Prices, self.containers.prices.as_ref()).await;
    }

    pub async fn load_news(&self) {
        self.load::<NewsItem>(Endpoint::News, self.containers.news.as_ref()).await;
    }

    pub async fn load_sentiment(&self) {
        let container = self.containers.sentiment.as_ref();
        self.load::<SentimentRecord>(Endpoint::Sentiment, container).await;
    }

    /// Runs all four loads concurrently and returns once every container
    /// has been written.
    pub async fn load_all(&self) {
        tokio::join!(
            self.load_general_info(),
            self.load_prices(),
            self.load_news(),
            self.load_sentiment(),
        );
    }

    /// Spawns the four loads as independent tasks. Overlapping triggers are
    /// not coordinated: the last load to resolve owns its container.
    pub fn trigger(self: &Arc<Self>, trigger: Trigger) -> Vec<JoinHandle<()>> {
        info!("Loading dashboard ({:?})", trigger);

        let general_info = Arc::clone(self);
        let prices = Arc::clone(self);
        let news = Arc::clone(self);
        let sentiment = Arc::clone(self);

        vec![
            tokio::spawn(async move { general_info.load_general_info().await }),
            tokio::spawn(async move { prices.load_prices().await }),
            tokio::spawn(async move { news.load_news().await }),
            tokio::spawn(async move { sentiment.load_sentiment().await }),
        ]
    }

    async fn load<T>(&self, endpoint: Endpoint, container: &dyn Container)
    where
        T: Card + DeserializeOwned + Send,
    {
        let markup = match fetch_records::<T>(self.source.as_ref(), endpoint).await {
            FetchOutcome::Records(records) => {
                info!("Loaded {} records from {}", records.len(), endpoint.path());
                records.iter().map(Card::to_html).collect::<String>()
            }
            FetchOutcome::Failed(_) => ERROR_MARKUP.to_string(),
        };
        container.set_markup(markup);
    }
}
