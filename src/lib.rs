pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod render;
pub mod server;
pub mod view;

pub use api::{ApiClient, DataSource, Endpoint, FetchOutcome};
pub use config::Config;
pub use dashboard::{Containers, DashboardController, Trigger};
pub use error::{DashboardError, Result};
pub use view::{Container, MarkupSlot, Page};
