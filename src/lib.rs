// folio: data layer for a personal portfolio page.
// Fetches a GitHub profile, repositories and language shares, caches them,
// infers skills, and degrades to static data when GitHub is unavailable.

pub mod cache;
pub mod config;
pub mod data_client;
pub mod error;
pub mod fallback;
pub mod featured;
pub mod github;
pub mod humanize;
pub mod languages;
pub mod portfolio;
pub mod skills;

pub use config::Settings;
pub use data_client::DataClient;
pub use error::{FolioError, Result};
pub use fallback::{FallbackPolicy, Lenient, Strict};
pub use portfolio::{HealthReport, Portfolio, Project, Snapshot};
