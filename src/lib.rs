pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::policy::AssetPolicy;
pub use config::{cli::LocalStorage, FetchConfig, ServeConfig, DEFAULT_CANDIDATE_URLS};
pub use core::{bootstrap::ModelBootstrap, fetcher::FallbackFetcher, server::DevServer};
pub use domain::model::{AttemptFailure, FetchOutcome, ModelCatalog};
pub use utils::error::{KitError, Result};
