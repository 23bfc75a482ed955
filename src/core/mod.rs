pub mod bootstrap;
pub mod fetcher;
pub mod server;

pub use crate::domain::model::{AttemptFailure, FetchOutcome, ModelCatalog};
pub use crate::domain::ports::{FetchPlan, ServePolicy, Storage};
pub use crate::utils::error::Result;
