pub mod cli;
pub mod policy;

use crate::domain::ports::FetchPlan;
use crate::utils::error::{KitError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Mirrors tried in order; all serve the same WebLLM bundle.
pub const DEFAULT_CANDIDATE_URLS: [&str; 3] = [
    "https://unpkg.com/@mlc-ai/web-llm@latest/dist/index.js",
    "https://cdn.jsdelivr.net/npm/@mlc-ai/web-llm@latest/dist/index.js",
    "https://unpkg.com/@mlc-ai/web-llm/dist/index.js",
];

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "fetch_webllm")]
#[command(about = "Download the WebLLM library as a local fallback copy")]
pub struct FetchConfig {
    /// Candidate URLs, tried in order until one succeeds
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_CANDIDATE_URLS.iter().map(|s| s.to_string()))]
    pub urls: Vec<String>,

    #[arg(long, default_value = "./lib")]
    pub output_dir: String,

    #[arg(long, default_value = "web-llm.js")]
    pub file_name: String,

    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl FetchPlan for FetchConfig {
    fn candidate_urls(&self) -> &[String] {
        &self.urls
    }

    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn attempt_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for FetchConfig {
    fn validate(&self) -> Result<()> {
        if self.urls.is_empty() {
            return Err(KitError::InvalidConfigValueError {
                field: "urls".to_string(),
                value: String::new(),
                reason: "At least one candidate URL is required".to_string(),
            });
        }
        for url in &self.urls {
            validate_url("urls", url)?;
        }
        validate_path("output_dir", &self.output_dir)?;
        validate_non_empty_string("file_name", &self.file_name)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds as usize, 1)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "webllm-kit")]
#[command(about = "Serve the chat demo with CORS and cross-origin isolation headers")]
pub struct ServeConfig {
    #[arg(long, default_value = "8000")]
    pub port: u16,

    /// Directory served as the web root
    #[arg(long, default_value = ".")]
    pub root: String,

    #[arg(long, default_value = "./models")]
    pub models_dir: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for ServeConfig {
    fn validate(&self) -> Result<()> {
        validate_path("root", &self.root)?;
        validate_path("models_dir", &self.models_dir)?;
        validate_positive_number("port", self.port as usize, 1)?;
        Ok(())
    }
}
