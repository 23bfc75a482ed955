use crate::domain::model::{AttemptFailure, FetchOutcome};
use crate::domain::ports::{FetchPlan, Storage};
use crate::utils::error::Result;
use reqwest::Client;

pub struct FallbackFetcher<S: Storage, C: FetchPlan> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: FetchPlan> FallbackFetcher<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let client = Client::builder()
            .user_agent("webllm-kit/0.1")
            .timeout(config.attempt_timeout())
            .build()?;

        Ok(Self {
            storage,
            config,
            client,
        })
    }

    /// Try each candidate in order and stop at the first success. Candidate
    /// failures are collected into the outcome; storage failures propagate.
    pub async fn run(&self) -> Result<FetchOutcome> {
        // 先建立目標目錄,全部失敗時目錄仍然存在
        self.storage.ensure_root().await?;

        let mut attempts = Vec::new();

        for url in self.config.candidate_urls() {
            tracing::info!("Trying to download from: {}", url);

            match self.try_fetch(url).await {
                Ok(body) => {
                    self.storage
                        .write_file(self.config.file_name(), &body)
                        .await?;

                    tracing::info!("✅ Downloaded {} bytes from {}", body.len(), url);
                    return Ok(FetchOutcome::Fetched {
                        url: url.clone(),
                        bytes: body.len() as u64,
                    });
                }
                Err(e) => {
                    tracing::warn!("❌ Failed to download from {}: {}", url, e);
                    attempts.push(AttemptFailure {
                        url: url.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        tracing::error!("❌ All {} download sources failed", attempts.len());
        Ok(FetchOutcome::AllFailed { attempts })
    }

    async fn try_fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
