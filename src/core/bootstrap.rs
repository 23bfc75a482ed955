use crate::domain::model::ModelCatalog;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

pub const INFO_FILE_NAME: &str = "supported_models.txt";

/// Prepares the model-info directory for the web app. WebLLM pulls model
/// weights itself on first use; only the info file lives here.
pub struct ModelBootstrap<S: Storage> {
    storage: S,
    catalog: ModelCatalog,
}

impl<S: Storage> ModelBootstrap<S> {
    pub fn new(storage: S, catalog: ModelCatalog) -> Self {
        Self { storage, catalog }
    }

    pub async fn run(&self) -> Result<()> {
        self.storage.ensure_root().await?;

        // 每次啟動整個重寫,不做合併
        self.storage
            .write_file(INFO_FILE_NAME, self.catalog.info_text().as_bytes())
            .await?;

        tracing::info!("✓ Created model info file: {}", INFO_FILE_NAME);
        tracing::info!("📋 Supported models:");
        for model in &self.catalog.models {
            tracing::info!("   - {}", model);
        }
        tracing::info!("✨ No manual model download required!");

        Ok(())
    }
}
