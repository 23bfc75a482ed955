use serde::{Deserialize, Serialize};

/// Result of one full fallback-fetch run over the candidate list.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Fetched { url: String, bytes: u64 },
    AllFailed { attempts: Vec<AttemptFailure> },
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Fetched { .. })
    }
}

#[derive(Debug, Clone)]
pub struct AttemptFailure {
    pub url: String,
    pub reason: String,
}

/// Models WebLLM can load in the browser without any manual download.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelCatalog {
    pub models: Vec<String>,
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self {
            models: [
                "Llama-2-7b-chat-hf-q4f16_1-MLC",
                "RedPajama-INCITE-Chat-3B-v1-q4f16_1-MLC",
                "vicuna-v1-7b-q4f16_1-MLC",
                "Llama-2-13b-chat-hf-q4f16_1-MLC",
            ]
            .iter()
            .map(|m| m.to_string())
            .collect(),
        }
    }
}

impl ModelCatalog {
    pub fn info_text(&self) -> String {
        let mut text = String::new();
        text.push_str("WebLLM Supported Models (no manual download required):\n");
        text.push_str(&"=".repeat(50));
        text.push_str("\n\n");
        for model in &self.models {
            text.push_str(&format!("- {}\n", model));
        }
        text.push_str(
            "\nThese models will be automatically downloaded by WebLLM when first used.\n",
        );
        text
    }
}
