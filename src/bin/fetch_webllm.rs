use clap::Parser;
use webllm_kit::utils::{logger, validation::Validate};
use webllm_kit::{FallbackFetcher, FetchConfig, FetchOutcome, LocalStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = FetchConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    println!("🔄 Downloading WebLLM library as fallback...");

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let output_dir = config.output_dir.clone();
    let file_name = config.file_name.clone();

    let storage = LocalStorage::new(output_dir.clone());
    let fetcher = match FallbackFetcher::new(storage, config) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    match fetcher.run().await {
        Ok(FetchOutcome::Fetched { url, bytes }) => {
            let local_path = std::path::Path::new(&output_dir).join(&file_name);
            println!(
                "✅ Successfully downloaded WebLLM to: {}",
                local_path.display()
            );
            println!("📦 File size: {} bytes (from {})", bytes, url);
        }
        Ok(FetchOutcome::AllFailed { attempts }) => {
            eprintln!(
                "❌ Failed to download WebLLM from all {} sources",
                attempts.len()
            );
            eprintln!("💡 Check your network connection and try again");
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!(
                "❌ Download failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
