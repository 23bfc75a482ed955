use clap::Parser;
use webllm_kit::utils::{logger, validation::Validate};
use webllm_kit::{AssetPolicy, DevServer, LocalStorage, ModelBootstrap, ModelCatalog, ServeConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServeConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    println!("🧠 Offline LLM Web Application");
    println!("{}", "=".repeat(50));

    if config.verbose {
        tracing::debug!("Serve config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // 準備模型資訊目錄
    let storage = LocalStorage::new(config.models_dir.clone());
    let bootstrap = ModelBootstrap::new(storage, ModelCatalog::default());
    if let Err(e) = bootstrap.run().await {
        tracing::error!("❌ Failed to setup model environment: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    println!("\n🎉 Setup complete! Starting web server...");
    println!("📝 The web app will download models automatically when first used.");

    let server = DevServer::new(config.root.clone(), config.port, AssetPolicy::default());

    if let Err(e) = server.run().await {
        tracing::error!(
            "❌ Server failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            webllm_kit::utils::error::ErrorSeverity::Medium => 2, // 端口被占用
            webllm_kit::utils::error::ErrorSeverity::High => 1,
            webllm_kit::utils::error::ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}
