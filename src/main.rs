use clap::Parser;
use robot_cleaner::domain::ports::ExecutionStore;
use robot_cleaner::utils::{logger, validation::Validate};
use robot_cleaner::{create_router, AppConfig, AppState, CliConfig, InMemoryStore};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting robot-cleaner service");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    let config = AppConfig::load(&cli);
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let state = build_state(&config).await?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("✅ Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_state(config: &AppConfig) -> Result<AppState, Box<dyn std::error::Error>> {
    let store: Arc<dyn ExecutionStore> = match &config.database_url {
        #[cfg(feature = "postgres")]
        Some(url) => {
            tracing::info!("📦 Using the postgres execution store");
            let store = robot_cleaner::adapters::PostgresStore::connect(url).await?;
            store.run_migrations().await?;
            Arc::new(store)
        }
        #[cfg(not(feature = "postgres"))]
        Some(_) => {
            tracing::warn!(
                "--database-url given but built without the postgres feature; keeping executions in memory"
            );
            Arc::new(InMemoryStore::new())
        }
        None => {
            tracing::info!("📦 Keeping executions in memory");
            Arc::new(InMemoryStore::new())
        }
    };

    Ok(AppState {
        store,
        config: Arc::new(config.clone()),
    })
}
