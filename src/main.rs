//! Campus Navigator server binary.

use std::sync::Arc;

use secrecy::ExposeSecret;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use campus_navigator::adapters::{
    app_router, AppState, GeminiConfig, GeminiProvider, InMemoryTrafficReportStore,
    MockAIProvider,
};
use campus_navigator::config::{AiConfig, AiProvider, AppConfig, ConfigError, ValidationError};
use campus_navigator::ports::{AIError, AIProvider};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationError),

    #[error("AI provider setup failed: {0}")]
    Provider(#[from] AIError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let ai_provider = build_provider(&config.ai)?;
    let info = ai_provider.provider_info();
    let campus = config.campus.context()?;
    let report_store = Arc::new(InMemoryTrafficReportStore::new());

    tracing::info!(
        provider = %info.name,
        model = %info.model,
        campus = campus.name(),
        environment = ?config.server.environment,
        "Starting campus navigator"
    );

    let state = AppState::new(ai_provider, report_store, campus);
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured level; JSON lines in production.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_provider(ai: &AiConfig) -> Result<Arc<dyn AIProvider>, StartupError> {
    match ai.provider {
        AiProvider::Gemini => {
            let key = ai
                .gemini_api_key
                .as_ref()
                .ok_or(ValidationError::MissingRequired("GEMINI_API_KEY"))?;

            let mut gemini = GeminiConfig::new(key.expose_secret().clone())
                .with_model(ai.model.clone())
                .with_timeout(ai.timeout())
                .with_max_retries(ai.max_retries);
            if let Some(url) = &ai.base_url {
                gemini = gemini.with_base_url(url.clone());
            }

            Ok(Arc::new(GeminiProvider::new(gemini)?))
        }
        AiProvider::Mock => {
            tracing::warn!("Using the mock AI provider; answers are canned");
            Ok(Arc::new(MockAIProvider::new()))
        }
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
