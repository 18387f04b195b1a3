use anyhow::Result;
use newcode_landing::config::Config;
use newcode_landing::i18n::LanguageContext;
use newcode_landing::notify::TracingNotifier;
use newcode_landing::server::{self, AppState};
use newcode_landing::storage::{FileStore, PreferenceStore};
use newcode_landing::submission::SimulatedSubmitter;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("newcode_landing=info".parse()?),
        )
        .init();

    info!("Starting NewCode landing service");

    // Load configuration from environment
    let config = Arc::new(Config::from_env()?);

    // Restore the site-wide language preference
    let store: Arc<dyn PreferenceStore> = Arc::new(FileStore::new(&config.preferences_file));
    let language = LanguageContext::new(Some(store));
    info!(
        "Language preference: {} ({})",
        language.code(),
        config.preferences_file
    );

    let submitter = Arc::new(SimulatedSubmitter::from_config(&config));
    if config.simulate_submit_failure {
        info!("Simulated submissions will fail");
    }

    server::serve(AppState {
        config,
        language,
        submitter,
        notifier: Arc::new(TracingNotifier),
    })
    .await
}
