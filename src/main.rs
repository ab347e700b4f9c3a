//! Wiring & DI. Entry point: bootstrap adapters, build the application context, run UI.
//! No business logic here.

use community_events::adapters::persistence::JsonFileStore;
use community_events::adapters::share::ConsoleShare;
use community_events::adapters::ui::tui::TuiInputPort;
use community_events::ports::{BlobStore, InputPort, SharePort};
use community_events::shared::config::AppConfig;
use community_events::usecases::{EventApp, PersistentStore};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "invalid configuration, using defaults");
            AppConfig::default()
        }
    };

    community_events::adapters::ui::init_ui();

    let data_path = PathBuf::from(cfg.data_dir_or_default());
    let data_dir_abs = data_path
        .canonicalize()
        .unwrap_or_else(|_| data_path.clone());
    info!(path = %data_dir_abs.display(), "data directory");

    // --- Outbound adapters ---
    let blob: Arc<dyn BlobStore> = Arc::new(JsonFileStore::new(&data_path));
    let share: Arc<dyn SharePort> = Arc::new(ConsoleShare::new(cfg.share_dir.as_deref()));

    // --- Application context: loads users and events once ---
    let app = Arc::new(
        EventApp::bootstrap(PersistentStore::new(blob), share, cfg.seed_user())
            .await
            .map_err(|e| anyhow::anyhow!("startup failed: {}", e))?,
    );

    // --- Run (Auth -> Home -> details / update / stats) ---
    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(app));
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    info!("bye");
    Ok(())
}
