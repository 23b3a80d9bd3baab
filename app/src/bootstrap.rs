use crate::config::AppConfig;

/// Load `.env` and the runtime configuration.
pub fn init_foundation() -> AppConfig {
    load_dotenv();
    let config = AppConfig::load();
    tracing::info!(
        download_dir = %config.download_dir.display(),
        custom_font = config.font_path.is_some(),
        "Settings loaded"
    );
    config
}

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}
