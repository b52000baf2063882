//! Process-wide configuration, loaded once from the environment.

use std::sync::OnceLock;

use futenote_core::config::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Configuration for this process (loaded on first call)
pub fn app_config() -> &'static AppConfig {
    APP_CONFIG.get_or_init(load_app_config)
}

/// Invalid values are logged and replaced by the defaults so the app can
/// still start.
fn load_app_config() -> AppConfig {
    match AppConfig::from_env() {
        Ok(config) => {
            tracing::debug!(
                user = %config.user.name,
                seed_file = ?config.seed_file,
                "Loaded configuration"
            );
            config
        }
        Err(e) => {
            tracing::warn!("Invalid configuration: {}. Using defaults.", e);
            AppConfig::default()
        }
    }
}
