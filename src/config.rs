use tracing::info;

/// Base URL used when the environment does not name a service
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Application configuration
/// In debug builds: loads from .env file, then environment variables
/// In release builds: environment variables only
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the accessibility analysis service
    pub api_base_url: String,
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode activated - loaded .env file");
            }
        }

        Self::from_env()
    }

    /// Load configuration from environment variables
    fn from_env() -> Self {
        let api_base_url = std::env::var("ACHECK_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        info!("Config: Analysis service at {}", api_base_url);

        Self { api_base_url }
    }
}

/// Read the app-wide config provided by the root component
pub fn use_config() -> Config {
    use dioxus::prelude::use_context;

    use_context::<crate::ui::AppContext>().config
}
