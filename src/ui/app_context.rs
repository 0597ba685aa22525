use crate::api::AnalysisServiceManager;
use crate::config::Config;

/// Process-wide handles shared by every component
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub service: AnalysisServiceManager,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let service = AnalysisServiceManager::from_config(&config);
        Self { config, service }
    }
}
