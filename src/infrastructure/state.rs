//! Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::application::ports::inbound::SheetDataProvider;
use crate::application::services::SheetService;
use crate::domain::value_objects::GameContext;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::localization::load_localization;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub sheets: Arc<dyn SheetDataProvider>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let localization = load_localization(config.lang_path.as_deref())?;
        tracing::info!("Loaded {} localized strings", localization.len());

        Ok(Self::with_context(config, GameContext::new(localization)))
    }

    pub fn with_context(config: AppConfig, context: GameContext) -> Self {
        let sheets: Arc<dyn SheetDataProvider> = Arc::new(SheetService::new(Arc::new(context)));
        Self { config, sheets }
    }
}
