/*!
 * Provider registry and engine selection.
 *
 * The factory owns one instance of every concrete provider and the
 * process-wide engine selection. The selection is a raw string guarded
 * by a `parking_lot::RwLock`: it is parsed on every dispatch, so a
 * misconfigured name stays visible until the first operation resolves
 * it and fails with `UnknownEngine`.
 */

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info};
use parking_lot::RwLock;

use crate::app_config::{Config, Engine};
use crate::errors::TranslationError;
use crate::providers::{
    LlmTranslationProvider, LocalTranslationProvider, RemoteTranslationProvider,
    TranslationProvider,
};

/// Registry of provider instances plus the active engine selection
pub struct ProviderFactory {
    /// All constructed providers, keyed by engine
    providers: HashMap<Engine, Arc<dyn TranslationProvider>>,
    /// Current engine selection, swapped atomically by `switch_engine`
    selection: RwLock<String>,
}

impl ProviderFactory {
    /// Build the full provider set from configuration
    pub fn from_config(config: &Config) -> Self {
        let mut providers: HashMap<Engine, Arc<dyn TranslationProvider>> = HashMap::new();
        providers.insert(
            Engine::Remote,
            Arc::new(RemoteTranslationProvider::new(&config.remote)),
        );
        providers.insert(Engine::Llm, Arc::new(LlmTranslationProvider::new(&config.llm)));
        providers.insert(
            Engine::Local,
            Arc::new(LocalTranslationProvider::new(&config.local)),
        );

        Self {
            providers,
            selection: RwLock::new(config.engine.clone()),
        }
    }

    /// Build a factory over an explicit provider set
    ///
    /// Used by tests to inject mock providers behind arbitrary engines.
    pub fn with_providers(
        providers: HashMap<Engine, Arc<dyn TranslationProvider>>,
        engine: impl Into<String>,
    ) -> Self {
        Self {
            providers,
            selection: RwLock::new(engine.into()),
        }
    }

    /// Resolve the currently selected provider
    ///
    /// Matches the selection case-insensitively against the known engine
    /// set. Fails with `UnknownEngine` when it matches none; that is a
    /// configuration error, fatal to the calling operation.
    pub fn get_provider(&self) -> Result<Arc<dyn TranslationProvider>, TranslationError> {
        let selection = self.selection.read().clone();
        let engine: Engine = selection.parse()?;

        let provider = self
            .providers
            .get(&engine)
            .cloned()
            .ok_or_else(|| TranslationError::UnknownEngine(selection))?;

        debug!("Using {} provider", engine.display_name());
        Ok(provider)
    }

    /// Switch the active engine and return its provider
    ///
    /// Validates before writing: an unknown name fails with
    /// `UnknownEngine` and leaves the previous selection intact.
    pub fn switch_engine(
        &self,
        engine: &str,
    ) -> Result<Arc<dyn TranslationProvider>, TranslationError> {
        let parsed: Engine = engine.parse()?;
        let provider = self
            .providers
            .get(&parsed)
            .cloned()
            .ok_or_else(|| TranslationError::UnknownEngine(engine.to_string()))?;

        *self.selection.write() = parsed.as_str().to_string();
        info!("Switched translation engine to {}", parsed);
        Ok(provider)
    }

    /// The current engine selection string
    pub fn current_engine(&self) -> String {
        self.selection.read().clone()
    }
}

impl std::fmt::Debug for ProviderFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderFactory")
            .field("engines", &self.providers.keys().collect::<Vec<_>>())
            .field("selection", &*self.selection.read())
            .finish()
    }
}
