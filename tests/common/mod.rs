/*!
 * Common test utilities for the lingoswitch test suite.
 */

use std::collections::HashMap;
use std::sync::Arc;

use lingoswitch::app_config::{ApiConfig, Config, Engine};
use lingoswitch::factory::ProviderFactory;
use lingoswitch::providers::{MockProvider, TranslationProvider};
use lingoswitch::translation_service::TranslationService;

/// Initialize logging for tests that want provider/factory output
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Service backed by the real provider set with the local stub active
pub fn local_service() -> TranslationService {
    TranslationService::new(&Config::default())
}

/// Service dispatching to a single mock provider behind the given engine
pub fn service_with_mock(mock: MockProvider, engine: &str) -> TranslationService {
    let mut providers: HashMap<Engine, Arc<dyn TranslationProvider>> = HashMap::new();
    providers.insert(Engine::Local, Arc::new(mock));
    let factory = ProviderFactory::with_providers(providers, engine);
    TranslationService::with_factory(Arc::new(factory), ApiConfig::default())
}

/// Factory with working mocks behind every known engine
pub fn mock_factory_all_engines() -> ProviderFactory {
    let mut providers: HashMap<Engine, Arc<dyn TranslationProvider>> = HashMap::new();
    for engine in Engine::all() {
        providers.insert(engine, Arc::new(MockProvider::working()));
    }
    ProviderFactory::with_providers(providers, "local")
}
