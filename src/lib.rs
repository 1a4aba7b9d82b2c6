/*!
 * # lingoswitch
 *
 * Engine-switchable text translation core with pluggable backend
 * providers.
 *
 * ## Features
 *
 * - One capability contract (`TranslationProvider`) over heterogeneous
 *   backends:
 *   - Remote translation REST API
 *   - Prompt-based LLM (OpenAI-compatible chat completions)
 *   - Local model stub
 * - Runtime engine switching, safe under concurrent dispatch
 * - Uniform request validation, operation timing and response shaping
 * - Health probing that always yields a structured answer
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `models`: Request and response types
 * - `validation`: Request shape checks ahead of dispatch
 * - `language_catalog`: Shared language catalog and display names
 * - `providers`: Backend implementations behind the capability trait:
 *   - `providers::remote`: Remote translation API client
 *   - `providers::llm`: LLM chat-completion client
 *   - `providers::local`: Local model stub
 *   - `providers::mock`: Test doubles
 * - `factory`: Provider registry and engine selection
 * - `translation_service`: Orchestration over the factory
 * - `errors`: Custom error types for the dispatch core
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod factory;
pub mod language_catalog;
pub mod models;
pub mod providers;
pub mod translation_service;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::{Config, Engine};
pub use errors::{ProviderError, TranslationError};
pub use factory::ProviderFactory;
pub use models::{
    BatchTranslationRequest, BatchTranslationResult, HealthStatus, LanguageCatalog,
    SupportedLanguages, TranslationRequest, TranslationResult,
};
pub use providers::TranslationProvider;
pub use translation_service::TranslationService;
