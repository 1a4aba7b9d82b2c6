/*!
 * Tests for application configuration loading and defaults
 */

use std::io::Write;

use lingoswitch::app_config::{Config, Engine, LogLevel};

/// Test default configuration values
#[test]
fn test_defaultConfig_shouldUseLocalEngineAndStandardLimits() {
    let config = Config::default();
    assert_eq!(config.engine, "local");
    assert_eq!(config.api.max_text_length, 5000);
    assert_eq!(config.api.max_batch_size, 100);
    assert_eq!(config.llm.model, "gpt-3.5-turbo");
    assert_eq!(config.local.model_name, "facebook/nllb-200-distilled-600M");
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a JSON file
#[test]
fn test_fromFile_withPartialJson_shouldFillDefaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "engine": "llm",
            "llm": {{ "api_key": "test-key", "model": "gpt-4o-mini" }},
            "api": {{ "max_batch_size": 10 }}
        }}"#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.engine, "llm");
    assert_eq!(config.llm.api_key, "test-key");
    assert_eq!(config.llm.model, "gpt-4o-mini");
    assert_eq!(config.api.max_batch_size, 10);
    // Untouched sections keep their defaults
    assert_eq!(config.api.max_text_length, 5000);
    assert_eq!(config.remote.endpoint, "http://localhost:5000");
}

#[test]
fn test_fromFile_withUnknownEngine_shouldFailValidation() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "engine": "google" }}"#).unwrap();

    let result = Config::from_file(file.path());
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("google"));
}

#[test]
fn test_fromFile_withMissingFile_shouldFail() {
    assert!(Config::from_file("/nonexistent/lingoswitch.conf.json").is_err());
}

/// Test engine name parsing
#[test]
fn test_engineFromStr_shouldMatchCaseInsensitively() {
    assert_eq!("remote".parse::<Engine>().unwrap(), Engine::Remote);
    assert_eq!("LLM".parse::<Engine>().unwrap(), Engine::Llm);
    assert_eq!(" Local ".parse::<Engine>().unwrap(), Engine::Local);
    assert!("deepl".parse::<Engine>().is_err());
}

#[test]
fn test_engineDisplay_shouldRoundTripThroughFromStr() {
    for engine in Engine::all() {
        assert_eq!(engine.to_string().parse::<Engine>().unwrap(), engine);
    }
}

#[test]
fn test_logLevel_shouldMapToLevelFilter() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
    assert_eq!(LogLevel::default().to_level_filter(), log::LevelFilter::Info);
}
