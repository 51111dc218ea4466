//! Tests for loading `wopr.toml`.

use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;
use wopr::{LlmProvider, WoprConfig};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = WoprConfig::default();
    assert_eq!(*config.llm_provider(), LlmProvider::OpenAI);
    assert_eq!(config.llm_model(), "gpt-4o-mini");
    assert_eq!(*config.llm_max_tokens(), 80);
    assert_eq!(config.commentary_timeout(), Duration::from_secs(8));
    assert_eq!(config.opponent_delay(), Duration::from_millis(600));
}

#[test]
fn test_full_file() {
    let file = write_config(
        r#"
llm_provider = "anthropic"
llm_model = "claude-3-5-haiku-latest"
llm_max_tokens = 60
commentary_timeout_ms = 3000
opponent_delay_ms = 0
"#,
    );
    let config = WoprConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.llm_provider(), LlmProvider::Anthropic);
    assert_eq!(config.llm_model(), "claude-3-5-haiku-latest");
    assert_eq!(*config.llm_max_tokens(), 60);
    assert_eq!(config.commentary_timeout(), Duration::from_secs(3));
    assert_eq!(config.opponent_delay(), Duration::ZERO);
}

#[test]
fn test_partial_file_uses_defaults() {
    let file = write_config("opponent_delay_ms = 1500\n");
    let config = WoprConfig::from_file(file.path()).unwrap();
    assert_eq!(config.opponent_delay(), Duration::from_millis(1500));
    assert_eq!(config.llm_model(), "gpt-4o-mini");
    assert_eq!(config.commentary_timeout(), Duration::from_secs(8));
}

#[test]
fn test_malformed_file_is_error() {
    let file = write_config("llm_provider = \"skynet\"\n");
    let err = WoprConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = WoprConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.llm_model(), "gpt-4o-mini");
    assert!(WoprConfig::from_file(dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_api_key_required() {
    let config = WoprConfig::default();
    let err = config.llm_config_with_key(None).unwrap_err();
    assert!(err.message.contains("OPENAI_API_KEY"));
    assert!(config.llm_config_with_key(Some("  ".to_string())).is_err());

    let llm = config.llm_config_with_key(Some("sk-test".to_string())).unwrap();
    assert_eq!(*llm.provider(), LlmProvider::OpenAI);
    assert_eq!(llm.model(), "gpt-4o-mini");
    assert_eq!(*llm.max_tokens(), 80);
}

#[test]
fn test_anthropic_key_variable() {
    let file = write_config("llm_provider = \"anthropic\"\n");
    let config = WoprConfig::from_file(file.path()).unwrap();
    let err = config.llm_config_with_key(None).unwrap_err();
    assert!(err.message.contains("ANTHROPIC_API_KEY"));
}
