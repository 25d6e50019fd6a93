use serial_test::serial;
use std::env;
use std::fs;
use support_chat::config::AppConfig;

// Clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("SUPPORT_CHAT_SERVER__PORT");
        env::remove_var("SUPPORT_CHAT_WIDGET__TITLE");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
    }
}

fn load() -> AppConfig {
    // Explicit args so the test harness's own flags are not parsed.
    AppConfig::load_from_args(["support-chat"]).expect("Failed to load config")
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = load();
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.widget.title, "E-Commerce Customer Support");
    assert_eq!(config.widget.subtitle, "Your AI-powered shopping assistant");
    assert_eq!(config.sessions.timeout_secs, 1800);
    assert!(config.resilience.rate_limit_enabled);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("SUPPORT_CHAT_SERVER__PORT", "9090");
        env::set_var("SUPPORT_CHAT_WIDGET__TITLE", "Acme Help Desk");
    }

    let config = load();
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.widget.title, "Acme Help Desk");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = dir.path().join("support.yaml");
    fs::write(
        &file_path,
        r#"
server:
  port: 7070
widget:
  subtitle: "Ask us anything"
sessions:
  history_limit: 25
"#,
    )
    .expect("Failed to write temp config");

    // Point at the file via the env var clap reads for --config
    unsafe {
        env::set_var("CONFIG_FILE", &file_path);
    }

    let config = load();
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.widget.subtitle, "Ask us anything");
    assert_eq!(config.sessions.history_limit, 25);
    // Untouched keys keep their defaults
    assert_eq!(config.widget.title, "E-Commerce Customer Support");

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_port_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("SUPPORT_CHAT_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args(["support-chat", "--port", "5050"])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 5050);

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_config_file_is_an_error() {
    clear_env_vars();
    unsafe {
        env::set_var("CONFIG_FILE", "/definitely/not/here.yaml");
    }

    assert!(AppConfig::load_from_args(["support-chat"]).is_err());

    clear_env_vars();
}
