//! Integration tests for layered configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use std::path::Path;

use figment::Jail;
use pretty_assertions::assert_eq;
use safe_config::{ConfigError, SafeConfig};

#[test]
fn loads_project_toml_from_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "iamsafe.toml",
            r#"
[server]
bind = "127.0.0.1"
port = 9000
request_timeout_secs = 3

[database]
path = "/var/lib/iamsafe/board.db"

[board]
page_size = 50
default_lang = "en"
event = "Typhoon Signal No. 10"
utc_offset_minutes = 480
"#,
        )?;

        let config = SafeConfig::load_from(None).expect("config loads");
        assert_eq!(config.server.address(), "127.0.0.1:9000");
        assert_eq!(config.server.request_timeout_secs, 3);
        assert_eq!(config.database.path, "/var/lib/iamsafe/board.db");
        assert_eq!(config.board.page_size, 50);
        assert_eq!(config.board.default_lang, "en");
        assert_eq!(config.board.event, "Typhoon Signal No. 10");
        assert_eq!(config.board.utc_offset_minutes, 480);
        Ok(())
    });
}

#[test]
fn explicit_file_replaces_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file("iamsafe.toml", "[server]\nport = 1111\n")?;
        jail.create_file("other.toml", "[server]\nport = 2222\n")?;

        let config = SafeConfig::load_from(Some(Path::new("other.toml"))).expect("config loads");
        assert_eq!(config.server.port, 2222);
        Ok(())
    });
}

#[test]
fn missing_explicit_file_is_an_error() {
    Jail::expect_with(|_jail| {
        let result = SafeConfig::load_from(Some(Path::new("nope.toml")));
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("iamsafe.toml", "[board]\npage_size = 5\n")?;

        let config = SafeConfig::load_from(None).expect("config loads");
        assert_eq!(config.board.page_size, 5);
        assert_eq!(config.board.default_lang, "cht");
        assert_eq!(config.server.port, 8787);
        Ok(())
    });
}

#[test]
fn invalid_values_fail_validation() {
    Jail::expect_with(|jail| {
        jail.create_file("iamsafe.toml", "[board]\ndefault_lang = \"fr\"\n")?;

        let result = SafeConfig::load_from(None);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}
