//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use bite_config::{BiteConfig, ConfigError};

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/var/lib/bitebot/catalog.db"
busy_timeout_ms = 750

[discord]
token = "bot-token"
guild_id = 123456789012345678

[ollama]
url = "http://gpu-box:11434"
model = "mistral"
timeout_secs = 30

[general]
default_page_size = 5
autocomplete_limit = 10
"#,
        )?;

        let config: BiteConfig = Figment::from(Serialized::defaults(BiteConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "/var/lib/bitebot/catalog.db");
        assert_eq!(config.database.busy_timeout_ms, 750);
        assert_eq!(config.discord.token, "bot-token");
        assert_eq!(config.discord.guild_id, Some(123_456_789_012_345_678));
        assert_eq!(config.ollama.url, "http://gpu-box:11434");
        assert_eq!(config.ollama.model, "mistral");
        assert_eq!(config.ollama.timeout_secs, 30);
        assert_eq!(config.general.default_page_size, 5);
        assert_eq!(config.general.autocomplete_limit, 10);
        // Untouched fields keep their defaults.
        assert_eq!(config.general.autocomplete_min_chars, 2);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[ollama]
model = "phi3"
"#,
        )?;

        let config: BiteConfig = Figment::from(Serialized::defaults(BiteConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.ollama.model, "phi3");
        assert_eq!(config.ollama.url, "http://localhost:11434");
        assert_eq!(config.database.path, "bitebot.db");
        assert!(!config.discord.is_configured());
        Ok(())
    });
}

#[test]
fn local_bitebot_toml_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "bitebot.toml",
            r#"
[database]
path = "local.db"
"#,
        )?;

        let config = BiteConfig::load().expect("config loads");
        assert_eq!(config.database.path, "local.db");
        Ok(())
    });
}

#[test]
fn invalid_toml_value_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "bitebot.toml",
            r#"
[general]
default_page_size = 0
"#,
        )?;

        let err = BiteConfig::load().unwrap_err();
        assert!(err.to_string().contains("default_page_size"));
        Ok(())
    });
}

#[test]
fn mistyped_value_is_a_load_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "bitebot.toml",
            r#"
[general]
default_page_size = "ten"
"#,
        )?;

        let err = BiteConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)), "{err}");
        Ok(())
    });
}
