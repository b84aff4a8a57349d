use bite_config::BiteConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &BiteConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &BiteConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.discord.is_configured() && has_single_underscore_key(&env_keys, "BITEBOT_DISCORD") {
        warnings.push(
            "Discord config appears default while BITEBOT_DISCORD_* env vars exist. Use double underscores (example: BITEBOT_DISCORD__TOKEN)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "BITEBOT_DATABASE") {
        warnings.push(
            "BITEBOT_DATABASE_* env vars are ignored. Use double underscores (example: BITEBOT_DATABASE__PATH)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "BITEBOT_OLLAMA") {
        warnings.push(
            "BITEBOT_OLLAMA_* env vars are ignored. Use double underscores (example: BITEBOT_OLLAMA__MODEL)."
                .to_string(),
        );
    }

    warnings
}

/// `PREFIX_X` exists but no `PREFIX__X` does.
fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    let single = format!("{prefix}_");
    let double = format!("{prefix}__");
    keys.iter()
        .any(|k| k.starts_with(&single) && !k.starts_with(&double))
}
