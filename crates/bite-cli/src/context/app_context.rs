use anyhow::Context;
use bite_config::BiteConfig;
use bite_core::identity::Actor;
use bite_db::Catalog;

use crate::cli::GlobalFlags;

/// Actor name used when neither a flag nor the config provides one.
const FALLBACK_ACTOR_NAME: &str = "bitebot-cli";

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: BiteConfig,
    pub catalog: Catalog,
    pub actor: Actor,
}

impl AppContext {
    /// Open the catalog described by `config.database`.
    pub async fn init(config: BiteConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let catalog = Catalog::open(&config.database)
            .await
            .with_context(|| format!("failed to open catalog at '{}'", config.database.path))?;
        let actor = resolve_actor(flags, &config);
        Ok(Self {
            config,
            catalog,
            actor,
        })
    }

    /// Page size from `--size`, falling back to the configured default.
    #[must_use]
    pub fn page_size(&self, requested: Option<u32>) -> u32 {
        requested.unwrap_or(self.config.general.default_page_size)
    }
}

/// Flags win over config; a blank name falls back to a fixed label.
#[must_use]
pub fn resolve_actor(flags: &GlobalFlags, config: &BiteConfig) -> Actor {
    let name = flags
        .actor_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .or_else(|| {
            let configured = config.general.actor_name.trim();
            (!configured.is_empty()).then_some(configured)
        })
        .unwrap_or(FALLBACK_ACTOR_NAME);
    let id = flags.actor_id.unwrap_or(config.general.actor_id);
    Actor::new(name, id)
}

/// An app context over a catalog in a temporary directory.
#[cfg(test)]
pub async fn test_context() -> (tempfile::TempDir, AppContext) {
    let dir = tempfile::TempDir::new().unwrap();
    let mut config = BiteConfig::default();
    config.database.path = dir.path().join("bitebot.db").to_string_lossy().into_owned();
    let catalog = Catalog::open(&config.database).await.unwrap();
    let ctx = AppContext {
        config,
        catalog,
        actor: Actor::new("tester", 1),
    };
    (dir, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use pretty_assertions::assert_eq;

    fn flags(name: Option<&str>, id: Option<u64>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Text,
            quiet: false,
            verbose: false,
            actor_name: name.map(String::from),
            actor_id: id,
        }
    }

    #[test]
    fn flags_override_config() {
        let mut config = BiteConfig::default();
        config.general.actor_name = "from-config".into();
        config.general.actor_id = 1;

        let actor = resolve_actor(&flags(Some("layla"), Some(99)), &config);
        assert_eq!(actor, Actor::new("layla", 99));
    }

    #[test]
    fn config_fills_missing_flags() {
        let mut config = BiteConfig::default();
        config.general.actor_name = "omar".into();
        config.general.actor_id = 7;

        let actor = resolve_actor(&flags(Some("   "), None), &config);
        assert_eq!(actor, Actor::new("omar", 7));
    }

    #[test]
    fn falls_back_to_fixed_name() {
        let actor = resolve_actor(&flags(None, None), &BiteConfig::default());
        assert_eq!(actor.name, FALLBACK_ACTOR_NAME);
        assert_eq!(actor.id, 0);
    }
}
