use serde::Serialize;

use bite_core::entities::{AuditEntry, Restaurant};
use bite_db::UpsertOutcome;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AddArgs;
use crate::commands::shared::{Rejection, input};
use crate::context::AppContext;
use crate::output::views::restaurant_block;
use crate::output::{Reply, output};

#[derive(Debug, Serialize)]
pub struct Saved {
    pub created: bool,
    pub restaurant: Restaurant,
    pub audit: Option<AuditEntry>,
}

impl Reply for Saved {
    fn text(&self) -> String {
        format!(
            "Restaurant saved successfully!\n\n{}",
            restaurant_block(&self.restaurant)
        )
    }
}

pub async fn execute(args: &AddArgs, ctx: &AppContext) -> Result<Saved, Rejection> {
    let name = input::name(&args.name)?;
    let city = input::city(&args.city)?;
    let url = input::optional_url(args.url.as_deref())?;

    let outcome = ctx
        .catalog
        .upsert(&name, city, url.as_deref(), &ctx.actor)
        .await
        .map_err(|e| Rejection::from_db(e, "saving the restaurant", &name))?;

    let saved = match outcome {
        UpsertOutcome::Created { restaurant, audit } => Saved {
            created: true,
            restaurant,
            audit: Some(audit),
        },
        UpsertOutcome::Updated { restaurant, audit } => Saved {
            created: false,
            restaurant,
            audit,
        },
    };
    tracing::info!(restaurant_id = %saved.restaurant.id, created = saved.created, actor = %ctx.actor.name, "restaurant upserted");
    Ok(saved)
}

/// Handle `bitebot upsert`.
pub async fn handle(args: &AddArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let reply = execute(args, ctx).await?;
    output(&reply, flags.format)
}
