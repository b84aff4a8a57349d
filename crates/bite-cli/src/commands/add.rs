use serde::Serialize;

use bite_core::entities::{AuditEntry, Restaurant};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AddArgs;
use crate::commands::shared::{Rejection, input};
use crate::context::AppContext;
use crate::output::views::restaurant_block;
use crate::output::{Reply, output};

#[derive(Debug, Serialize)]
pub struct Added {
    pub restaurant: Restaurant,
    pub audit: AuditEntry,
}

impl Reply for Added {
    fn text(&self) -> String {
        format!(
            "Restaurant added successfully!\n\n{}",
            restaurant_block(&self.restaurant)
        )
    }
}

/// Validate then add. Nothing reaches the catalog on a validation miss.
pub async fn execute(args: &AddArgs, ctx: &AppContext) -> Result<Added, Rejection> {
    let name = input::name(&args.name)?;
    let city = input::city(&args.city)?;
    let url = input::optional_url(args.url.as_deref())?;

    let (restaurant, audit) = ctx
        .catalog
        .add(&Restaurant::new(name.as_str(), city, url), &ctx.actor)
        .await
        .map_err(|e| Rejection::from_db(e, "adding the restaurant", &name))?;

    tracing::info!(restaurant_id = %restaurant.id, name = %restaurant.name, %city, actor = %ctx.actor.name, "restaurant added");
    Ok(Added { restaurant, audit })
}

/// Handle `bitebot add`.
pub async fn handle(args: &AddArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let reply = execute(args, ctx).await?;
    output(&reply, flags.format)
}
