use serde::Serialize;

use bite_core::entities::{AuditEntry, Restaurant};
use bite_db::updates::RestaurantUpdate;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::UpdateArgs;
use crate::commands::shared::{Rejection, input};
use crate::context::AppContext;
use crate::output::views::restaurant_block;
use crate::output::{Reply, output};

#[derive(Debug, Serialize)]
pub struct Updated {
    pub restaurant: Restaurant,
    /// `None` when the values given matched the current ones.
    pub audit: Option<AuditEntry>,
}

impl Reply for Updated {
    fn text(&self) -> String {
        format!(
            "Restaurant updated successfully!\n\n{}",
            restaurant_block(&self.restaurant)
        )
    }
}

/// Blank options mean "keep current", as in the chat command.
fn parse_changes(args: &UpdateArgs) -> Result<RestaurantUpdate, Rejection> {
    let name = args
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(String::from);
    let city = match args.city.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        Some(code) => Some(input::city(code)?),
        None => None,
    };
    let url = input::url_change(args.url.as_deref())?;

    let changes = RestaurantUpdate { name, city, url };
    if changes.is_empty() {
        return Err(Rejection::NoChanges);
    }
    Ok(changes)
}

pub async fn execute(args: &UpdateArgs, ctx: &AppContext) -> Result<Updated, Rejection> {
    let id = input::restaurant_id(&args.id)?;
    let changes = parse_changes(args)?;
    let outcome = match ctx.catalog.update(id, &changes, &ctx.actor).await {
        Ok(outcome) => outcome,
        Err(e) => {
            let name = match &changes.name {
                Some(name) => name.clone(),
                None => current_name(ctx, id).await,
            };
            return Err(Rejection::from_db(e, "updating the restaurant", &name));
        }
    };

    tracing::info!(restaurant_id = %id, changed = outcome.audit.is_some(), actor = %ctx.actor.name, "restaurant updated");
    Ok(Updated {
        restaurant: outcome.restaurant,
        audit: outcome.audit,
    })
}

/// Name shown in a duplicate message when only the city changed.
async fn current_name(ctx: &AppContext, id: uuid::Uuid) -> String {
    ctx.catalog
        .restaurants()
        .get_by_id(id)
        .await
        .map(|r| r.name)
        .unwrap_or_default()
}

/// Handle `bitebot update`.
pub async fn handle(
    args: &UpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let reply = execute(args, ctx).await?;
    output(&reply, flags.format)
}
