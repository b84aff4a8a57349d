use serde::Serialize;

use bite_core::entities::Restaurant;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RestaurantRef;
use crate::commands::shared::{Rejection, input};
use crate::context::AppContext;
use crate::output::{Reply, output};

#[derive(Debug, Serialize)]
pub struct Deleted {
    pub restaurant: Restaurant,
}

impl Reply for Deleted {
    fn text(&self) -> String {
        format!(
            "Successfully deleted {} from {}.",
            self.restaurant.name, self.restaurant.city
        )
    }
}

pub async fn execute(args: &RestaurantRef, ctx: &AppContext) -> Result<Deleted, Rejection> {
    let id = input::restaurant_id(&args.id)?;
    let restaurant = ctx
        .catalog
        .delete(id, &ctx.actor)
        .await
        .map_err(|e| Rejection::from_db(e, "deleting the restaurant", ""))?;
    tracing::info!(restaurant_id = %id, name = %restaurant.name, actor = %ctx.actor.name, "restaurant deleted");
    Ok(Deleted { restaurant })
}

/// Handle `bitebot delete`.
pub async fn handle(
    args: &RestaurantRef,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let reply = execute(args, ctx).await?;
    output(&reply, flags.format)
}
