use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::commands::shared::{Rejection, input};
use crate::context::AppContext;
use crate::output::output;
use crate::output::views::RestaurantPage;

pub async fn execute(args: &ListArgs, ctx: &AppContext) -> Result<RestaurantPage, Rejection> {
    let city = input::city(&args.city)?;
    let size = ctx.page_size(args.page.size);
    let restaurants = ctx
        .catalog
        .restaurants()
        .list_by_city(city, size, args.page.page)
        .await
        .map_err(|e| Rejection::from_db(e, "listing restaurants", ""))?;
    Ok(RestaurantPage {
        page: args.page.page,
        size,
        restaurants,
    })
}

/// Handle `bitebot list`.
pub async fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let reply = execute(args, ctx).await?;
    output(&reply, flags.format)
}
