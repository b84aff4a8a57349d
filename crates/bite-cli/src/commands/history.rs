use crate::cli::GlobalFlags;
use crate::cli::root_commands::RestaurantRef;
use crate::commands::shared::{Rejection, input};
use crate::context::AppContext;
use crate::output::output;
use crate::output::views::AuditList;

pub async fn execute(args: &RestaurantRef, ctx: &AppContext) -> Result<AuditList, Rejection> {
    let id = input::restaurant_id(&args.id)?;
    let entries = ctx
        .catalog
        .audit()
        .history(id)
        .await
        .map_err(|e| Rejection::from_db(e, "reading the audit history", ""))?;
    Ok(AuditList { entries })
}

/// Handle `bitebot history`.
pub async fn handle(
    args: &RestaurantRef,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let reply = execute(args, ctx).await?;
    output(&reply, flags.format)
}
