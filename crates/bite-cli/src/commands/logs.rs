use crate::cli::GlobalFlags;
use crate::cli::root_commands::PageArgs;
use crate::commands::shared::Rejection;
use crate::context::AppContext;
use crate::output::output;
use crate::output::views::AuditList;

pub async fn execute(args: &PageArgs, ctx: &AppContext) -> Result<AuditList, Rejection> {
    let entries = ctx
        .catalog
        .audit()
        .all_logs(ctx.page_size(args.size), args.page)
        .await
        .map_err(|e| Rejection::from_db(e, "reading the audit log", ""))?;
    Ok(AuditList { entries })
}

/// Handle `bitebot logs`.
pub async fn handle(args: &PageArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let reply = execute(args, ctx).await?;
    output(&reply, flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_context;
    use bite_core::entities::Restaurant;
    use bite_core::enums::City;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn newest_entries_first() {
        let (_dir, ctx) = test_context().await;
        for name in ["First", "Second", "Third"] {
            ctx.catalog
                .add(&Restaurant::new(name, City::Nablus, None), &ctx.actor)
                .await
                .unwrap();
        }

        let first = execute(&PageArgs { page: 1, size: Some(2) }, &ctx)
            .await
            .unwrap();
        let second = execute(&PageArgs { page: 2, size: Some(2) }, &ctx)
            .await
            .unwrap();

        let descriptions: Vec<_> = first
            .entries
            .iter()
            .chain(&second.entries)
            .filter_map(|e| e.change_description.as_deref())
            .collect();
        assert_eq!(
            descriptions,
            vec![
                "Created restaurant 'Third' in Nablus",
                "Created restaurant 'Second' in Nablus",
                "Created restaurant 'First' in Nablus",
            ]
        );
    }

    #[tokio::test]
    async fn zero_page_is_rejected() {
        let (_dir, ctx) = test_context().await;
        let err = execute(&PageArgs { page: 0, size: None }, &ctx)
            .await
            .unwrap_err();
        assert!(matches!(err, Rejection::InvalidInput(_)));
    }
}
