use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::commands::shared::{Rejection, input};
use crate::context::AppContext;
use crate::output::output;
use crate::output::views::RestaurantPage;

/// City-scoped search requires a pattern; the global one treats a blank
/// pattern as "everything".
pub async fn execute(args: &SearchArgs, ctx: &AppContext) -> Result<RestaurantPage, Rejection> {
    let size = ctx.page_size(args.page.size);
    let number = args.page.page;
    let restaurants = ctx.catalog.restaurants();

    let found = match args.city.as_deref() {
        Some(code) => {
            let city = input::city(code)?;
            restaurants
                .search_by_name_in_city(&args.pattern, city, size, number)
                .await
        }
        None => restaurants.search_by_name(&args.pattern, size, number).await,
    }
    .map_err(|e| Rejection::from_db(e, "searching restaurants", ""))?;

    Ok(RestaurantPage {
        page: number,
        size,
        restaurants: found,
    })
}

/// Handle `bitebot search`.
pub async fn handle(
    args: &SearchArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let reply = execute(args, ctx).await?;
    output(&reply, flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::root_commands::PageArgs;
    use crate::context::test_context;
    use bite_core::entities::Restaurant;
    use bite_core::enums::City;
    use pretty_assertions::assert_eq;

    fn search(pattern: &str, city: Option<&str>) -> SearchArgs {
        SearchArgs {
            pattern: pattern.into(),
            city: city.map(String::from),
            page: PageArgs { page: 1, size: None },
        }
    }

    async fn seed(ctx: &AppContext) {
        for (name, city) in [
            ("Falafel Abu Ali", City::Ramallah),
            ("Falafel Corner", City::Nablus),
            ("Zeit ou Zaatar", City::Ramallah),
        ] {
            ctx.catalog
                .add(&Restaurant::new(name, city, None), &ctx.actor)
                .await
                .unwrap();
        }
    }

    fn names(page: &RestaurantPage) -> Vec<&str> {
        page.restaurants.iter().map(|r| r.name.as_str()).collect()
    }

    #[tokio::test]
    async fn global_search_spans_cities() {
        let (_dir, ctx) = test_context().await;
        seed(&ctx).await;
        let page = execute(&search("falafel", None), &ctx).await.unwrap();
        assert_eq!(names(&page), vec!["Falafel Abu Ali", "Falafel Corner"]);
        assert_eq!(page.size, 10);
    }

    #[tokio::test]
    async fn blank_global_search_browses_all() {
        let (_dir, ctx) = test_context().await;
        seed(&ctx).await;
        let page = execute(&search("", None), &ctx).await.unwrap();
        assert_eq!(page.restaurants.len(), 3);
    }

    #[tokio::test]
    async fn city_search_filters_and_requires_pattern() {
        let (_dir, ctx) = test_context().await;
        seed(&ctx).await;

        let page = execute(&search("Falafel", Some("-n")), &ctx).await.unwrap();
        assert_eq!(names(&page), vec!["Falafel Corner"]);

        let err = execute(&search("  ", Some("-n")), &ctx).await.unwrap_err();
        assert!(matches!(err, Rejection::InvalidInput(_)));
    }

    #[tokio::test]
    async fn page_zero_is_rejected() {
        let (_dir, ctx) = test_context().await;
        let mut args = search("x", None);
        args.page.page = 0;
        assert!(matches!(
            execute(&args, &ctx).await.unwrap_err(),
            Rejection::InvalidInput(_)
        ));
    }
}
