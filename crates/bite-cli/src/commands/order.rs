use serde::Serialize;

use bite_core::entities::Restaurant;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RestaurantRef;
use crate::commands::shared::{Rejection, input};
use crate::context::AppContext;
use crate::output::{Reply, output};

/// Title and opening message of an order thread. Creating the thread is
/// up to the chat platform.
#[derive(Debug, Serialize)]
pub struct OrderThread {
    pub title: String,
    pub message: String,
    pub restaurant: Restaurant,
}

impl OrderThread {
    fn for_restaurant(restaurant: Restaurant) -> Self {
        let menu = restaurant
            .url
            .as_ref()
            .map(|url| format!("Menu/Website: {url}\n\n"))
            .unwrap_or_default();
        let message = format!(
            "We would like to order from {}. Please put your order below!\n\n\
             {menu}Location: {}\n\nPost your orders as replies to this thread!",
            restaurant.name, restaurant.city
        );
        Self {
            title: restaurant.name.clone(),
            message,
            restaurant,
        }
    }
}

impl Reply for OrderThread {
    fn text(&self) -> String {
        format!("{}\n\n{}", self.title, self.message)
    }
}

pub async fn execute(args: &RestaurantRef, ctx: &AppContext) -> Result<OrderThread, Rejection> {
    let id = input::restaurant_id(&args.id)?;
    let restaurant = ctx
        .catalog
        .restaurants()
        .get_by_id(id)
        .await
        .map_err(|e| Rejection::from_db(e, "creating the order thread", ""))?;
    Ok(OrderThread::for_restaurant(restaurant))
}

/// Handle `bitebot order`.
pub async fn handle(
    args: &RestaurantRef,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let reply = execute(args, ctx).await?;
    output(&reply, flags.format)
}
