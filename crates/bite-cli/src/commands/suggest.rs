use serde::Serialize;

use bite_core::entities::Restaurant;
use bite_core::enums::City;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CityArg;
use crate::commands::shared::{Rejection, input};
use crate::context::AppContext;
use crate::output::{Reply, output};

#[derive(Debug, Serialize)]
pub struct Suggestion {
    pub city: City,
    /// `None` when the city has no restaurants yet.
    pub restaurant: Option<Restaurant>,
}

impl Reply for Suggestion {
    fn text(&self) -> String {
        match &self.restaurant {
            Some(r) => {
                let mut text = format!("Restaurant Suggestion for {}\n\n{}", self.city, r.name);
                if let Some(url) = &r.url {
                    text.push('\n');
                    text.push_str(url);
                }
                text
            }
            None => format!(
                "No restaurants found in {}. Please add some restaurants first!",
                self.city
            ),
        }
    }
}

pub async fn execute(args: &CityArg, ctx: &AppContext) -> Result<Suggestion, Rejection> {
    let city = input::city(&args.city)?;
    let restaurant = ctx
        .catalog
        .restaurants()
        .get_random(city)
        .await
        .map_err(|e| Rejection::from_db(e, "fetching a restaurant suggestion", ""))?;
    Ok(Suggestion { city, restaurant })
}

/// Handle `bitebot suggest`.
pub async fn handle(args: &CityArg, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let reply = execute(args, ctx).await?;
    output(&reply, flags.format)
}
