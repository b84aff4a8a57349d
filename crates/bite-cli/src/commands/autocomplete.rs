use serde::Serialize;

use bite_core::entities::Restaurant;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AutocompleteArgs;
use crate::context::AppContext;
use crate::output::{Reply, output};

/// One autocomplete choice: label shown to the user, id sent back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub name: String,
    pub value: String,
}

impl From<&Restaurant> for Choice {
    fn from(r: &Restaurant) -> Self {
        Self {
            name: format!("{} — {}", r.name, r.city),
            value: r.id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Choices {
    pub choices: Vec<Choice>,
}

impl Reply for Choices {
    fn text(&self) -> String {
        self.choices
            .iter()
            .map(|c| format!("{}\t{}", c.value, c.name))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Never fails: short input and store errors both yield no choices.
pub async fn execute(args: &AutocompleteArgs, ctx: &AppContext) -> Choices {
    let partial = args.partial.trim();
    let general = &ctx.config.general;
    if partial.chars().count() < general.autocomplete_min_chars {
        return Choices {
            choices: Vec::new(),
        };
    }

    let choices = match ctx
        .catalog
        .restaurants()
        .search_by_name(partial, general.autocomplete_limit, 1)
        .await
    {
        Ok(found) => found.iter().map(Choice::from).collect(),
        Err(e) => {
            tracing::warn!(partial, error = %e, "autocomplete lookup failed");
            Vec::new()
        }
    };
    Choices { choices }
}

/// Handle `bitebot autocomplete`.
pub async fn handle(
    args: &AutocompleteArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let reply = execute(args, ctx).await;
    output(&reply, flags.format)
}
