use clap::{Args, Subcommand};

/// Top-level command tree. Each subcommand mirrors one chat command.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Add a new restaurant.
    Add(AddArgs),
    /// Update an existing restaurant.
    Update(UpdateArgs),
    /// Delete a restaurant.
    Delete(RestaurantRef),
    /// Get a random restaurant suggestion for a city.
    Suggest(CityArg),
    /// Render the order thread for a restaurant.
    Order(RestaurantRef),
    /// Create a restaurant, or update the URL of the one with the same name.
    Upsert(AddArgs),
    /// Search restaurants by name.
    Search(SearchArgs),
    /// List restaurants in a city.
    List(ListArgs),
    /// Name suggestions for a partially typed restaurant name.
    Autocomplete(AutocompleteArgs),
    /// Audit history of one restaurant.
    History(RestaurantRef),
    /// Audit log across all restaurants.
    Logs(PageArgs),
    /// Send a prompt to the text-generation service.
    Ask(AskArgs),
}

/// City code: `-r`/`r` for Ramallah, `-n`/`n` for Nablus (any case).
#[derive(Clone, Debug, Args)]
pub struct CityArg {
    #[arg(allow_hyphen_values = true)]
    pub city: String,
}

#[derive(Clone, Debug, Args)]
pub struct RestaurantRef {
    /// Restaurant id, as printed by `autocomplete`.
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    /// Restaurant name.
    pub name: String,
    /// City code: -r/R for Ramallah, -n/N for Nablus.
    #[arg(allow_hyphen_values = true)]
    pub city: String,
    /// Optional menu or website URL.
    #[arg(long)]
    pub url: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct UpdateArgs {
    /// Restaurant id, as printed by `autocomplete`.
    pub id: String,
    /// New name (omit to keep current).
    #[arg(long)]
    pub name: Option<String>,
    /// New city code (omit to keep current).
    #[arg(long, allow_hyphen_values = true)]
    pub city: Option<String>,
    /// New URL, or `remove` to clear it (omit to keep current).
    #[arg(long)]
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, Args)]
pub struct PageArgs {
    /// 1-based page number.
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// Page size (defaults to `general.default_page_size`).
    #[arg(long)]
    pub size: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Name substring; empty matches everything when no city is given.
    #[arg(default_value = "")]
    pub pattern: String,
    /// Restrict to one city.
    #[arg(long, allow_hyphen_values = true)]
    pub city: Option<String>,
    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    #[arg(allow_hyphen_values = true)]
    pub city: String,
    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Clone, Debug, Args)]
pub struct AutocompleteArgs {
    /// What the user has typed so far.
    #[arg(default_value = "")]
    pub partial: String,
}

#[derive(Clone, Debug, Args)]
pub struct AskArgs {
    /// Prompt text; multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub prompt: Vec<String>,
}
