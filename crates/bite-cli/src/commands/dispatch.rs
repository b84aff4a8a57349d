use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Add(args) => commands::add::handle(&args, ctx, flags).await,
        Commands::Update(args) => commands::update::handle(&args, ctx, flags).await,
        Commands::Delete(args) => commands::delete::handle(&args, ctx, flags).await,
        Commands::Suggest(args) => commands::suggest::handle(&args, ctx, flags).await,
        Commands::Order(args) => commands::order::handle(&args, ctx, flags).await,
        Commands::Upsert(args) => commands::upsert::handle(&args, ctx, flags).await,
        Commands::Search(args) => commands::search::handle(&args, ctx, flags).await,
        Commands::List(args) => commands::list::handle(&args, ctx, flags).await,
        Commands::Autocomplete(args) => commands::autocomplete::handle(&args, ctx, flags).await,
        Commands::History(args) => commands::history::handle(&args, ctx, flags).await,
        Commands::Logs(args) => commands::logs::handle(&args, ctx, flags).await,
        Commands::Ask(_) => unreachable!("ask is pre-dispatched in main"),
    }
}
