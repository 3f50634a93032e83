use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Check => commands::check::handle(ctx, flags).await,
        Commands::Grade(args) => commands::grade::handle(&args, ctx, flags).await,
        Commands::Fragment(args) => commands::fragment::handle(&args, ctx, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
