//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use dukembb::{
    cli::{Commands, DukeMbb, GetCmd},
    commands::{
        league_data::{handle_leagues, handle_teams},
        player_data::{handle_player_data, PlayerDataParams},
    },
    logging::setup_logging,
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = DukeMbb::parse();

    // Keep the guard alive so the log file is flushed on exit
    let (_log_path, _guard) = setup_logging(app.log_dir.as_deref(), app.verbose)?;

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Players {
                team,
                season,
                json,
                share,
                radar,
            } => {
                handle_player_data(PlayerDataParams {
                    team,
                    season,
                    as_json: json,
                    share,
                    radar,
                })
                .await?
            }

            GetCmd::Leagues { json } => handle_leagues(json).await?,

            GetCmd::Teams {
                league,
                season,
                search,
                json,
            } => handle_teams(league, season, search, json).await?,
        },
    }

    Ok(())
}
