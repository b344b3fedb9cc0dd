//! BallKeeper - reservation assistant command line
//!
//! ```bash
//! ballkeeper items
//! ballkeeper calendar 7 2024-06-20 week
//! ballkeeper chat 3 "Is the tennis court free tomorrow?"
//! ballkeeper listen 3
//! ```

use std::process::ExitCode;

use anyhow::{Context, Result};
use ballkeeper_domain::{Granularity, ItemId, UserId, UserIdentity};
use ballkeeper_lib::utils::logging::init_tracing;
use ballkeeper_lib::{commands, AppContext};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "ballkeeper")]
#[command(about = "Browse item availability, chat with the assistant, and follow notifications")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List reservable items
    Items,

    /// Print the availability calendar of one item
    Calendar {
        item_id: ItemId,

        /// Anchor date (defaults to today)
        date: Option<NaiveDate>,

        /// day, week, month or agenda
        granularity: Option<Granularity>,
    },

    /// Send one message to the assistant
    Chat {
        user_id: UserId,

        text: String,

        /// Display name used in the greeting
        #[arg(long, default_value = "guest")]
        name: String,
    },

    /// Print notifications for a user until interrupted
    Listen {
        user_id: UserId,

        #[arg(long, default_value = "guest")]
        name: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %format!("{err:#}"), "ballkeeper failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = ballkeeper_infra::config::load().context("loading configuration")?;
    init_tracing(&config.logging);

    // Only `listen` needs the push channel.
    if !matches!(cli.command, Commands::Listen { .. }) {
        config.notifications.enabled = false;
    }

    let ctx = AppContext::from_config(config).context("initialising application")?;
    let result = dispatch(&ctx, cli.command).await;
    ctx.shutdown().await;
    result
}

async fn dispatch(ctx: &AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::Items => {
            let items = commands::list_items(ctx).await?;
            print_json(&items)
        }
        Commands::Calendar { item_id, date, granularity } => {
            let target = commands::resolve_item(ctx, item_id).await?;
            ctx.calendar.activate();
            if date.is_some() || granularity.is_some() {
                let navigation = ctx.calendar.navigation();
                commands::navigate_calendar(
                    ctx,
                    date.unwrap_or(navigation.anchor_date),
                    granularity.unwrap_or(navigation.granularity),
                )
                .await?;
            }
            let snapshot = commands::load_calendar(ctx, target).await?;
            print_json(&snapshot)
        }
        Commands::Chat { user_id, text, name } => {
            commands::sign_in(ctx, UserIdentity { id: user_id, name, is_admin: false }).await?;
            let reply = commands::send_chat_message(ctx, &text).await?;
            println!("{}", reply.text);
            Ok(())
        }
        Commands::Listen { user_id, name } => {
            commands::sign_in(ctx, UserIdentity { id: user_id, name, is_admin: false }).await?;
            info!(user_id, "Listening for notifications; press Ctrl-C to stop");
            tokio::signal::ctrl_c().await.context("waiting for Ctrl-C")?;
            commands::sign_out(ctx).await?;
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
