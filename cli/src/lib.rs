// SPDX-FileCopyrightText: 2026 Schedview Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Terminal client for browsing generated course schedules.

mod browse;
mod cli;
mod config;
mod render;

use std::error::Error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use schedview_api::{ScheduleApi, ScheduleQuery};
use schedview_core::SyncEngine;

pub use crate::cli::{Cli, Commands};
pub use crate::config::Config;
use crate::browse::Browser;
use crate::config::parse_config;
use crate::render::ScheduleFormatter;

/// Run the schedview command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = dispatch(cli).await {
        println!("{} {}", "Error:".red(), e);
    }
    Ok(())
}

async fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    tracing::debug!("parsing configuration...");
    let config = parse_config(cli.config).await?;
    let api = ScheduleApi::new(config.api.clone())?;

    match cli.command {
        Commands::Browse { query } => {
            let engine = match query {
                Some(q) => SyncEngine::with_query(api, &q),
                None => SyncEngine::new(api),
            }
            .with_page_limit(config.page_limit);
            Browser::new(engine).run().await
        }
        Commands::Schedules {
            favorites_only,
            campuses,
            times,
        } => cmd_schedules(&api, &config, favorites_only, campuses, times).await,
        Commands::Favorites => cmd_favorites(&api).await,
        Commands::Health => cmd_health(&api).await,
    }
}

/// Print one page of schedules without entering the interactive loop.
async fn cmd_schedules(
    api: &ScheduleApi,
    config: &Config,
    favorites_only: bool,
    campuses: Vec<String>,
    times: Vec<String>,
) -> Result<(), Box<dyn Error>> {
    tracing::debug!("listing schedules...");

    #[allow(clippy::cast_possible_wrap)]
    let limit = config.page_limit as i64;
    let query = ScheduleQuery {
        favorites_only,
        campuses,
        times,
        pager: Some((limit, 0).into()),
    };

    let favorites = api.favorites().await?;
    let page = api.list_schedules(&query).await?;
    if page.is_empty() {
        println!("No schedules match the given filters.");
        return Ok(());
    }

    let formatter = ScheduleFormatter::new().with_details(true);
    for schedule in &page {
        let favorited = favorites.contains(&schedule.schedule_id);
        println!("{}", formatter.format(schedule, favorited));
    }
    println!("{} schedules", page.len());
    Ok(())
}

async fn cmd_favorites(api: &ScheduleApi) -> Result<(), Box<dyn Error>> {
    tracing::debug!("listing favorites...");

    let mut ids = api.favorites().await?;
    ids.sort_unstable();
    if ids.is_empty() {
        println!("No favorites yet.");
        return Ok(());
    }
    for id in ids {
        println!("#{id}");
    }
    Ok(())
}

async fn cmd_health(api: &ScheduleApi) -> Result<(), Box<dyn Error>> {
    let health = api.health().await?;
    println!("{}", health.status);
    Ok(())
}
