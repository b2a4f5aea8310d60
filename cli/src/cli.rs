// SPDX-FileCopyrightText: 2026 Schedview Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line interface.
#[derive(Debug, Parser)]
#[command(name = "schedview", version, about = "Browse possible course schedules")]
pub struct Cli {
    /// Path to the configuration file.
    ///
    /// Defaults to $XDG_CONFIG_HOME/schedview/config.toml; may also be set
    /// via the SCHEDVIEW_CONFIG environment variable.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Browse schedules interactively (empty line loads more)
    Browse {
        /// Restore filters from a previously shared query string
        #[arg(long, value_name = "QUERY")]
        query: Option<String>,
    },

    /// Print one page of schedules
    Schedules {
        /// Only show favorited schedules
        #[arg(long)]
        favorites_only: bool,

        /// Campus to include (repeatable; default: all campuses)
        #[arg(long = "campus", value_name = "CAMPUS")]
        campuses: Vec<String>,

        /// Time of day to include (repeatable; default: all times)
        #[arg(long = "time", value_name = "TIME")]
        times: Vec<String>,
    },

    /// List favorited schedule ids
    Favorites,

    /// Check backend liveness
    Health,
}
