//! Command-line interface of the `subway` binary
//!
//! The binary builds a store, imports the seed network and answers one query,
//! printing the response as JSON.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::error::AppResult;
use crate::features::lines::{GetLineByNameQuery, ListLinesQuery};
use crate::features::sections::ListSectionsQuery;
use crate::features::stations::ListStationsQuery;
use crate::features::{lines, sections, stations};
use crate::store::Store;

/// Subway network browser
#[derive(Parser, Debug)]
#[command(name = "subway")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Network seed file (JSON)
    #[arg(long, env = "SUBWAY_SEED_FILE", global = true)]
    pub seed: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List stations by name
    Stations {
        /// Only stations whose name contains this text (case-insensitive)
        #[arg(long)]
        name_contains: Option<String>,

        #[arg(long)]
        page: Option<usize>,

        #[arg(long)]
        per_page: Option<usize>,
    },

    /// List lines with their stations
    Lines {
        #[arg(long)]
        page: Option<usize>,

        #[arg(long)]
        per_page: Option<usize>,
    },

    /// Show one line by name
    Line {
        /// Line name
        name: String,
    },

    /// Show the sections of a line in path order
    Sections {
        /// Line name
        line: String,
    },
}

/// Run a command against the store and return its JSON response
pub async fn execute(command: &Commands, store: &Store) -> AppResult<serde_json::Value> {
    let value = match command {
        Commands::Stations {
            name_contains,
            page,
            per_page,
        } => {
            let query = ListStationsQuery {
                page: *page,
                per_page: *per_page,
                name_contains: name_contains.clone(),
            };
            to_json(&stations::queries::list::handle(store.clone(), query).await?)?
        },

        Commands::Lines { page, per_page } => {
            let query = ListLinesQuery {
                page: *page,
                per_page: *per_page,
            };
            to_json(&lines::queries::list::handle(store.clone(), query).await?)?
        },

        Commands::Line { name } => {
            let query = GetLineByNameQuery { name: name.clone() };
            to_json(&lines::queries::get_by_name::handle(store.clone(), query).await?)?
        },

        Commands::Sections { line } => {
            let query = GetLineByNameQuery { name: line.clone() };
            let found = lines::queries::get_by_name::handle(store.clone(), query).await?;
            let query = ListSectionsQuery { line_id: found.id };
            to_json(&sections::queries::list::handle(store.clone(), query).await?)?
        },
    };

    Ok(value)
}

fn to_json<T: serde::Serialize>(value: &T) -> AppResult<serde_json::Value> {
    Ok(serde_json::to_value(value).map_err(subway_common::SubwayError::from)?)
}
