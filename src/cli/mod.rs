//! CLI module - command-line interface for hondana
//!
//! This module provides a structured CLI using clap for argument parsing.

pub mod commands;

use clap::{Args, Parser, Subcommand};

/// hondana - Personal Anime/Manga Tracker
/// Track what you watch and read, straight from the terminal
#[derive(Parser)]
#[command(name = "hondana")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a title to your collection
    #[command(alias = "a")]
    Add(AddArgs),

    /// List your collection
    #[command(alias = "ls", alias = "l")]
    List(ListArgs),

    /// Update fields of an existing entry
    #[command(alias = "u")]
    Update(UpdateArgs),

    /// Remove an entry from your collection
    #[command(alias = "rm", alias = "r")]
    Remove {
        /// Entry id to remove
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Search the external catalog and optionally add a result
    #[command(alias = "s")]
    Search(SearchArgs),

    /// Show collection stats and the top-rated spotlight
    Home,

    /// Show the detailed collection breakdown
    Stats,

    /// Fill missing fields across the collection from the catalog
    Enrich,

    /// Populate the collection with sample titles
    Seed {
        /// Replace an existing collection
        #[arg(long)]
        force: bool,
    },

    /// Delete every stored record
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Create a default config file
    Init,
}

#[derive(Args)]
pub struct AddArgs {
    /// Title to add
    #[arg(required = true)]
    pub title: Vec<String>,

    /// Media kind ("TV", "Movie", "Manga", ...)
    #[arg(short, long, default_value = "TV")]
    pub kind: String,

    /// Watch status
    #[arg(short, long, default_value = "Plan to Watch")]
    pub status: String,

    /// Episode count
    #[arg(long)]
    pub episodes: Option<u32>,

    /// Chapter count
    #[arg(long)]
    pub chapters: Option<u32>,

    /// Your score, 0-10
    #[arg(long)]
    pub score: Option<f32>,

    #[arg(long)]
    pub synopsis: Option<String>,

    #[arg(long)]
    pub image_url: Option<String>,

    /// Studio (anime) or author (manga)
    #[arg(long)]
    pub studio: Option<String>,

    /// Fill missing fields from the catalog before saving
    #[arg(long)]
    pub lookup: bool,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only show entries with this watch status
    #[arg(short, long)]
    pub status: Option<String>,

    /// Only show entries with this media kind
    #[arg(short, long)]
    pub kind: Option<String>,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Entry id to update
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(short, long)]
    pub kind: Option<String>,

    #[arg(short, long)]
    pub status: Option<String>,

    #[arg(long)]
    pub episodes: Option<u32>,

    #[arg(long)]
    pub chapters: Option<u32>,

    /// Your score, 0-10
    #[arg(long)]
    pub score: Option<f32>,

    #[arg(long)]
    pub synopsis: Option<String>,

    #[arg(long)]
    pub image_url: Option<String>,

    /// Studio (anime) or author (manga)
    #[arg(long)]
    pub studio: Option<String>,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Search query
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Search the manga catalog instead of anime
    #[arg(short, long)]
    pub manga: bool,

    /// Result limit (defaults to the configured search limit)
    #[arg(short, long)]
    pub limit: Option<u32>,
}
