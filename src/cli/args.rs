//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all lingo
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `check`: Validate the translation tree (malformed documents, coverage)
//! - `resolve`: Resolve one translation the way a viewer would see it
//! - `export`: Export live item state as a new translation document
//! - `extract`: Copy bundled default documents into the live tree
//! - `init`: Initialize lingo configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::catalog::TranslationKind;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Resolve(cmd)) => cmd.common.verbose,
            Some(Command::Export(cmd)) => cmd.common.verbose,
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Translations root directory (overrides config file)
    #[arg(long)]
    pub translations_root: Option<PathBuf>,

    /// Default language (overrides config file)
    #[arg(long)]
    pub default_language: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Catalog partition to look in
    #[arg(value_enum)]
    pub kind: TranslationKind,

    /// Content id (item id, lore id, or message key)
    pub id: String,

    /// Viewer language (omit to resolve as an anonymous viewer)
    #[arg(long)]
    pub language: Option<String>,

    /// Positional message argument; repeat for {0}, {1}, ...
    #[arg(long = "arg")]
    pub args: Vec<String>,

    /// Item definition dump (JSON) used for programmed translations
    #[arg(long)]
    pub items: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Target language folder
    #[arg(long)]
    pub language: String,

    /// Addon label written into the document
    #[arg(long)]
    pub addon: String,

    /// Item ids to export (comma separated)
    #[arg(long, value_delimiter = ',', required = true)]
    pub ids: Vec<String>,

    /// Item definition dump (JSON) providing live item state
    #[arg(long)]
    pub items: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Bundled documents root (falls back to bundledRoot in the config)
    #[arg(long)]
    pub from: Option<PathBuf>,

    /// Overwrite files that already exist in the live tree
    #[arg(long)]
    pub replace: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check the translation tree for malformed documents and missing keys
    Check(CheckCommand),
    /// Resolve one translation the way a viewer would see it
    Resolve(ResolveCommand),
    /// Export live item state as a new translation document
    Export(ExportCommand),
    /// Copy bundled default documents into the live translations tree
    Extract(ExtractCommand),
    /// Initialize a new .lingorc.json configuration file
    Init,
}
