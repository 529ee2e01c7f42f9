//! CLI argument definitions for the atelier content tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "atelier",
    version,
    about = "Atelier content CLI - manage the portfolio rate catalog",
    long_about = "Manage the content behind a design-portfolio site:\n\n\
                  rate categories with plan-comparison tables, journey/timeline\n\
                  entries, and submitted enquiries, stored as JSON documents."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the JSON content store.
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        default_value = "content",
        global = true
    )]
    pub data_dir: PathBuf,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage rate categories.
    #[command(subcommand)]
    Category(CategoryCommand),

    /// Manage journey/timeline entries.
    #[command(subcommand)]
    Journey(JourneyCommand),

    /// Manage submitted enquiries.
    #[command(subcommand)]
    Enquiry(EnquiryCommand),
}

#[derive(Subcommand)]
pub enum CategoryCommand {
    /// Create a category from a JSON payload file.
    Create(PayloadArgs),

    /// Apply a partial update from a JSON payload file.
    Update(IdPayloadArgs),

    /// Delete a category.
    Delete(IdArgs),

    /// Summarize all categories.
    List,

    /// Render the plan-comparison table for one category.
    Show(IdArgs),
}

#[derive(Subcommand)]
pub enum JourneyCommand {
    /// Add a journey entry from a JSON payload file.
    Add(PayloadArgs),

    /// Apply a partial update from a JSON payload file.
    Update(IdPayloadArgs),

    /// Remove a journey entry.
    Remove(IdArgs),

    /// Print all journey entries.
    List,
}

#[derive(Subcommand)]
pub enum EnquiryCommand {
    /// Record an enquiry from a JSON payload file.
    Submit(PayloadArgs),

    /// Summarize all enquiries, newest first.
    List,

    /// Remove an enquiry.
    Remove(IdArgs),
}

#[derive(Args)]
pub struct PayloadArgs {
    /// Path to the JSON payload.
    #[arg(long = "file", value_name = "JSON")]
    pub file: PathBuf,
}

#[derive(Args)]
pub struct IdPayloadArgs {
    /// Identity of the entry to update.
    #[arg(value_name = "ID")]
    pub id: String,

    /// Path to the JSON payload.
    #[arg(long = "file", value_name = "JSON")]
    pub file: PathBuf,
}

#[derive(Args)]
pub struct IdArgs {
    /// Identity of the entry.
    #[arg(value_name = "ID")]
    pub id: String,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
