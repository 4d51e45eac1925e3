use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::dashboard::FilterMode;
use crate::types::{TicketId, TicketStatus, VALID_STATUSES};

const VALID_FILTERS: &[&str] = &["all", "urgent", "pending", "resolved"];

#[derive(Parser)]
#[command(name = "support-dash")]
#[command(about = "Terminal dashboard for AI-triaged support email")]
#[command(version)]
pub struct Cli {
    /// Base URL of the support API (overrides config and environment)
    #[arg(long, global = true, value_name = "URL")]
    pub api_base: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Defaults to opening the dashboard
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// `--json` flag shared by commands that print results
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive dashboard
    #[command(visible_alias = "ui")]
    Dashboard,

    /// List tickets
    #[command(visible_alias = "ls")]
    List {
        /// Filter: all, urgent, pending, resolved
        #[arg(short, long, default_value = "all", value_parser = parse_filter)]
        filter: FilterMode,

        /// Include tickets hidden by the server's triage
        #[arg(long)]
        all: bool,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Show analytics counters and the sentiment breakdown
    Analytics {
        #[command(flatten)]
        output: OutputOptions,
    },

    /// Save and approve a reply (reads stdin when no text is given)
    Reply {
        /// Ticket ID
        id: TicketId,

        /// Reply text, or `-` for stdin
        text: Vec<String>,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Mark a ticket resolved
    Resolve {
        /// Ticket ID
        id: TicketId,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Set a ticket's status
    Status {
        /// Ticket ID
        id: TicketId,

        /// New status: Pending, Resolved
        #[arg(value_parser = parse_status)]
        status: TicketStatus,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Populate the server with demo tickets
    Seed {
        #[command(flatten)]
        output: OutputOptions,
    },

    /// Pull new mail from the server's mailbox
    Fetch {
        #[command(flatten)]
        output: OutputOptions,
    },

    /// Generate a new draft reply for a ticket (not saved)
    Draft {
        /// Ticket ID
        id: TicketId,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Create a ticket by hand
    Create {
        /// Sender address
        #[arg(long)]
        sender: String,

        /// Subject line
        #[arg(short, long)]
        subject: String,

        /// Body text, or `-` for stdin
        body: Vec<String>,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show {
        #[command(flatten)]
        output: OutputOptions,
    },

    /// Set a value in the config file (api_base, log_file)
    Set {
        key: String,
        value: String,

        #[command(flatten)]
        output: OutputOptions,
    },
}

fn parse_with_validation<T, F>(
    s: &str,
    parser: F,
    field_name: &str,
    valid_values: &[&str],
) -> Result<T, String>
where
    F: FnOnce(&str) -> Result<T, String>,
{
    parser(s).map_err(|_| {
        format!(
            "Invalid {}. Must be one of: {}",
            field_name,
            valid_values.join(", ")
        )
    })
}

fn parse_filter(s: &str) -> Result<FilterMode, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "filter",
        VALID_FILTERS,
    )
}

fn parse_status(s: &str) -> Result<TicketStatus, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "status",
        VALID_STATUSES,
    )
}
