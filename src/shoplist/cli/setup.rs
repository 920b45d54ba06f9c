use clap::{Parser, Subcommand};
use shoplist::model::ItemId;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shoplist", bin_name = "shoplist", version)]
#[command(about = "An in-memory shopping list for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose (debug) logging on stderr
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Directory holding config.json (overrides SHOPLIST_HOME)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive session reading intents from stdin (default)
    #[command(alias = "sh")]
    Session,

    /// Run the intents listed in a file, one per line
    Run {
        /// Path to the intent script
        file: PathBuf,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (default-quantity, validation-notice)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// One line of session input, parsed without a binary name.
#[derive(Parser, Debug)]
#[command(
    name = "intent",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct IntentLine {
    #[command(subcommand)]
    pub intent: Intent,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Add an item
    #[command(alias = "a")]
    Add {
        /// Item name (quote names with spaces)
        name: String,

        /// Quantity; falls back to the configured default
        #[arg(allow_hyphen_values = true)]
        quantity: Option<String>,
    },

    /// Start editing an item
    #[command(alias = "e")]
    Edit { id: ItemId },

    /// Save the item being edited
    #[command(alias = "s")]
    Save {
        id: ItemId,

        /// New name
        name: String,

        /// New quantity; keeps the current one when left out
        #[arg(allow_hyphen_values = true)]
        quantity: Option<String>,
    },

    /// Delete an item
    #[command(alias = "rm")]
    Delete { id: ItemId },

    /// Show the list
    #[command(alias = "ls")]
    List,

    /// Show available intents
    Help,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Splits a session line with shell quoting rules and parses it.
///
/// Returns `Ok(None)` for blank lines and `#` comments.
pub fn parse_intent(line: &str) -> Result<Option<Intent>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let words = shlex::split(trimmed).ok_or_else(|| "Unbalanced quotes".to_string())?;
    IntentLine::try_parse_from(words)
        .map(|parsed| Some(parsed.intent))
        .map_err(|e| e.to_string().trim_end().to_string())
}

pub const INTENT_HELP: &str = "\
Intents:
  add <name> [quantity]          (a)   add an item
  edit <id>                      (e)   start editing an item
  save <id> <name> [quantity]    (s)   save the item being edited
  delete <id>                    (rm)  delete an item
  list                           (ls)  show the list
  help                                 show this help
  quit                                 end the session";
