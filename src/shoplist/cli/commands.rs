//! # CLI Layer
//!
//! This module is **one possible presentation layer** for shoplist; it is
//! not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Reads stdin or script files
//! - Writes to stdout/stderr
//! - Decides exit codes
//!
//! ## Flow
//!
//! 1. `run()` parses process arguments and installs logging
//! 2. `init_context()` builds the list and subscribes the renderers to it
//! 3. `run_session()` feeds each input line through `parse_intent()` into
//!    the matching `ListStateStore` method
//!
//! The list itself is rendered by the subscription, not by the handlers:
//! every change re-prints the list and every rejected input prints the
//! configured notice. Handlers only print what is specific to the intent
//! (messages, the edit draft).

use super::print::{
    print_config, print_draft, print_items, print_messages, print_notice,
};
use super::setup::{parse_intent, Cli, Commands, Intent, INTENT_HELP};
use super::tracing_setup::init_tracing;
use clap::Parser;
use colored::Colorize;
use shoplist::api::{configure, ConfigAction, ListEvent, ListStateStore};
use shoplist::error::{Result, ShopError};
use shoplist::init::{initialize, resolve_config_dir};
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::Path;

struct AppContext {
    list: ListStateStore,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose).ok();

    match cli.command {
        Some(Commands::Config { key, value }) => {
            handle_config(cli.config_dir.as_deref(), key, value)
        }
        Some(Commands::Run { file }) => {
            let mut ctx = init_context(cli.config_dir.as_deref())?;
            let script = File::open(&file)?;
            tracing::debug!(file = %file.display(), "running script");
            run_session(&mut ctx, BufReader::new(script), false)
        }
        Some(Commands::Session) | None => {
            let mut ctx = init_context(cli.config_dir.as_deref())?;
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            run_session(&mut ctx, stdin.lock(), interactive)
        }
    }
}

fn init_context(config_dir: Option<&Path>) -> Result<AppContext> {
    let mut list = initialize(config_dir)?;
    list.subscribe(|event| match event {
        ListEvent::Changed { items } => print_items(items),
        ListEvent::ValidationFailed { notice, .. } => print_notice(notice),
    });
    Ok(AppContext { list })
}

fn run_session<R: BufRead>(ctx: &mut AppContext, mut input: R, interactive: bool) -> Result<()> {
    if interactive {
        println!("{}", "Type 'help' for intents, 'quit' to leave.".dimmed());
        prompt()?;
    }

    // Raw bytes, so one undecodable line is reported instead of ending the session.
    let mut buf = Vec::new();
    while input.read_until(b'\n', &mut buf)? > 0 {
        match std::str::from_utf8(&buf) {
            Ok(line) => match parse_intent(line) {
                Ok(None) => {}
                Ok(Some(Intent::Quit)) => break,
                Ok(Some(intent)) => handle_intent(ctx, intent)?,
                Err(e) => eprintln!("{}", e.red()),
            },
            Err(e) => eprintln!("{}", format!("Line is not valid UTF-8: {}", e).red()),
        }
        buf.clear();
        if interactive {
            prompt()?;
        }
    }

    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

fn handle_intent(ctx: &mut AppContext, intent: Intent) -> Result<()> {
    let outcome = match intent {
        Intent::Add { name, quantity } => match quantity {
            Some(quantity) => ctx.list.add(&name, &quantity),
            None => ctx.list.add_with_default_quantity(&name),
        },
        Intent::Edit { id } => ctx.list.begin_edit(id),
        Intent::Save { id, name, quantity } => {
            // Leaving the quantity out keeps the one the editor started from.
            let quantity = quantity
                .or_else(|| ctx.list.get(id).map(|item| item.quantity.to_string()))
                .unwrap_or_else(|| ctx.list.config().default_quantity.clone());
            ctx.list.commit_edit(id, &name, &quantity)
        }
        Intent::Delete { id } => ctx.list.delete(id),
        Intent::List => {
            let result = ctx.list.list()?;
            print_items(&result.listed_items);
            return Ok(());
        }
        Intent::Help => {
            println!("{}", INTENT_HELP);
            return Ok(());
        }
        Intent::Quit => return Ok(()),
    };

    match outcome {
        Ok(result) => {
            if let Some(draft) = &result.draft {
                print_draft(draft);
            }
            print_messages(&result.messages);
            Ok(())
        }
        // Already shown to the user by the subscription.
        Err(ShopError::Validation(_)) => Ok(()),
        Err(e) => Err(e),
    }
}

fn handle_config(
    config_dir: Option<&Path>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let dir = resolve_config_dir(config_dir)?;
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = configure(&dir, action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
