//! wh3 CLI
//!
//! Console command helper for Total War: Warhammer III

use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use colored::Colorize;
use wh3_core::logging_facility::{self, Profile};
use wh3_core::{log_op_end, log_op_error, log_op_start};
use wh3_core::{ConsoleVerb, ExError, ExErrorKind, Wh3Error};
use wh3_store::layout::DEFAULT_DATA_DIR;
use wh3_store::{DataLayout, GameData};

mod clipboard;
mod commands;
mod present;

use clipboard::{Clipboard, NoClipboard, SystemClipboard};
use commands::{CommandResult, Context};

#[derive(Debug, Parser)]
#[command(name = "wh3")]
#[command(about = "Warhammer 3 console command helper", long_about = None)]
struct Cli {
    /// Directory holding the exported game-data tables
    #[arg(long, global = true, env = "WH3_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Print commands without copying them to the clipboard
    #[arg(long, global = true)]
    no_clipboard: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON logging on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn profile(&self) -> Profile {
        if self.log_json {
            Profile::Production
        } else if self.verbose {
            Profile::Development
        } else {
            Profile::Quiet
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Copy the spawn command for a legendary lord
    Spawn(commands::lords::LordArgs),
    /// Copy the give-settlement command for a legendary lord's faction
    Give(commands::lords::LordArgs),
    /// Copy the command spawning a generic lord of the lord's race and faction
    Generic(commands::lords::LordArgs),
    /// Show everything known about a legendary lord
    Info(commands::lords::LordArgs),
    /// List legendary lords, optionally for one race
    List(commands::lords::ListArgs),
    /// Show the console commands reference
    Cmd(commands::reference::SearchArgs),
    /// Copy `kill`, or describe a character by art_set_id
    Kill(commands::characters::KillArgs),
    /// List faction keys
    Factions(commands::factions::FactionArgs),
    /// List characters by art_set_id
    Characters(commands::reference::SearchArgs),
}

impl Commands {
    fn verb(&self) -> &'static str {
        match self {
            Commands::Spawn(_) => "spawn",
            Commands::Give(_) => "give",
            Commands::Generic(_) => "generic",
            Commands::Info(_) => "info",
            Commands::List(_) => "list",
            Commands::Cmd(_) => "cmd",
            Commands::Kill(_) => "kill",
            Commands::Factions(_) => "factions",
            Commands::Characters(_) => "characters",
        }
    }
}

fn route(command: Commands, ctx: &mut Context<'_>) -> CommandResult {
    match command {
        Commands::Spawn(args) => commands::lords::execute_copy(ConsoleVerb::Spawn, args, ctx),
        Commands::Give(args) => commands::lords::execute_copy(ConsoleVerb::Give, args, ctx),
        Commands::Generic(args) => {
            commands::lords::execute_copy(ConsoleVerb::SpawnGeneric, args, ctx)
        }
        Commands::Info(args) => commands::lords::execute_info(args, ctx),
        Commands::List(args) => commands::lords::execute_list(args, ctx),
        Commands::Cmd(args) => commands::reference::execute(args, ctx),
        Commands::Kill(args) => commands::characters::execute_kill(args, ctx),
        Commands::Factions(args) => commands::factions::execute(args, ctx),
        Commands::Characters(args) => commands::characters::execute_list(args, ctx),
    }
}

/// Structured form of a handler error for the `run_verb` error event
fn classify(err: &(dyn Error + 'static)) -> ExError {
    if let Some(err) = err.downcast_ref::<Wh3Error>() {
        err.clone().into()
    } else if let Some(err) = err.downcast_ref::<ExError>() {
        err.clone()
    } else if err.is::<io::Error>() {
        ExError::new(ExErrorKind::Io).with_message(err.to_string())
    } else {
        ExError::new(ExErrorKind::Internal).with_message(err.to_string())
    }
}

fn dispatch(command: Commands, ctx: &mut Context<'_>) -> CommandResult {
    let verb = command.verb();
    log_op_start!("run_verb", verb = verb);
    let start = Instant::now();

    let result = route(command, ctx);

    match &result {
        Ok(()) => {
            log_op_end!(
                "run_verb",
                duration_ms = start.elapsed().as_millis() as u64,
                verb = verb
            );
        }
        Err(err) => {
            log_op_error!(
                "run_verb",
                classify(err.as_ref()),
                duration_ms = start.elapsed().as_millis() as u64,
                verb = verb
            );
        }
    }
    result
}

fn run(cli: Cli) -> CommandResult {
    let layout = DataLayout::new(cli.data_dir);
    let data = GameData::load(&layout)?;

    let mut clipboard: Box<dyn Clipboard> = if cli.no_clipboard {
        Box::new(NoClipboard)
    } else {
        Box::new(SystemClipboard)
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut ctx = Context {
        data: &data,
        layout: &layout,
        clipboard: clipboard.as_mut(),
        out: &mut out,
    };
    dispatch(cli.command, &mut ctx)
}

fn report(err: &(dyn Error + 'static)) {
    eprintln!("{} {}", "Error:".red(), err);
    if err
        .downcast_ref::<Wh3Error>()
        .is_some_and(Wh3Error::is_lord_lookup)
    {
        eprintln!("Use {} to see available lords.", "wh3 list".cyan());
    }
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.profile());

    if let Err(e) = run(cli) {
        report(e.as_ref());
        std::process::exit(1);
    }
}
