//! tickoff - in-memory console todo manager

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tickoff::config::no_color_requested;
use tickoff::console::{seed_tasks, Session};
use tickoff::{Overrides, Settings, TaskManager, TodoError};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tickoff")]
#[command(version = "0.1.0")]
#[command(about = "Menu-driven todo list that lives for one session", long_about = None)]
struct Cli {
    /// JSON settings file
    #[arg(short, long, env = "TICKOFF_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Disable coloured output (also set by a non-empty NO_COLOR)
    #[arg(long)]
    no_color: bool,

    /// Delete tasks without asking for confirmation
    #[arg(long)]
    no_confirm: bool,

    /// Add a task before the menu starts (repeatable)
    #[arg(short, long = "seed", value_name = "DESCRIPTION")]
    seeds: Vec<String>,

    /// Print the final task list as JSON after exiting the menu
    #[arg(long)]
    json_on_exit: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "tickoff=debug,warn"
    } else {
        "tickoff=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => exit_with_error(&e),
    };
    let no_color = cli.no_color || no_color_requested(std::env::var_os("NO_COLOR").as_deref());
    let settings = settings.with_overrides(Overrides {
        no_color,
        no_confirm: cli.no_confirm,
        seed_tasks: cli.seeds,
    });

    let mut manager = TaskManager::new();
    if let Err(e) = seed_tasks(&mut manager, settings.seed_tasks.iter().cloned()) {
        exit_with_error(&e);
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(&mut manager, stdin.lock(), stdout.lock(), &settings).run()?;

    if cli.json_on_exit {
        println!("{}", serde_json::to_string_pretty(manager.get_all())?);
    }

    Ok(())
}

fn exit_with_error(err: &TodoError) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), err);
    std::process::exit(err.exit_code());
}
