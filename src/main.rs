use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use linktasker::cli::args::{Cli, Commands, LinkCommands, TaskCommands};
use linktasker::cli::commands;
use linktasker::config::{ColorSetting, Config};
use linktasker::storage::JsonStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let store = JsonStore::open()?;
    let format = cli.output.unwrap_or(config.general.default_output);

    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {},
    }

    let output = match cli.command {
        Commands::Task(args) => match args.command {
            TaskCommands::Add(a) => commands::task_cmd::add(&store, a, format)?,
            TaskCommands::List(a) => commands::task_cmd::list(&store, a, format)?,
            TaskCommands::Done { id } => commands::task_cmd::done(&store, &id, format)?,
            TaskCommands::Edit(a) => commands::task_cmd::edit(&store, a, format)?,
            TaskCommands::Rm { id } => commands::task_cmd::rm(&store, &id, format)?,
        },
        Commands::Link(args) => match args.command {
            LinkCommands::Add(a) => commands::link_cmd::add(&store, a, format)?,
            LinkCommands::List(a) => commands::link_cmd::list(&store, a, format)?,
            LinkCommands::Edit(a) => commands::link_cmd::edit(&store, a, format)?,
            LinkCommands::Rm { id } => commands::link_cmd::rm(&store, &id, format)?,
        },
        Commands::Stats(args) => commands::stats(&store, &config, args.command, format)?,
        Commands::Demo(args) => commands::demo(&store, args.command, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
