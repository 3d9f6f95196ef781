//! lift CLI: lifts inline type literals and destructured parameters out of
//! TypeScript sources.
//!
//! This binary provides the `lift` command with `check`, `fix`, and `rules`
//! subcommands. See `lift --help` for usage.

use clap::Parser;

mod cli_args;
mod commands;
mod tracing_config;

use cli_args::{Cli, Commands};
use commands::Settings;

fn main() {
    let cli = Cli::parse();
    tracing_config::init_tracing(cli.verbose);

    let formatter: Box<dyn lift_output::OutputFormatter> = if cli.json {
        Box::new(lift_output::json::JsonFormatter)
    } else {
        Box::new(lift_output::human::HumanFormatter)
    };

    let settings = Settings {
        config: cli.config.as_deref(),
        overrides: &cli.rules,
    };

    let exit_code = match cli.command {
        Commands::Check { paths } => commands::check::run(&*formatter, &settings, paths),
        Commands::Fix { paths, dry_run } => {
            commands::fix::run(&*formatter, &settings, paths, dry_run)
        }
        Commands::Rules => commands::rules::run(&*formatter, &settings),
    };

    std::process::exit(exit_code);
}
