mod action;
mod bulk_edit;
mod cli;
mod config;
mod document;
mod error;
mod progress;
mod session;
mod ui;
mod watcher;

use action::Action;
use changelog::EntryStore;
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use config::Settings;
use error::Result;
use session::{DialoguerPrompter, Session, SessionOutcome};
use std::process;
use tracing::debug;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        if err.is_premature_exit() {
            ui::premature_exit(&err.user_message());
        } else {
            eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        }
        process::exit(1);
    }
}

/// Console diagnostics: `RUST_LOG` if set, otherwise `debug` with
/// `--verbose` and `warn` without
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let settings = Settings::from_cli(cli)?;
    debug!(?settings, "settings resolved");

    match action::start_process(cli.command.as_ref(), &settings.project_dir)? {
        Action::Release { version } => {
            ui::info_message(&format!("Releasing version {version}"));
            let entries =
                changelog::stamp_release(&EntryStore::new(), &version, &settings.timestamp_format)?;
            document::build_the_changelog(&settings, &entries)?;
        }
        Action::PromptCreation => {
            let mut prompter = DialoguerPrompter::default();
            let outcome =
                Session::new(&mut prompter, settings.log_message_limit).run(EntryStore::new())?;
            match outcome {
                SessionOutcome::Build(entries) => {
                    document::build_the_changelog(&settings, &entries)?;
                }
                SessionOutcome::BulkEdit(entries) => {
                    let edited = bulk_edit::bulk_edit(&settings, &entries)?;
                    document::build_the_changelog(&settings, &edited)?;
                }
                SessionOutcome::Exit => ui::info_message("Exited without changing the CHANGELOG"),
            }
        }
        Action::BulkEdit => {
            let edited = bulk_edit::bulk_edit(&settings, &EntryStore::new())?;
            document::build_the_changelog(&settings, &edited)?;
        }
    }
    Ok(())
}
