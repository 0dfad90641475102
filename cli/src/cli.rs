use changelog::DEFAULT_TIMESTAMP_FORMAT;
use clap::{Parser, Subcommand};

use crate::config::{CHANGELOG_FILE, DEFAULT_EDITOR, DEFAULT_EDIT_TIMEOUT_SECS};

#[derive(Parser, Debug)]
#[command(name = "chlog")]
#[command(
    author,
    version,
    about = "Keep a CHANGELOG.md up to date from the command line"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Project directory (defaults to the nearest directory with a package manifest)
    #[clap(short, long, global = true)]
    pub dir: Option<String>,

    /// Changelog file, relative to the project directory
    #[clap(short, long, global = true, default_value = CHANGELOG_FILE)]
    pub file: String,

    /// Editor command used for bulk edits
    #[clap(long, global = true, env = "EDITOR", default_value = DEFAULT_EDITOR)]
    pub editor: String,

    /// Seconds to wait for a bulk edit to be saved
    #[clap(long, global = true, default_value_t = DEFAULT_EDIT_TIMEOUT_SECS)]
    pub edit_timeout: u64,

    /// strftime format of release timestamps
    #[clap(long, global = true, default_value = DEFAULT_TIMESTAMP_FORMAT)]
    pub timestamp_format: String,

    /// Enable verbose output with additional information
    #[clap(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Add log entries interactively (the default)
    Log,

    /// Publish the unreleased logs under a release heading
    Release {
        /// Release version as MAJOR.MINOR.PATCH (defaults to the package version)
        version: Option<String>,
    },

    /// Edit unreleased entries as JSON in an external editor
    Edit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["chlog"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.file, CHANGELOG_FILE);
    }

    #[test]
    fn release_takes_an_optional_version() {
        let cli = Cli::try_parse_from(["chlog", "release", "2.0.0", "-v"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Release {
                version: Some("2.0.0".to_string())
            })
        );
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["chlog", "release"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Release { version: None }));
    }

    #[test]
    fn global_options_work_after_subcommand() {
        let cli =
            Cli::try_parse_from(["chlog", "edit", "--editor", "vim", "-f", "HISTORY.md"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Edit));
        assert_eq!(cli.editor, "vim");
        assert_eq!(cli.file, "HISTORY.md");
    }
}
