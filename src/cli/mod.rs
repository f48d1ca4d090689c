//! Command-line interface.
//!
//! `main` parses the arguments before touching the terminal. The one-shot
//! commands (version, help, content export) print to stdout and exit; `Run`
//! carries the options into the startup configuration.
//!
//! ```ignore
//! use folio::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(output) = run_cli_command(&command)? {
//!     println!("{}", output);
//!     return Ok(());
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions, USAGE};
pub use version::{version_line, VERSION};

use crate::content::Portfolio;
use crate::error::FolioResult;

/// Run a one-shot command, returning what it prints.
///
/// `None` for [`CliCommand::Run`], which is handled by the TUI.
pub fn run_cli_command(command: &CliCommand) -> FolioResult<Option<String>> {
    match command {
        CliCommand::Version => Ok(Some(version_line())),
        CliCommand::Help => Ok(Some(format!("{}\n\n{}", version_line(), USAGE))),
        CliCommand::ExportContent(options) => {
            let portfolio = match &options.content_path {
                Some(path) => Portfolio::load(path)?,
                None => Portfolio::builtin(),
            };
            portfolio.to_json().map(Some)
        }
        CliCommand::Run(_) => Ok(None),
    }
}
