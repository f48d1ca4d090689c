//! Command-line argument parsing.

use std::path::PathBuf;

use crate::domain::Theme;
use crate::error::{FolioError, FolioResult};

/// Options that shape the interactive session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    /// Initial theme, overriding the system preference
    pub theme: Option<Theme>,
    /// JSON file replacing the built-in content
    pub content_path: Option<PathBuf>,
    /// Resume file offered by the Resume button
    pub resume_path: Option<PathBuf>,
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Print the version and exit
    Version,
    /// Print usage and exit
    Help,
    /// Print the content document (built-in or `--content`) as JSON and exit
    ExportContent(RunOptions),
    /// Run the TUI (default)
    Run(RunOptions),
}

pub const USAGE: &str = "\
Usage: folio [OPTIONS]

Options:
      --theme <light|dark>  Start in the given theme instead of the terminal's
      --content <FILE>      Load page content from a JSON file
      --resume <FILE>       Resume file saved by the Resume button
      --export-content      Print the page content as JSON and exit
  -V, --version             Print version
  -h, --help                Print help
";

/// Parse command-line arguments (the first item is the program name).
///
/// `--version` and `--help` win wherever they appear.
///
/// # Examples
///
/// ```
/// use folio::cli::{parse_args, CliCommand};
///
/// let args = vec!["folio".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> FolioResult<CliCommand>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut export = false;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };
        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--export-content" => export = true,
            "--theme" => {
                let value = take_value("--theme", inline, &mut args)?;
                let theme = value.parse().map_err(|_| FolioError::InvalidSetting {
                    setting: "--theme",
                    value,
                })?;
                options.theme = Some(theme);
            }
            "--content" => {
                options.content_path = Some(take_value("--content", inline, &mut args)?.into());
            }
            "--resume" => {
                options.resume_path = Some(take_value("--resume", inline, &mut args)?.into());
            }
            _ => {
                return Err(FolioError::InvalidSetting {
                    setting: "argument",
                    value: arg,
                })
            }
        }
    }

    if export {
        Ok(CliCommand::ExportContent(options))
    } else {
        Ok(CliCommand::Run(options))
    }
}

fn take_value<I>(setting: &'static str, inline: Option<String>, rest: &mut I) -> FolioResult<String>
where
    I: Iterator<Item = String>,
{
    match inline.or_else(|| rest.next()) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(FolioError::InvalidSetting {
            setting,
            value: String::new(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> FolioResult<CliCommand> {
        let mut full = vec!["folio".to_string()];
        full.extend(args.iter().map(|s| s.to_string()));
        parse_args(full.into_iter())
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]).unwrap(), CliCommand::Run(RunOptions::default()));
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]).unwrap(), CliCommand::Version);
        assert_eq!(parse(&["-V"]).unwrap(), CliCommand::Version);
        assert_eq!(parse(&["--theme", "dark", "-V"]).unwrap(), CliCommand::Version);
    }

    #[test]
    fn test_parse_help() {
        assert_eq!(parse(&["-h"]).unwrap(), CliCommand::Help);
    }

    #[test]
    fn test_parse_run_options() {
        let cmd = parse(&["--theme", "Dark", "--content=site.json", "--resume", "cv.pdf"]).unwrap();
        assert_eq!(
            cmd,
            CliCommand::Run(RunOptions {
                theme: Some(Theme::Dark),
                content_path: Some(PathBuf::from("site.json")),
                resume_path: Some(PathBuf::from("cv.pdf")),
            })
        );
    }

    #[test]
    fn test_parse_export_keeps_content_path() {
        let cmd = parse(&["--export-content", "--content", "a.json"]).unwrap();
        match cmd {
            CliCommand::ExportContent(options) => {
                assert_eq!(options.content_path, Some(PathBuf::from("a.json")));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_bad_theme_is_rejected() {
        let err = parse(&["--theme", "sepia"]).unwrap_err();
        assert_eq!(err.to_string(), "invalid value \"sepia\" for --theme");
    }

    #[test]
    fn test_missing_value_is_rejected() {
        assert!(parse(&["--content"]).is_err());
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = parse(&["--sync"]).unwrap_err();
        assert!(matches!(err, FolioError::InvalidSetting { setting: "argument", .. }));
    }
}
