// Configuration layering and content loading

use std::io::Write;
use std::path::PathBuf;

use folio::cli::{parse_args, CliCommand};
use folio::content::Portfolio;
use folio::domain::Theme;
use folio::startup::FolioConfig;
use serial_test::serial;

fn args(list: &[&str]) -> CliCommand {
    let mut full = vec!["folio".to_string()];
    full.extend(list.iter().map(|s| s.to_string()));
    parse_args(full.into_iter()).unwrap()
}

fn clear_env() {
    for key in ["FOLIO_THEME", "FOLIO_CONTENT", "FOLIO_RESUME", "FOLIO_DOWNLOAD_DIR", "FOLIO_LOG"] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_environment_over_defaults() {
    clear_env();
    std::env::set_var("FOLIO_THEME", "dark");
    std::env::set_var("FOLIO_DOWNLOAD_DIR", "/tmp/folio-downloads");

    let config = FolioConfig::from_env().unwrap();
    assert_eq!(config.theme, Some(Theme::Dark));
    assert_eq!(config.download_dir, Some(PathBuf::from("/tmp/folio-downloads")));
    clear_env();
}

#[test]
#[serial]
fn test_cli_over_environment() {
    clear_env();
    std::env::set_var("FOLIO_THEME", "dark");
    std::env::set_var("FOLIO_CONTENT", "/env/content.json");

    let CliCommand::Run(options) = args(&["--theme", "light"]) else {
        panic!("expected run");
    };
    let config = FolioConfig::from_env().unwrap().apply_cli(&options);
    assert_eq!(config.theme, Some(Theme::Light));
    assert_eq!(config.content_path, Some(PathBuf::from("/env/content.json")));
    clear_env();
}

#[test]
#[serial]
fn test_no_environment_means_defaults() {
    clear_env();
    assert_eq!(FolioConfig::from_env().unwrap(), FolioConfig::default());
}

#[test]
fn test_content_override_file() {
    let mut portfolio = Portfolio::builtin();
    portfolio.profile.name = "Grace Hopper".to_string();
    portfolio.typewriter_words = vec!["COBOL".to_string()];

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(portfolio.to_json().unwrap().as_bytes()).unwrap();

    let loaded = Portfolio::load(file.path()).unwrap();
    assert_eq!(loaded.profile.name, "Grace Hopper");
    assert_eq!(loaded.typewriter_words, vec!["COBOL".to_string()]);
}
