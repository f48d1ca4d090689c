use color_eyre::Result;
use crossterm::event::EventStream;
use std::time::Duration;

use folio::adapters::SystemLauncher;
use folio::app::{run_app, App};
use folio::cli::{parse_args, run_cli_command, CliCommand, RunOptions};
use folio::content::Portfolio;
use folio::domain::detect_system_theme;
use folio::startup::{init_tracing, FolioConfig};
use folio::terminal::{setup_panic_hook, TerminalManager};

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args())?;
    if let Some(output) = run_cli_command(&command)? {
        println!("{}", output);
        return Ok(());
    }
    let options = match command {
        CliCommand::Run(options) => options,
        _ => RunOptions::default(),
    };

    let config = FolioConfig::from_env()?.apply_cli(&options);
    init_tracing(&config.log_filter);

    // Content errors abort before the terminal is touched.
    let portfolio = match &config.content_path {
        Some(path) => Portfolio::load(path)?,
        None => Portfolio::builtin(),
    };
    let theme = config.theme.unwrap_or_else(detect_system_theme);
    let resume = config.resume_settings(&portfolio.contact);

    let mut app = App::new(portfolio, theme, resume, Box::new(SystemLauncher::new()))
        .with_scroll_threshold(config.scroll_threshold);

    // After color_eyre so its hook is the one chained.
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let mut manager = TerminalManager::new()?;
    let size = manager.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    let tick = Duration::from_millis(config.tick_rate_ms);
    let result = runtime.block_on(run_app(manager.terminal(), &mut app, EventStream::new(), tick));

    manager.restore()?;
    tracing::info!("folio exiting");
    result
}
