use clap::Parser;
use folio::cli::Cli;
use folio::config::FolioConfig;
use folio::error::FolioError;
use folio::logging::{LogConfig, init_logging};
use folio::prefs::ThemeStore;
use folio::runtime::{ChangeLog, Engine, Runtime};
use folio::state::AppState;
use folio::submission::endpoint_from_config;
use folio::terminal::Terminal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> folio::Result<()> {
    let log_config = LogConfig::from_verbosity(cli.verbose).with_log_file(cli.log_file.clone());
    init_logging(&log_config)
        .map_err(|err| FolioError::io(cli.log_file.clone().unwrap_or_default(), err))?;

    let config = FolioConfig::load(cli.config.as_deref())?;
    let store = ThemeStore::resolve(cli.prefs, std::env::var_os("HOME").as_deref());
    let theme = ThemeStore::load_or_light(store.as_ref());
    tracing::info!(%theme, "starting contact form");

    let state = AppState::new(&config, theme);
    let mut engine = Engine::new(state, endpoint_from_config(&config));
    if let Some(store) = store {
        engine = engine.with_theme_store(store);
    }
    engine.subscribe(ChangeLog);

    let mut runtime = Runtime::new(engine, Terminal::new()?);
    runtime.run()?;
    Ok(())
}
