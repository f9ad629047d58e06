mod action;
mod app;
mod auth;
mod carousel;
mod cli;
mod clock;
mod components;
mod config;
mod error;
mod event;
mod formatter;
mod input;
mod locale;
mod logging;
mod routes;
mod showcase;
mod testimonials;
mod timers;
mod tui;

use std::sync::Arc;

use color_eyre::eyre::Result;

use cli::Cli;
use clock::{Clock, FixedClock, SystemClock};
use config::ConfigManager;
use locale::{EnvLocaleProvider, FixedLocale, LocaleProvider};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse_args();

    let config_manager = match &cli.config {
        Some(dir) if cli.write_default_config => ConfigManager::from_dir(dir.clone()),
        Some(dir) => ConfigManager::with_dir(dir.clone())?,
        None => ConfigManager::new()?,
    };

    if cli.write_default_config {
        let written = config_manager.write_default_configs()?;
        if written.is_empty() {
            println!("Config already present in {}", config_manager.config_dir().display());
        }
        for path in written {
            println!("Wrote {}", path.display());
        }
        return Ok(());
    }

    let app_config = config_manager.app_config().clone();
    let log_path = app_config.general.log_path()?;
    let level = logging::resolve_level(cli.log_level.as_deref(), &app_config.general.log_level);
    let _log_guard = logging::init(&log_path, level)?;

    let clock: Arc<dyn Clock> = match &cli.frozen_at {
        Some(raw) => Arc::new(FixedClock::parse(raw)),
        None => Arc::new(SystemClock),
    };
    let locale: Arc<dyn LocaleProvider> = match cli.locale.as_ref().or(app_config.showcase.locale.as_ref()) {
        Some(tag) => Arc::new(FixedLocale::new(tag)),
        None => Arc::new(EnvLocaleProvider),
    };

    tui::install_panic_hook();
    let terminal = tui::init()?;

    let result = match app::App::new(terminal, &app_config, config_manager.theme().clone(), clock, locale) {
        Ok(mut app) => app.run().await,
        Err(e) => Err(e),
    };

    tui::restore()?;
    if let Err(e) = &result {
        tracing::error!("Exited with error: {}", e);
    }
    result?;

    Ok(())
}
