//! Launcher console: terminal front end for the job launcher.

mod app;
mod pages;

use std::path::PathBuf;

use launcher_nav::{AddressBar, Application, ROOT_PATH};
use tracing_subscriber::EnvFilter;

use crate::app::LauncherConfig;

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config = LauncherConfig::load(&PathBuf::from("launcher.toml"))?;
    // LAUNCHER_PATH plays the address bar's deep-link role at startup.
    let initial = std::env::var("LAUNCHER_PATH").unwrap_or_else(|_| ROOT_PATH.to_string());
    let address = AddressBar::new(initial);
    let router = app::build_router(&config, address)?;

    Application::new().run(router)
}

/// The terminal is taken over by the UI, so logs go to a file, and only
/// when one is named via LAUNCHER_LOG.
fn init_tracing() -> anyhow::Result<()> {
    let Ok(path) = std::env::var("LAUNCHER_LOG") else {
        return Ok(());
    };
    let file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
