use anyhow::Result;
use clap::Parser;
use tracing::info;
use voice_roi::application::logging;
use voice_roi::cli::Cli;
use voice_roi::config::Settings;
use voice_roi::Application;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::new(cli.config.as_deref())?;

    logging::init(&settings.logging, cli.verbosity);
    info!("Starting voice_roi");

    let app = Application::with_settings(cli, settings);
    app.run()?;

    Ok(())
}
