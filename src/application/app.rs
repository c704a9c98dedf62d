use crate::application::log_messages::application as messages;
use crate::cli::Cli;
use crate::config::Settings;
use crate::domain::roi::{compute_roi, RoiInputs};
use crate::domain::validation::ValidatedInputs;
use crate::report::{render, CurrencyFormatter, OutputFormat, RoiReport};
use crate::Result;
use std::fs;
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// Main application struct: the input provider and result consumer
/// wrapped around the ROI engine
pub struct Application {
    settings: Settings,
    cli: Cli,
}

impl Application {
    /// Wrap settings already loaded for `cli`
    ///
    /// Install the subscriber before calling this so the loaded settings
    /// are logged.
    pub fn with_settings(cli: Cli, settings: Settings) -> Self {
        debug!(?settings, "{}", messages::LOADED_SETTINGS);
        Self { settings, cli }
    }

    pub fn format(&self) -> OutputFormat {
        self.cli.format.unwrap_or(self.settings.output.format)
    }

    pub fn currency(&self) -> CurrencyFormatter {
        CurrencyFormatter::new(
            self.cli
                .currency_symbol
                .clone()
                .unwrap_or_else(|| self.settings.output.currency_symbol.clone()),
        )
    }

    /// Inputs from the `--input` file or the configured scenario, with
    /// `--set` overrides applied last
    #[instrument(skip(self))]
    pub fn resolve_inputs(&self) -> Result<RoiInputs> {
        let mut inputs = match &self.cli.input {
            Some(path) => {
                info!(path = %path.display(), "{}", messages::READING_INPUT_FILE);
                let raw = fs::read_to_string(path)?;
                serde_json::from_str::<RoiInputs>(&raw)?
            }
            None => self.settings.inputs(),
        };

        for item in &self.cli.overrides {
            inputs.set_field(&item.field, item.value)?;
            debug!(field = %item.field, value = item.value, "{}", messages::APPLIED_OVERRIDE);
        }

        Ok(inputs)
    }

    /// Resolve, validate and compute
    #[instrument(skip(self))]
    pub fn evaluate(&self) -> Result<RoiReport> {
        let raw = self.resolve_inputs()?;
        let validated = ValidatedInputs::try_from(raw)
            .inspect_err(|e| warn!(field = e.field(), "{}", messages::REJECTED_INPUTS))?;
        info!("{}", messages::VALIDATED_INPUTS);

        let inputs = validated.inputs();
        let results = compute_roi(&inputs);
        Ok(RoiReport::build(&inputs, &results, &self.currency()))
    }

    #[instrument(skip(self))]
    pub fn run(&self) -> Result<()> {
        let report = self.evaluate()?;
        let rendered = render(&report, self.format(), &self.currency())?;

        match &self.cli.output {
            Some(path) => {
                fs::write(path, rendered)?;
                info!(path = %path.display(), "{}", messages::WROTE_REPORT);
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(rendered.as_bytes())?;
                if !rendered.ends_with('\n') {
                    stdout.write_all(b"\n")?;
                }
            }
        }

        Ok(())
    }
}
