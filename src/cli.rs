use crate::domain::roi::RoiInputs;
use crate::report::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// One `--set KEY=VALUE` parameter override
#[derive(Debug, Clone, PartialEq)]
pub struct InputOverride {
    pub field: String,
    pub value: f64,
}

fn parse_override(raw: &str) -> Result<InputOverride, String> {
    let (field, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    let field = field.trim();
    if !RoiInputs::FIELD_NAMES.iter().any(|name| *name == field) {
        return Err(format!(
            "unknown field `{field}`; expected one of: {}",
            RoiInputs::FIELD_NAMES.join(", ")
        ));
    }
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("`{value}` is not a number: {e}"))?;
    Ok(InputOverride {
        field: field.to_string(),
        value,
    })
}

#[derive(Parser, Debug)]
#[command(name = "voice_roi")]
#[command(
    about = "Estimate the ROI of handing clinic call handling to an automated voice agent",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML, YAML or JSON) layered over config/default and config/local
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON file holding a flat camelCase input mapping; replaces the configured scenario
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override one input parameter, e.g. --set dailyInboundCalls=30
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_override)]
    pub overrides: Vec<InputOverride>,

    /// Output format (defaults to output.format from settings)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Currency symbol for text output
    #[arg(long)]
    pub currency_symbol: Option<String>,

    /// Increase verbosity level (-v: info, -vv: debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
