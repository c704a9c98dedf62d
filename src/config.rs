use crate::domain::roi::constants::defaults;
use crate::domain::roi::RoiInputs;
use crate::report::{OutputFormat, DEFAULT_CURRENCY_SYMBOL};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `VOICE_ROI__OUTPUT__FORMAT=json`
pub const ENV_PREFIX: &str = "VOICE_ROI";
pub const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    pub scenario: ScenarioSettings,
    pub logging: LoggingSettings,
    pub output: OutputSettings,
}

/// The clinic scenario, grouped the way the calculator form is laid out
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct ScenarioSettings {
    pub appointments: AppointmentSettings,
    pub calls: CallSettings,
    pub staff: StaffSettings,
    pub vendor: VendorSettings,
    pub assumptions: AssumptionSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct AppointmentSettings {
    pub monthly_appointments: f64,
    pub avg_appointment_value: f64,
    pub no_show_rate_before: f64,
    pub no_show_rate_after: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct CallSettings {
    pub daily_inbound_calls: f64,
    pub daily_outbound_calls: f64,
    pub inbound_answer_rate: f64,
    pub avg_call_minutes: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct StaffSettings {
    pub receptionist_salary: f64,
    pub manager_salary: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct VendorSettings {
    pub setup_fee: f64,
    pub monthly_software_cost: f64,
    pub cost_per_minute: f64,
    pub cost_per_booking: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct AssumptionSettings {
    pub staff_capacity_constraint: f64,
    pub ai_inbound_handling_rate: f64,
    pub ai_outbound_handling_rate: f64,
    pub appointment_increase: f64,
    pub missed_call_booking_rate: f64,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub currency_symbol: String,
}

impl From<ScenarioSettings> for RoiInputs {
    fn from(scenario: ScenarioSettings) -> Self {
        let ScenarioSettings {
            appointments,
            calls,
            staff,
            vendor,
            assumptions,
        } = scenario;
        Self {
            monthly_appointments: appointments.monthly_appointments,
            avg_appointment_value: appointments.avg_appointment_value,
            no_show_rate_before: appointments.no_show_rate_before,
            no_show_rate_after: appointments.no_show_rate_after,
            daily_inbound_calls: calls.daily_inbound_calls,
            daily_outbound_calls: calls.daily_outbound_calls,
            inbound_answer_rate: calls.inbound_answer_rate,
            avg_call_minutes: calls.avg_call_minutes,
            receptionist_salary: staff.receptionist_salary,
            manager_salary: staff.manager_salary,
            setup_fee: vendor.setup_fee,
            monthly_software_cost: vendor.monthly_software_cost,
            cost_per_minute: vendor.cost_per_minute,
            cost_per_booking: vendor.cost_per_booking,
            staff_capacity_constraint: assumptions.staff_capacity_constraint,
            ai_inbound_handling_rate: assumptions.ai_inbound_handling_rate,
            ai_outbound_handling_rate: assumptions.ai_outbound_handling_rate,
            appointment_increase: assumptions.appointment_increase,
            missed_call_booking_rate: assumptions.missed_call_booking_rate,
        }
    }
}

impl Settings {
    /// Load settings from defaults, `config/default`, `config/local`, the
    /// optional explicit file and `VOICE_ROI__*` environment variables,
    /// later sources winning.
    pub fn new(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::with_environment(config_file, Self::environment())
    }

    /// The environment source used by [`Settings::new`]
    pub fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
    }

    pub fn with_environment(
        config_file: Option<&Path>,
        environment: Environment,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // Default clinic scenario
            .set_default(
                "scenario.appointments.monthly_appointments",
                defaults::MONTHLY_APPOINTMENTS,
            )?
            .set_default(
                "scenario.appointments.avg_appointment_value",
                defaults::AVG_APPOINTMENT_VALUE,
            )?
            .set_default(
                "scenario.appointments.no_show_rate_before",
                defaults::NO_SHOW_RATE_BEFORE,
            )?
            .set_default("scenario.appointments.no_show_rate_after", defaults::NO_SHOW_RATE_AFTER)?
            .set_default("scenario.calls.daily_inbound_calls", defaults::DAILY_INBOUND_CALLS)?
            .set_default("scenario.calls.daily_outbound_calls", defaults::DAILY_OUTBOUND_CALLS)?
            .set_default("scenario.calls.inbound_answer_rate", defaults::INBOUND_ANSWER_RATE)?
            .set_default("scenario.calls.avg_call_minutes", defaults::AVG_CALL_MINUTES)?
            .set_default("scenario.staff.receptionist_salary", defaults::RECEPTIONIST_SALARY)?
            .set_default("scenario.staff.manager_salary", defaults::MANAGER_SALARY)?
            .set_default("scenario.vendor.setup_fee", defaults::SETUP_FEE)?
            .set_default("scenario.vendor.monthly_software_cost", defaults::MONTHLY_SOFTWARE_COST)?
            .set_default("scenario.vendor.cost_per_minute", defaults::COST_PER_MINUTE)?
            .set_default("scenario.vendor.cost_per_booking", defaults::COST_PER_BOOKING)?
            .set_default(
                "scenario.assumptions.staff_capacity_constraint",
                defaults::STAFF_CAPACITY_CONSTRAINT,
            )?
            .set_default(
                "scenario.assumptions.ai_inbound_handling_rate",
                defaults::AI_INBOUND_HANDLING_RATE,
            )?
            .set_default(
                "scenario.assumptions.ai_outbound_handling_rate",
                defaults::AI_OUTBOUND_HANDLING_RATE,
            )?
            .set_default(
                "scenario.assumptions.appointment_increase",
                defaults::APPOINTMENT_INCREASE,
            )?
            .set_default(
                "scenario.assumptions.missed_call_booking_rate",
                defaults::MISSED_CALL_BOOKING_RATE,
            )?
            .set_default("logging.level", "warn")?
            .set_default("logging.format", "pretty")?
            .set_default("output.format", "text")?
            .set_default("output.currency_symbol", DEFAULT_CURRENCY_SYMBOL)?
            // Add configuration files if they exist
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false));

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder.add_source(environment).build()?.try_deserialize()
    }

    /// Engine inputs described by the configured scenario
    pub fn inputs(&self) -> RoiInputs {
        self.scenario.into()
    }
}
