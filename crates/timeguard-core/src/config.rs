use anyhow::Result;
use config::Config;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub timezone: TimezoneConfig,
    pub parser: ParserConfig,
    pub integrations: IntegrationsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimezoneConfig {
    /// Identifier of the default timezone used to resolve values that lack
    /// explicit offset information ("utc", an IANA name, or an alias).
    pub default: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    /// Selects the externally supplied parser over the built-in strict one.
    pub use_plugin_parser: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntegrationsConfig {
    /// Host frameworks the embedding application wires the validators into.
    /// Carried for the host's wiring code; never consulted during evaluation.
    pub extend_orms: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables into a `Settings`.
    /// Environment variables take precedence over `config.toml` values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("timezone.default", "utc")?
            .set_default("parser.use_plugin_parser", false)?
            .set_default("integrations.extend_orms", Vec::<String>::new())?
            .set_default("logging.level", "debug")?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(timezone = %settings.timezone.default, "Configuration loaded");
    Ok(settings)
}
