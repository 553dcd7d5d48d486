mod settings;

use config::{Config, Environment, File};

use crate::utils::error::Result;
use settings::PartialSettings;

pub use settings::{LoggingSettings, SessionSettings, Settings};

/// Loads settings from `config/default.*` (optional) and `MINIPUB_*` environment variables,
/// after pulling in a `.env` file if one exists. Nested keys use `__`, e.g.
/// `MINIPUB_SESSION__INBOX_CAPACITY=64`.
///
/// Anything left unset keeps its value from `Settings::default()`.
pub fn load_config() -> Result<Settings> {
    let _ = dotenvy::dotenv();

    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(
            Environment::with_prefix("MINIPUB")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    let config = builder.build()?;
    let partial: PartialSettings = config.try_deserialize()?;

    Ok(partial.merge(Settings::default()))
}
