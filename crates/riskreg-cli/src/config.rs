//! Configuration for the riskreg CLI.

use serde::Deserialize;

/// Register configuration.
///
/// Loaded from `riskreg.toml` `[register]` section or
/// `RISKREG__` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterConfig {
    /// Directory holding the register's JSON records.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    "./register".to_string()
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Load the register config from file and environment.
pub fn load_config(file_prefix: &str) -> anyhow::Result<RegisterConfig> {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("RISKREG")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    match cfg.get::<RegisterConfig>("register") {
        Ok(c) => Ok(c),
        Err(_) => Ok(RegisterConfig::default()),
    }
}
