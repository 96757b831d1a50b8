use thiserror::Error;

pub const DEFAULT_BATCH_SIZE: u32 = 1000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Batch size must be greater than zero")]
    EmptyBatch,
}

/// Which games a run plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Single,
    Showdown,
    Both,
}

impl Mode {
    pub fn runs_single(self) -> bool {
        matches!(self, Mode::Single | Mode::Both)
    }

    pub fn runs_showdown(self) -> bool {
        matches!(self, Mode::Showdown | Mode::Both)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Run settings. Every variable is optional: with none set, a run plays
/// 1000 games in each mode with an OS-seeded generator and prints text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub batch_size: u32,
    pub mode: Mode,
    pub seed: Option<u64>,
    pub output: OutputFormat,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            mode: Mode::Both,
            seed: None,
            output: OutputFormat::Text,
        }
    }
}

impl SimulationConfig {
    /// Reads the optional `POKER_BATCH_SIZE`, `POKER_PLAYERS`, `POKER_SEED`
    /// and `POKER_OUTPUT`, falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("POKER_BATCH_SIZE") {
            config.batch_size = parse("POKER_BATCH_SIZE", &value)?;
            if config.batch_size == 0 {
                return Err(ConfigError::EmptyBatch);
            }
        }

        if let Some(value) = lookup("POKER_PLAYERS") {
            config.mode = match value.trim() {
                "1" => Mode::Single,
                "2" => Mode::Showdown,
                "" | "both" => Mode::Both,
                _ => return Err(invalid("POKER_PLAYERS", &value)),
            };
        }

        if let Some(value) = lookup("POKER_SEED") {
            config.seed = Some(parse("POKER_SEED", &value)?);
        }

        if let Some(value) = lookup("POKER_OUTPUT") {
            config.output = match value.trim().to_ascii_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => return Err(invalid("POKER_OUTPUT", &value)),
            };
        }

        Ok(config)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| invalid(key, value))
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    }
}
