use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Logging configuration for the engine's tracing spans/events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing-subscriber` env-filter directive, e.g. "ssti_engine=debug".
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Engine-wide configuration: recursion limits, feature toggles for the
/// riskiest generation families, and primer tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum recursion depth the generator will descend to before giving
    /// up on a goal (spec §4.2's "configurable limit (default 32)").
    pub max_recursion_depth: u32,

    /// Whether `EVAL_FUNC`/`EVAL` goals may be attempted.
    pub enable_eval_goals: bool,

    /// Whether `OS_POPEN_READ`/`MODULE_OS_POPEN_READ` goals may be attempted.
    pub enable_popen_goals: bool,

    /// Whether `CONFIG` goals may be attempted.
    pub enable_config_goals: bool,

    /// Upper bound on the small integers the integer-variable primer (C4)
    /// attempts to bind to context variables.
    pub int_primer_upper_bound: u32,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_recursion_depth: 32,
            enable_eval_goals: true,
            enable_popen_goals: true,
            enable_config_goals: true,
            int_primer_upper_bound: 10,
            logging: LoggingConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file, layering `SSTI_`-prefixed
    /// environment variables on top.
    pub fn from_file(path: &str) -> Result<Self, EngineError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("SSTI"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Save the configuration to a TOML file, mirroring the teacher's
    /// `MitigationConfig::save_to_file` (used to snapshot a tuned config
    /// for reuse against the same target).
    pub fn save_to_file(&self, path: &str) -> Result<(), EngineError> {
        let toml_string = toml::to_string_pretty(self).map_err(|e| EngineError::Serialization(e.to_string()))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// Validate the configuration, rejecting nonsensical limits.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_recursion_depth == 0 {
            return Err("max_recursion_depth cannot be 0".to_string());
        }

        if self.int_primer_upper_bound == 0 {
            return Err("int_primer_upper_bound cannot be 0".to_string());
        }

        Ok(())
    }
}
