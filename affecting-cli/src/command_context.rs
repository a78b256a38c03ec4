use config::ConfigBuilder;
use config::builder::DefaultState;
use slog::Logger;

use affecting_common::StdResult;

use crate::Configuration;

/// Context for the command execution
pub struct CommandContext {
    config_builder: ConfigBuilder<DefaultState>,
    logger: Logger,
}

impl CommandContext {
    /// Create a new command context
    pub fn new(config_builder: ConfigBuilder<DefaultState>, logger: Logger) -> Self {
        Self {
            config_builder,
            logger,
        }
    }

    /// Get the configuration built from the context sources
    pub fn configuration(&self) -> StdResult<Configuration> {
        Configuration::load(self.config_builder.clone())
    }

    /// Get the shared logger
    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}
