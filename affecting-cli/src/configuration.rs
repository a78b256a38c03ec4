use anyhow::Context;
use config::ConfigBuilder;
use config::builder::DefaultState;
use serde::Deserialize;
use slog::Logger;

use affecting_common::{AffectingClass, AffectingSource, Evaluator, StdResult};

/// CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Configuration {
    /// Value of the collaborator the commands run against
    #[serde(default)]
    pub val: i32,

    /// Value returned by the static dependency in place of the process-wide one
    pub static_dependency_value: Option<i32>,
}

impl Configuration {
    /// Build the configuration from the given sources
    pub fn load(config_builder: ConfigBuilder<DefaultState>) -> StdResult<Self> {
        config_builder
            .build()
            .with_context(|| "configuration build error")?
            .try_deserialize()
            .with_context(|| "configuration deserialize error")
    }

    /// Build the collaborator described by this configuration
    pub fn affecting_class(&self) -> AffectingClass {
        let mut affecting = AffectingClass::default();
        affecting.set_val(self.val);

        affecting
    }

    /// Build an [Evaluator] over the given collaborator, injecting the configured static
    /// dependency value if any
    pub fn evaluator<'a>(&self, source: &'a dyn AffectingSource, logger: &Logger) -> Evaluator<'a> {
        let evaluator = Evaluator::new(source).with_logger(logger.clone());

        match self.static_dependency_value {
            Some(value) => evaluator.with_static_dependency(move || value),
            None => evaluator,
        }
    }
}
