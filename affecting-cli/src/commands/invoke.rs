use clap::Parser;

use affecting_common::{SimpleWrapper, StdResult};

use crate::CommandContext;

/// Invoke command, calling the configured collaborator through a [SimpleWrapper]
#[derive(Parser, Debug, Clone)]
pub struct InvokeCommand {}

impl InvokeCommand {
    /// Main command execution
    pub fn execute(&self, context: &CommandContext) -> StdResult<i32> {
        let affecting = context.configuration()?.affecting_class();

        Ok(SimpleWrapper::new(&affecting).invoke())
    }
}
