//! Command module
//! This module holds the subcommands that can be used from the CLI.

mod evaluator;
mod invoke;

pub use evaluator::{CallStaticCommand, PublicComputeCommand, RestrictedComputeCommand};
pub use invoke::InvokeCommand;

use clap::Subcommand;
use serde::Serialize;

use affecting_common::StdResult;

use crate::CommandContext;

/// Result of a command, printed as JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOutput {
    /// Name of the executed command
    pub command: &'static str,

    /// Value computed by the command
    pub result: i32,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum EvaluatorCommands {
    /// Return the greater of the configured value and the given argument
    #[clap(alias("pc"))]
    PublicCompute(PublicComputeCommand),

    /// Return the configured value, rejecting a zero argument
    #[clap(alias("rc"))]
    RestrictedCompute(RestrictedComputeCommand),

    /// Return the static dependency value
    CallStatic(CallStaticCommand),

    /// Return the collaborator method result
    Invoke(InvokeCommand),
}

impl EvaluatorCommands {
    /// Execute the selected command
    pub fn execute(&self, context: &CommandContext) -> StdResult<CommandOutput> {
        let (command, result) = match self {
            Self::PublicCompute(cmd) => ("public-compute", cmd.execute(context)?),
            Self::RestrictedCompute(cmd) => ("restricted-compute", cmd.execute(context)?),
            Self::CallStatic(cmd) => ("call-static", cmd.execute(context)?),
            Self::Invoke(cmd) => ("invoke", cmd.execute(context)?),
        };

        Ok(CommandOutput { command, result })
    }
}
