#![warn(missing_docs)]

//! Command line front-end running the evaluators of `affecting-common` over a collaborator whose
//! value comes from the configuration.

pub mod commands;
mod command_context;
mod configuration;

pub use command_context::CommandContext;
pub use configuration::Configuration;

/// `affecting-common` re-exports
pub mod common {
    pub use affecting_common::{StdError, StdResult};
}
