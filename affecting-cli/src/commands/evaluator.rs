use anyhow::Context;
use clap::Parser;

use affecting_common::StdResult;

use crate::CommandContext;

/// Public compute command
#[derive(Parser, Debug, Clone)]
pub struct PublicComputeCommand {
    /// Value compared to the configured one
    #[clap(long, allow_negative_numbers = true)]
    pub arg: i32,
}

impl PublicComputeCommand {
    /// Main command execution
    pub fn execute(&self, context: &CommandContext) -> StdResult<i32> {
        let configuration = context.configuration()?;
        let affecting = configuration.affecting_class();
        let evaluator = configuration.evaluator(&affecting, context.logger());

        Ok(evaluator.public_compute(self.arg))
    }
}

/// Restricted compute command
#[derive(Parser, Debug, Clone)]
pub struct RestrictedComputeCommand {
    /// Must not be zero
    #[clap(long, allow_negative_numbers = true)]
    pub arg: i32,
}

impl RestrictedComputeCommand {
    /// Main command execution
    pub fn execute(&self, context: &CommandContext) -> StdResult<i32> {
        let configuration = context.configuration()?;
        let affecting = configuration.affecting_class();
        let evaluator = configuration.evaluator(&affecting, context.logger());

        evaluator
            .restricted_compute(self.arg)
            .with_context(|| format!("restricted-compute refused argument '{}'", self.arg))
    }
}

/// Call static command
#[derive(Parser, Debug, Clone)]
pub struct CallStaticCommand {}

impl CallStaticCommand {
    /// Main command execution
    pub fn execute(&self, context: &CommandContext) -> StdResult<i32> {
        let configuration = context.configuration()?;
        let affecting = configuration.affecting_class();
        let evaluator = configuration.evaluator(&affecting, context.logger());

        Ok(evaluator.call_static())
    }
}

#[cfg(test)]
mod tests {
    use affecting_common::EvaluatorError;

    use crate::commands::test_tools::context_from_json;

    use super::*;

    #[test]
    fn public_compute_returns_the_greater_value() {
        let context = context_from_json(r#"{ "val": 10 }"#);

        assert_eq!(10, PublicComputeCommand { arg: 5 }.execute(&context).unwrap());
        assert_eq!(15, PublicComputeCommand { arg: 15 }.execute(&context).unwrap());
    }

    #[test]
    fn restricted_compute_returns_the_configured_value() {
        let context = context_from_json(r#"{ "val": 5 }"#);

        assert_eq!(5, RestrictedComputeCommand { arg: 1 }.execute(&context).unwrap());
    }

    #[test]
    fn restricted_compute_fails_with_invalid_argument_on_zero() {
        let context = context_from_json(r#"{ "val": 5 }"#);

        let error = RestrictedComputeCommand { arg: 0 }
            .execute(&context)
            .expect_err("restricted-compute should fail when arg is zero");

        let evaluator_error = error
            .downcast_ref::<EvaluatorError>()
            .expect("the root cause should be an EvaluatorError");
        assert_eq!("arg", evaluator_error.parameter());
        assert!(format!("{error:?}").contains("arg is equal to zero"));
    }

    #[test]
    fn call_static_returns_process_wide_value_by_default() {
        let context = context_from_json("{}");

        assert_eq!(2, CallStaticCommand {}.execute(&context).unwrap());
    }

    #[test]
    fn call_static_returns_configured_value() {
        let context = context_from_json(r#"{ "static_dependency_value": 999 }"#);

        assert_eq!(999, CallStaticCommand {}.execute(&context).unwrap());
    }

    #[test]
    fn commands_fail_when_configuration_is_invalid() {
        let context = context_from_json(r#"{ "val": "ten" }"#);

        PublicComputeCommand { arg: 1 }
            .execute(&context)
            .expect_err("an invalid configuration should fail the command");
    }
}
