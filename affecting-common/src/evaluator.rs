use slog::{Logger, debug, warn};
use thiserror::Error;

use crate::logging::LoggerExtensions;
use crate::{AffectingSource, static_dependency};

/// Zero-argument function standing in for [static_dependency].
pub type StaticDependency = Box<dyn Fn() -> i32 + Send + Sync>;

const ZERO_ARGUMENT_MESSAGE: &str = "arg is equal to zero";

/// [Evaluator] related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluatorError {
    /// Raised when an argument value is not accepted by an operation.
    #[error("{message} (Parameter '{parameter}')")]
    InvalidArgument {
        /// Why the argument was rejected
        message: String,
        /// Name of the rejected parameter
        parameter: &'static str,
    },
}

impl EvaluatorError {
    fn zero_argument(parameter: &'static str) -> Self {
        Self::InvalidArgument {
            message: ZERO_ARGUMENT_MESSAGE.to_string(),
            parameter,
        }
    }

    /// Name of the parameter that caused the error
    pub fn parameter(&self) -> &str {
        match self {
            Self::InvalidArgument { parameter, .. } => parameter,
        }
    }

    /// Message describing the error, without the parameter name
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument { message, .. } => message,
        }
    }
}

/// Compare or retrieve values of a borrowed [AffectingSource] relative to a given input.
///
/// The evaluator only reads the source, it never mutates it.
pub struct Evaluator<'a> {
    source: &'a dyn AffectingSource,
    static_dependency: StaticDependency,
    logger: Logger,
}

impl<'a> Evaluator<'a> {
    /// [Evaluator] factory, using the process-wide [static_dependency].
    pub fn new(source: &'a dyn AffectingSource) -> Self {
        Self {
            source,
            static_dependency: Box::new(static_dependency),
            logger: Logger::root(slog::Discard, slog::o!()),
        }
    }

    /// Replace the static dependency used by [Self::call_static] for this evaluator only.
    pub fn with_static_dependency<F>(mut self, static_dependency: F) -> Self
    where
        F: Fn() -> i32 + Send + Sync + 'static,
    {
        self.static_dependency = Box::new(static_dependency);
        self
    }

    /// Set the logger used by this evaluator.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger.new_with_component_name::<Self>();
        self
    }

    /// Return the greater of the source value and `arg`.
    ///
    /// The source value is read exactly once.
    pub fn public_compute(&self, arg: i32) -> i32 {
        let val = self.source.val();
        let result = val.max(arg);
        debug!(self.logger, "public_compute"; "arg" => arg, "val" => val, "result" => result);

        result
    }

    /// Return the source value, rejecting a zero `arg` before reading it.
    pub fn restricted_compute(&self, arg: i32) -> Result<i32, EvaluatorError> {
        if arg == 0 {
            warn!(self.logger, "restricted_compute rejected its argument"; "arg" => arg);
            return Err(EvaluatorError::zero_argument("arg"));
        }

        let val = self.source.val();
        debug!(self.logger, "restricted_compute"; "arg" => arg, "result" => val);

        Ok(val)
    }

    /// Return the static dependency value, without any interaction with the source.
    pub fn call_static(&self) -> i32 {
        let result = (self.static_dependency)();
        debug!(self.logger, "call_static"; "result" => result);

        result
    }
}
