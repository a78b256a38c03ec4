#![warn(missing_docs)]

//! Shared datatypes and traits around a collaborator whose values affect computations elsewhere.
//!
//! Provide:
//! - The [AffectingSource] collaborator trait and its default implementation [AffectingClass].
//! - The [Evaluator] that compares or retrieves values relative to a given input.
//! - The [SimpleWrapper] that delegates to a concrete collaborator.
//! - [Logging][logging] helpers shared by the components.
//! - Test utilities (enabled with the `test_tools` feature): a mock builder, test doubles and a
//!   test logger.

macro_rules! cfg_test_tools {
    ($($item:item)*) => {
        $(
            #[cfg(any(test, feature = "test_tools"))]
            $item
        )*
    }
}

mod affecting;
mod evaluator;
pub mod logging;
mod simple_wrapper;

cfg_test_tools! {
    pub mod test;
}

pub use affecting::{AffectingClass, AffectingSource, STATIC_DEPENDENCY_VALUE, static_dependency};
pub use evaluator::{Evaluator, EvaluatorError, StaticDependency};
pub use simple_wrapper::SimpleWrapper;

#[cfg(test)]
pub use affecting::MockAffectingSource;

/// Generic error type
pub type StdError = anyhow::Error;

/// Generic result type
pub type StdResult<T> = anyhow::Result<T, StdError>;
