//! Test utilities
//!
//! They contain:
//! * A mock builder to configure `automock` mocks in an isolated block
//! * Test doubles for the [AffectingSource][crate::AffectingSource] trait
//! * Loggers writing to stdout or to an inspectable memory buffer
//! * A builder of temporary directories

pub mod double;

pub use logging::{MemoryDrainForTestInspector, TestLogger};
pub use temp_dir::TempDir;
