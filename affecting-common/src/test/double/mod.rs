//! Test doubles
//!
//! Enable unit testing with controlled inputs and predictable behavior.

mod affecting_source;

pub use affecting_source::FixedAffectingSource;
