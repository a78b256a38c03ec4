use std::sync::atomic::{AtomicUsize, Ordering};

use crate::AffectingSource;

/// A fixed implementation of the [AffectingSource] trait for testing purposes.
///
/// It counts how many times its value was read and its method called.
#[derive(Debug, Default)]
pub struct FixedAffectingSource {
    val: i32,
    method_result: Option<i32>,
    val_reads: AtomicUsize,
    method_calls: AtomicUsize,
}

impl FixedAffectingSource {
    /// Create a new instance of `FixedAffectingSource` with the given value.
    pub fn new(val: i32) -> Self {
        Self {
            val,
            ..Self::default()
        }
    }

    /// Override the result of [AffectingSource::method].
    pub fn with_method_result(mut self, method_result: i32) -> Self {
        self.method_result = Some(method_result);
        self
    }

    /// Number of times the value was read.
    pub fn val_reads(&self) -> usize {
        self.val_reads.load(Ordering::SeqCst)
    }

    /// Number of times the method was called.
    pub fn method_calls(&self) -> usize {
        self.method_calls.load(Ordering::SeqCst)
    }
}

impl AffectingSource for FixedAffectingSource {
    fn val(&self) -> i32 {
        self.val_reads.fetch_add(1, Ordering::SeqCst);
        self.val
    }

    fn set_val(&mut self, val: i32) {
        self.val = val;
    }

    fn method(&self) -> i32 {
        self.method_calls.fetch_add(1, Ordering::SeqCst);
        self.method_result.unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_reads_and_calls() {
        let source = FixedAffectingSource::new(3);

        assert_eq!(3, source.val());
        assert_eq!(3, source.val());
        assert_eq!(1, source.method());

        assert_eq!(2, source.val_reads());
        assert_eq!(1, source.method_calls());
    }

    #[test]
    fn set_val_does_not_count_as_a_read() {
        let mut source = FixedAffectingSource::default();

        source.set_val(8);

        assert_eq!(0, source.val_reads());
        assert_eq!(8, source.val());
    }
}
