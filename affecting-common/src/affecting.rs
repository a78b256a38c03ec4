/// Value returned by [static_dependency].
pub const STATIC_DEPENDENCY_VALUE: i32 = 2;

/// Process-wide function returning a constant, shared by every component.
pub fn static_dependency() -> i32 {
    STATIC_DEPENDENCY_VALUE
}

/// A collaborator whose values affect computations done by other components.
#[cfg_attr(test, mockall::automock)]
pub trait AffectingSource: Send + Sync {
    /// Read the current value.
    fn val(&self) -> i32;

    /// Replace the current value.
    fn set_val(&mut self, val: i32);

    /// Compute the collaborator constant, implementors may return their own.
    fn method(&self) -> i32 {
        1
    }
}

/// Default [AffectingSource] implementation, zero initialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffectingClass {
    val: i32,
}

impl AffectingClass {
    /// [AffectingClass] factory
    pub fn new(val: i32) -> Self {
        Self { val }
    }
}

impl AffectingSource for AffectingClass {
    fn val(&self) -> i32 {
        self.val
    }

    fn set_val(&mut self, val: i32) {
        self.val = val;
    }
}
