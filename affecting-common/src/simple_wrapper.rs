use crate::{AffectingClass, AffectingSource};

/// Delegates to a borrowed concrete collaborator, [AffectingClass] unless told otherwise.
pub struct SimpleWrapper<'a, S: AffectingSource = AffectingClass> {
    source: &'a S,
}

impl<'a, S: AffectingSource> SimpleWrapper<'a, S> {
    /// [SimpleWrapper] factory
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Call the collaborator `method`, returning its result unchanged.
    pub fn invoke(&self) -> i32 {
        self.source.method()
    }
}
