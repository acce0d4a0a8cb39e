use crate::error::Result;
use crate::topology::{ClassifiedObject, Solid};

use super::compose::compose_solid;
use super::select::BooleanOp;

/// Computes the boolean union of two classified objects.
pub struct Union<'a> {
    object_a: &'a ClassifiedObject,
    object_b: &'a ClassifiedObject,
}

impl<'a> Union<'a> {
    /// Creates a new `Union` operation.
    #[must_use]
    pub fn new(object_a: &'a ClassifiedObject, object_b: &'a ClassifiedObject) -> Self {
        Self { object_a, object_b }
    }

    /// Executes the union, returning the composed solid.
    ///
    /// # Errors
    ///
    /// Returns an error if a face of either object is unclassified or refers
    /// to a missing vertex.
    pub fn execute(&self) -> Result<Solid> {
        compose_solid(self.object_a, self.object_b, &BooleanOp::Union.pattern())
    }
}
