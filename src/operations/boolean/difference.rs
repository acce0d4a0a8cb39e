use crate::error::Result;
use crate::topology::{ClassifiedObject, Solid};

use super::compose::compose_solid;
use super::select::BooleanOp;

/// Computes the boolean difference `A - B` of two classified objects.
///
/// B's inside and outside faces are swapped for the duration of the
/// composition and restored from a snapshot before `execute` returns,
/// whether or not composition succeeded.
pub struct Difference<'a> {
    object_a: &'a ClassifiedObject,
    object_b: &'a mut ClassifiedObject,
}

impl<'a> Difference<'a> {
    /// Creates a new `Difference` operation.
    #[must_use]
    pub fn new(object_a: &'a ClassifiedObject, object_b: &'a mut ClassifiedObject) -> Self {
        Self { object_a, object_b }
    }

    /// Executes the difference, returning the composed solid.
    ///
    /// # Errors
    ///
    /// Returns an error if a face of either object is unclassified or refers
    /// to a missing vertex. B's face statuses are unchanged either way.
    pub fn execute(&mut self) -> Result<Solid> {
        let pattern = BooleanOp::Difference.pattern();
        let snapshot = self.object_b.face_statuses();

        self.object_b.invert_inside_faces();
        let result = compose_solid(self.object_a, self.object_b, &pattern);
        self.object_b.restore_face_statuses(&snapshot);

        result
    }
}
