use tracing::instrument;

use crate::error::Result;
use crate::topology::{ClassifiedObject, Solid};

use super::difference::Difference;
use super::intersect_op::Intersect;
use super::select::BooleanOp;
use super::union::Union;

/// Holds a pair of split and classified objects and answers boolean queries on them.
///
/// The same pair may be queried for any number of operations in any order;
/// none of them leaves a lasting change on either object.
#[derive(Debug, Clone)]
pub struct BooleanModeller {
    object_a: ClassifiedObject,
    object_b: ClassifiedObject,
}

impl BooleanModeller {
    /// Creates a modeller over two classified objects.
    #[must_use]
    pub fn new(object_a: ClassifiedObject, object_b: ClassifiedObject) -> Self {
        Self { object_a, object_b }
    }

    /// The first operand.
    #[must_use]
    pub fn object_a(&self) -> &ClassifiedObject {
        &self.object_a
    }

    /// The second operand.
    #[must_use]
    pub fn object_b(&self) -> &ClassifiedObject {
        &self.object_b
    }

    /// Mutable access to the first operand, e.g. to resolve vertex statuses.
    pub fn object_a_mut(&mut self) -> &mut ClassifiedObject {
        &mut self.object_a
    }

    /// Mutable access to the second operand.
    pub fn object_b_mut(&mut self) -> &mut ClassifiedObject {
        &mut self.object_b
    }

    /// Returns the owned operands.
    #[must_use]
    pub fn into_objects(self) -> (ClassifiedObject, ClassifiedObject) {
        (self.object_a, self.object_b)
    }

    /// `A ∪ B`.
    ///
    /// # Errors
    ///
    /// Returns an error if a face is unclassified or refers to a missing vertex.
    pub fn union(&self) -> Result<Solid> {
        Union::new(&self.object_a, &self.object_b).execute()
    }

    /// `A ∩ B`.
    ///
    /// # Errors
    ///
    /// Returns an error if a face is unclassified or refers to a missing vertex.
    pub fn intersection(&self) -> Result<Solid> {
        Intersect::new(&self.object_a, &self.object_b).execute()
    }

    /// `A - B`.
    ///
    /// # Errors
    ///
    /// Returns an error if a face is unclassified or refers to a missing vertex.
    pub fn difference(&mut self) -> Result<Solid> {
        Difference::new(&self.object_a, &mut self.object_b).execute()
    }

    /// Runs `op` on the held operands.
    ///
    /// # Errors
    ///
    /// Returns an error if a face is unclassified or refers to a missing vertex.
    #[instrument(skip(self), fields(faces_a = self.object_a.faces().len(), faces_b = self.object_b.faces().len()))]
    pub fn compose(&mut self, op: BooleanOp) -> Result<Solid> {
        match op {
            BooleanOp::Union => self.union(),
            BooleanOp::Intersection => self.intersection(),
            BooleanOp::Difference => self.difference(),
        }
    }
}
