use tracing::instrument;

use crate::error::Result;
use crate::math::Vector3;
use crate::topology::Solid;

use super::boolean::{BooleanModeller, BooleanOp};
use super::merge::{MergeCoplanar, MergeTolerances};

/// Runs a boolean operation and simplifies its result in one go.
///
/// The composed solid is optionally shifted by a host offset before the
/// merge pass, so that merging happens in the host's local coordinates.
pub struct BooleanPipeline<'a> {
    modeller: &'a mut BooleanModeller,
    op: BooleanOp,
    offset: Option<Vector3>,
    tolerances: MergeTolerances,
    max_rounds: usize,
    weld: bool,
}

impl<'a> BooleanPipeline<'a> {
    /// Creates a new `BooleanPipeline` for `op` over the modeller's operands.
    #[must_use]
    pub fn new(modeller: &'a mut BooleanModeller, op: BooleanOp) -> Self {
        Self {
            modeller,
            op,
            offset: None,
            tolerances: MergeTolerances::default(),
            max_rounds: 1,
            weld: false,
        }
    }

    /// Translates the composed solid by `offset` before merging.
    #[must_use]
    pub fn with_offset(mut self, offset: Vector3) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets custom merge tolerances.
    #[must_use]
    pub fn with_tolerances(mut self, tolerances: MergeTolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Allows up to `max_rounds` merge rounds.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Enables the approximate vertex weld.
    #[must_use]
    pub fn with_weld(mut self, weld: bool) -> Self {
        self.weld = weld;
        self
    }

    /// Executes the pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error if composition fails or the tolerances are invalid.
    #[instrument(skip(self), fields(op = ?self.op))]
    pub fn execute(self) -> Result<Solid> {
        let mut composed = self.modeller.compose(self.op)?;
        if let Some(offset) = &self.offset {
            composed.translate(offset);
        }
        MergeCoplanar::new(&composed)
            .with_tolerances(self.tolerances)
            .with_max_rounds(self.max_rounds)
            .with_weld(self.weld)
            .execute()
    }
}
