mod face;
mod forest;
mod weld;

pub use face::{corners_area, face_clear_of, same_face, try_confirm_neighbor, MergeFace};
pub use forest::MergeForest;

use crate::error::{OperationError, Result};
use crate::math::{
    AREA_EPSILON, CLEAR_EPSILON, COLLINEAR_TOLERANCE, PLANE_TOLERANCE, VERTEX_EQUALITY_TOLERANCE,
    WELD_TOLERANCE_SQ,
};
use crate::topology::Solid;

/// Tolerances used by the coplanar merge pass.
///
/// The bounding-box margin used while welding is independent of the
/// positional tolerance; the two are tuned separately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeTolerances {
    /// Per-coordinate distance under which two corners coincide.
    pub position: f64,
    /// Bound on normal component and plane offset differences.
    pub plane: f64,
    /// Cross-product magnitude under which three corners are collinear.
    pub collinear: f64,
    /// Faces with an area at or below this are not emitted.
    pub area: f64,
    /// Margin of the bounding-box reject test in the weld pass.
    pub clear_epsilon: f64,
    /// Squared distance under which corners are welded.
    pub weld_sq: f64,
}

impl Default for MergeTolerances {
    fn default() -> Self {
        Self {
            position: VERTEX_EQUALITY_TOLERANCE,
            plane: PLANE_TOLERANCE,
            collinear: COLLINEAR_TOLERANCE,
            area: AREA_EPSILON,
            clear_epsilon: CLEAR_EPSILON,
            weld_sq: WELD_TOLERANCE_SQ,
        }
    }
}

impl MergeTolerances {
    /// Sets the positional tolerance.
    #[must_use]
    pub fn with_position(mut self, position: f64) -> Self {
        self.position = position;
        self
    }

    /// Sets the plane tolerance.
    #[must_use]
    pub fn with_plane(mut self, plane: f64) -> Self {
        self.plane = plane;
        self
    }

    /// Sets the collinearity tolerance.
    #[must_use]
    pub fn with_collinear(mut self, collinear: f64) -> Self {
        self.collinear = collinear;
        self
    }

    /// Sets the minimum emitted area.
    #[must_use]
    pub fn with_area(mut self, area: f64) -> Self {
        self.area = area;
        self
    }

    /// Sets the bounding-box margin of the weld pass.
    #[must_use]
    pub fn with_clear_epsilon(mut self, clear_epsilon: f64) -> Self {
        self.clear_epsilon = clear_epsilon;
        self
    }

    /// Sets the squared weld distance.
    #[must_use]
    pub fn with_weld_sq(mut self, weld_sq: f64) -> Self {
        self.weld_sq = weld_sq;
        self
    }

    /// Checks that every tolerance is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("position", self.position),
            ("plane", self.plane),
            ("collinear", self.collinear),
            ("area", self.area),
            ("clear_epsilon", self.clear_epsilon),
            ("weld_sq", self.weld_sq),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(OperationError::InvalidInput(format!(
                    "tolerance {name} = {value} must be finite and non-negative"
                ))
                .into());
            }
        }
        Ok(())
    }
}

/// Fuses adjacent coplanar triangles of a solid and emits the simplified
/// triangle set.
pub struct MergeCoplanar<'a> {
    solid: &'a Solid,
    tolerances: MergeTolerances,
    max_rounds: usize,
    weld: bool,
}

impl<'a> MergeCoplanar<'a> {
    /// Creates a new `MergeCoplanar` operation with default tolerances, a
    /// single merge round and no welding.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self {
            solid,
            tolerances: MergeTolerances::default(),
            max_rounds: 1,
            weld: false,
        }
    }

    /// Sets custom tolerances.
    #[must_use]
    pub fn with_tolerances(mut self, tolerances: MergeTolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Allows up to `max_rounds` merge rounds, stopping early once a round
    /// merges nothing.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Enables the approximate vertex weld after merging.
    #[must_use]
    pub fn with_weld(mut self, weld: bool) -> Self {
        self.weld = weld;
        self
    }

    /// Executes the merge, returning the simplified solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerances are invalid.
    pub fn execute(&self) -> Result<Solid> {
        self.tolerances.validate()?;

        let mut forest = MergeForest::from_solid(self.solid, self.tolerances);
        let merged = forest.merge_until_stable(self.max_rounds);
        if self.weld {
            forest.weld_vertices();
        }
        let result = forest.to_solid()?;

        tracing::debug!(
            input = self.solid.triangle_count(),
            merged,
            output = result.triangle_count(),
            "coplanar merge finished"
        );
        Ok(result)
    }
}
