use crate::topology::Status;

/// The type of boolean operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    Union,
    Intersection,
    Difference,
}

/// Which operand a face comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    A,
    B,
}

impl Operand {
    /// Single-letter label used in diagnostics.
    #[must_use]
    pub fn label(self) -> char {
        match self {
            Operand::A => 'A',
            Operand::B => 'B',
        }
    }
}

/// Face statuses a boolean operation keeps from each operand.
///
/// | Op           | from A            | from B  | B inverted |
/// |--------------|-------------------|---------|------------|
/// | Union        | OUTSIDE, SAME     | OUTSIDE | no         |
/// | Intersection | INSIDE, SAME      | INSIDE  | no         |
/// | Difference   | OUTSIDE, OPPOSITE | INSIDE  | yes        |
///
/// For a difference the `B` column applies after B's inside/outside faces
/// have been swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPattern {
    /// Primary status kept from A.
    pub a_primary: Status,
    /// Status kept from A where it coincides with B.
    pub a_coincident: Status,
    /// Status kept from B.
    pub b: Status,
    /// Whether B's inside/outside faces are swapped while composing.
    pub invert_b: bool,
}

impl SelectionPattern {
    /// Whether a face of `operand` with `status` belongs in the result.
    #[must_use]
    pub fn keeps(&self, operand: Operand, status: Status) -> bool {
        match operand {
            Operand::A => status == self.a_primary || status == self.a_coincident,
            Operand::B => status == self.b,
        }
    }
}

impl BooleanOp {
    /// Selection pattern of this operation.
    #[must_use]
    pub fn pattern(self) -> SelectionPattern {
        match self {
            BooleanOp::Union => SelectionPattern {
                a_primary: Status::Outside,
                a_coincident: Status::Same,
                b: Status::Outside,
                invert_b: false,
            },
            BooleanOp::Intersection => SelectionPattern {
                a_primary: Status::Inside,
                a_coincident: Status::Same,
                b: Status::Inside,
                invert_b: false,
            },
            BooleanOp::Difference => SelectionPattern {
                a_primary: Status::Outside,
                a_coincident: Status::Opposite,
                b: Status::Inside,
                invert_b: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_keeps_outside_faces() {
        let pattern = BooleanOp::Union.pattern();
        assert!(pattern.keeps(Operand::A, Status::Outside));
        assert!(pattern.keeps(Operand::B, Status::Outside));
        assert!(pattern.keeps(Operand::A, Status::Same));
        assert!(!pattern.keeps(Operand::B, Status::Same));
    }

    #[test]
    fn union_discards_inside_faces() {
        let pattern = BooleanOp::Union.pattern();
        assert!(!pattern.keeps(Operand::A, Status::Inside));
        assert!(!pattern.keeps(Operand::B, Status::Inside));
    }

    #[test]
    fn intersection_keeps_inside_faces() {
        let pattern = BooleanOp::Intersection.pattern();
        assert!(pattern.keeps(Operand::A, Status::Inside));
        assert!(pattern.keeps(Operand::B, Status::Inside));
        assert!(pattern.keeps(Operand::A, Status::Same));
        assert!(!pattern.keeps(Operand::A, Status::Opposite));
    }

    #[test]
    fn difference_keeps_a_outside_and_opposite() {
        let pattern = BooleanOp::Difference.pattern();
        assert!(pattern.keeps(Operand::A, Status::Outside));
        assert!(pattern.keeps(Operand::A, Status::Opposite));
        assert!(!pattern.keeps(Operand::A, Status::Same));
        assert!(pattern.invert_b);
    }

    #[test]
    fn only_difference_inverts() {
        assert!(!BooleanOp::Union.pattern().invert_b);
        assert!(!BooleanOp::Intersection.pattern().invert_b);
    }
}
