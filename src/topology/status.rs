/// Classification of a vertex or face relative to the other solid.
///
/// The variants are ordered; raw values outside `Unknown..=Boundary` do not
/// name a status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum Status {
    /// Not yet classified.
    #[default]
    Unknown = 0,
    /// Inside the other solid.
    Inside = 1,
    /// Outside the other solid.
    Outside = 2,
    /// Coincident with a face of the other solid, same orientation.
    Same = 3,
    /// Coincident with a face of the other solid, reversed orientation.
    Opposite = 4,
    /// Vertex lying exactly on the other solid's surface.
    Boundary = 5,
}

impl Status {
    /// All statuses in ascending order.
    pub const ALL: [Status; 6] = [
        Status::Unknown,
        Status::Inside,
        Status::Outside,
        Status::Same,
        Status::Opposite,
        Status::Boundary,
    ];

    /// Converts a raw value, returning `None` when it lies outside the ordered range.
    #[must_use]
    pub fn from_raw(raw: i32) -> Option<Self> {
        usize::try_from(raw)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Returns the raw ordinal of this status.
    #[must_use]
    pub fn raw(self) -> i32 {
        self as i32
    }

    /// Whether this status is one a classified face may carry.
    #[must_use]
    pub fn is_face_classification(self) -> bool {
        matches!(
            self,
            Status::Inside | Status::Outside | Status::Same | Status::Opposite
        )
    }

    /// Swaps `Inside` and `Outside`; every other status is returned unchanged.
    #[must_use]
    pub fn inverted(self) -> Self {
        match self {
            Status::Inside => Status::Outside,
            Status::Outside => Status::Inside,
            other => other,
        }
    }
}
