//! Seam to the external rendering surface that owns the CTM.

use crate::matrix::six::Matrix6;

/// Access to a drawing surface's current transformation matrix.
///
/// The surface owns the state; this crate only reads and replaces it.
/// Both methods are assumed synchronous and non-failing: malformed input is
/// rejected by [`crate::set_matrix`] before either is reached. No locking is
/// provided; callers hold exclusive access for the duration of each call.
pub trait TransformSurface {
    /// Read the current transformation matrix.
    fn current_transform(&self) -> Matrix6;

    /// Replace the current transformation matrix.
    fn set_current_transform(&mut self, m: Matrix6);
}

/// In-memory surface holding nothing but a CTM.
///
/// Stands in for a real engine context in tests and downstream prototyping.
/// A new surface starts at the identity, matching engine context creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MemorySurface {
    ctm: Matrix6,
}

impl MemorySurface {
    /// Create a surface with the identity CTM.
    pub fn new() -> Self {
        Self {
            ctm: Matrix6::IDENTITY,
        }
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformSurface for MemorySurface {
    fn current_transform(&self) -> Matrix6 {
        self.ctm
    }

    fn set_current_transform(&mut self, m: Matrix6) {
        self.ctm = m;
    }
}
