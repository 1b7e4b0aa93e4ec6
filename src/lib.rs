//! ctm2d is a convenience/math layer over the current transformation matrix
//! (CTM) of a 2D vector-drawing surface.
//!
//! The surface itself (context creation, paths, stroking, compositing, text,
//! IO) belongs to an external rendering engine; this crate only reads,
//! replaces, and composes the engine's transformation state, and decomposes a
//! composed matrix back into rotation, scale, and translation.
//!
//! # Surface of the crate
//!
//! - [`Matrix6`]: the six-value affine form `(xx, yx, xy, yy, x0, y0)` used
//!   on the wire to the engine, interconvertible with [`kurbo::Affine`].
//! - [`Mat3`]: the conventional 3×3 form for linear-algebra composition,
//!   generator constructors ([`Mat3::rotate`], [`Mat3::translate`],
//!   [`Mat3::scale_non_uniform`]) and decomposition.
//! - [`TransformSurface`]: the seam to the external engine context, always
//!   passed explicitly, never ambient state. [`MemorySurface`] is the
//!   in-crate reference implementation.
//! - [`get_matrix`], [`set_matrix`], [`transform`]: the CTM operations, plus
//!   [`current_rotation`], [`current_scale`], [`current_translation`] for
//!   decomposing the live state.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Stateless**: every operation is a pure function except the three CTM
//!   accessors, which read/write a single external mutable cell.
//! - **Narrow degeneracy check**: [`set_matrix`] rejects only the all-zero
//!   matrix. Other singular matrices pass through deliberately.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod ctm;
mod foundation;
mod matrix;
mod surface;

pub use ctm::{
    compose, current_rotation, current_scale, current_translation, get_matrix, set_matrix,
    transform,
};
pub use foundation::error::{CtmError, CtmResult};
pub use matrix::mat3::Mat3;
pub use matrix::six::Matrix6;
pub use surface::{MemorySurface, TransformSurface};
