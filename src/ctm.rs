//! Operations over a surface's current transformation matrix.

use crate::foundation::error::{CtmError, CtmResult};
use crate::matrix::six::Matrix6;
use crate::surface::TransformSurface;

/// Read the surface's CTM, unchanged, in wire order.
pub fn get_matrix(surface: &impl TransformSurface) -> Matrix6 {
    surface.current_transform()
}

/// Replace the surface's CTM with `m`.
///
/// Rejects the all-zero matrix. Other singular matrices (zero scale on one
/// axis, for example) pass through; callers wanting broader checks must
/// apply their own before committing.
#[tracing::instrument(level = "trace", skip(surface))]
pub fn set_matrix(surface: &mut impl TransformSurface, m: Matrix6) -> CtmResult<()> {
    if m.is_zero() {
        return Err(CtmError::invalid_matrix("degenerate matrix"));
    }
    surface.set_current_transform(m);
    Ok(())
}

/// Compose `a` onto `b` in six-value form: the result applies `b`'s existing
/// space first, then `a`'s change within it.
pub fn compose(a: Matrix6, b: Matrix6) -> Matrix6 {
    Matrix6 {
        xx: a.xx * b.xx + a.yx * b.xy,
        yx: a.xx * b.yx + a.yx * b.yy,
        xy: a.xy * b.xx + a.yy * b.xy,
        yy: a.xy * b.yx + a.yy * b.yy,
        x0: a.x0 * b.xx + a.y0 * b.xy + b.x0,
        y0: a.x0 * b.yx + a.y0 * b.yy + b.y0,
    }
}

/// Compose `a` onto the surface's CTM and commit the result.
///
/// Incremental-transform semantics: translate/scale/rotate calls issued in
/// visual order compose correctly. Commits through [`set_matrix`] and
/// inherits its degenerate-matrix rejection.
#[tracing::instrument(level = "trace", skip(surface))]
pub fn transform(surface: &mut impl TransformSurface, a: Matrix6) -> CtmResult<()> {
    let b = surface.current_transform();
    set_matrix(surface, compose(a, b))
}

/// Rotation angle of the live CTM, in `[0, 2π)`.
pub fn current_rotation(surface: &impl TransformSurface) -> f64 {
    get_matrix(surface).to_mat3().rotation_angle()
}

/// Per-axis scale `(sx, sy)` of the live CTM.
pub fn current_scale(surface: &impl TransformSurface) -> (f64, f64) {
    get_matrix(surface).to_mat3().scale()
}

/// Translation offset `(x0, y0)` of the live CTM.
pub fn current_translation(surface: &impl TransformSurface) -> (f64, f64) {
    get_matrix(surface).to_mat3().translation()
}

#[cfg(test)]
#[path = "../tests/unit/ctm.rs"]
mod tests;
