use std::f64::consts::TAU;
use std::ops::Mul;

use crate::matrix::six::Matrix6;

/// Row-major 3×3 real matrix.
///
/// Affine maps keep the bottom row at `(0, 0, 1)`; the generator
/// constructors all produce that form, and [`Mat3::to_matrix6`] reads the
/// six affine cells back regardless of what the bottom row holds.
/// Serialized transparently as the row-major cells.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Mat3 {
    /// Matrix cells, `rows[row][col]`.
    pub rows: [[f64; 3]; 3],
}

impl Mat3 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::new([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);

    /// Build a matrix from row-major cells.
    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Rotation about the origin, counter-clockwise for positive `angle`
    /// (radians) in a right-handed coordinate system.
    pub fn rotate(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Translation by `(dx, dy)`.
    pub fn translate(dx: f64, dy: f64) -> Self {
        Self::new([[1.0, 0.0, dx], [0.0, 1.0, dy], [0.0, 0.0, 1.0]])
    }

    /// Per-axis scaling about the origin.
    pub fn scale_non_uniform(sx: f64, sy: f64) -> Self {
        Self::new([[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Rotation angle of the linear part, in `[0, 2π)`.
    ///
    /// Computed as `atan2(rows[1][0], rows[0][0])`, the convention that
    /// inverts [`Mat3::rotate`]. A degenerate linear part (both cells zero)
    /// yields `atan2(0, 0)`, which is 0 and carries no meaning.
    pub fn rotation_angle(&self) -> f64 {
        let a = self.rows[1][0].atan2(self.rows[0][0]).rem_euclid(TAU);
        // rem_euclid can round a tiny negative input up to TAU itself.
        if a >= TAU { 0.0 } else { a }
    }

    /// Per-axis scale `(sx, sy)`, the Euclidean norms of the two linear
    /// columns.
    ///
    /// Correct for rotation+scale+translation matrices. Shear is not
    /// separated out: a sheared matrix reports scale inflated by the shear
    /// component.
    pub fn scale(&self) -> (f64, f64) {
        (
            self.rows[0][0].hypot(self.rows[1][0]),
            self.rows[0][1].hypot(self.rows[1][1]),
        )
    }

    /// Translation offset `(x0, y0)`.
    pub fn translation(&self) -> (f64, f64) {
        (self.rows[0][2], self.rows[1][2])
    }

    /// The equivalent six-value form `(xx, yx, xy, yy, x0, y0)`.
    pub fn to_matrix6(self) -> Matrix6 {
        Matrix6::new(
            self.rows[0][0],
            self.rows[1][0],
            self.rows[0][1],
            self.rows[1][1],
            self.rows[0][2],
            self.rows[1][2],
        )
    }
}

impl Mul for Mat3 {
    type Output = Self;

    /// Matrix product: `(a * b)` applies `b` first, then `a`.
    fn mul(self, rhs: Self) -> Self {
        let mut out = [[0.0; 3]; 3];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.rows[r][k] * rhs.rows[k][c]).sum();
            }
        }
        Self::new(out)
    }
}
