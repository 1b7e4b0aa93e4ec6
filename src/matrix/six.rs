use crate::foundation::error::{CtmError, CtmResult};
use crate::matrix::mat3::Mat3;

/// Six-value 2D affine matrix `(xx, yx, xy, yy, x0, y0)`.
///
/// Maps a point as `x' = xx*x + xy*y + x0`, `y' = yx*x + yy*y + y0`. This is
/// the form exchanged with the rendering surface; the coefficient order is
/// the same one [`kurbo::Affine::as_coeffs`] uses, so conversions in either
/// direction are a pure relabeling. Serialized as the plain array of six
/// values in wire order.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(into = "[f64; 6]", from = "[f64; 6]")]
pub struct Matrix6 {
    /// Linear part, x contribution to x'.
    pub xx: f64,
    /// Linear part, x contribution to y'.
    pub yx: f64,
    /// Linear part, y contribution to x'.
    pub xy: f64,
    /// Linear part, y contribution to y'.
    pub yy: f64,
    /// Translation, x.
    pub x0: f64,
    /// Translation, y.
    pub y0: f64,
}

impl Matrix6 {
    /// The identity transform, the initial CTM of a fresh surface.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// Build a matrix from its six values in wire order.
    pub const fn new(xx: f64, yx: f64, xy: f64, yy: f64, x0: f64, y0: f64) -> Self {
        Self {
            xx,
            yx,
            xy,
            yy,
            x0,
            y0,
        }
    }

    /// Build a matrix from a sequence of numbers.
    ///
    /// The first six values are taken in wire order; anything beyond the
    /// sixth is ignored. Fewer than six values is an error.
    pub fn from_slice(values: &[f64]) -> CtmResult<Self> {
        if values.len() < 6 {
            return Err(CtmError::invalid_matrix(format!(
                "need at least 6 values, got {}",
                values.len()
            )));
        }
        Ok(Self::new(
            values[0], values[1], values[2], values[3], values[4], values[5],
        ))
    }

    /// The six values in wire order.
    pub fn to_array(self) -> [f64; 6] {
        [self.xx, self.yx, self.xy, self.yy, self.x0, self.y0]
    }

    /// Whether all six values are zero.
    ///
    /// This is the degenerate form [`crate::set_matrix`] rejects. Singular
    /// matrices with any nonzero entry are not covered.
    pub fn is_zero(self) -> bool {
        self.to_array() == [0.0; 6]
    }

    /// The equivalent 3×3 form.
    ///
    /// ```text
    /// | xx  xy  x0 |
    /// | yx  yy  y0 |
    /// | 0   0   1  |
    /// ```
    pub fn to_mat3(self) -> Mat3 {
        Mat3::new([
            [self.xx, self.xy, self.x0],
            [self.yx, self.yy, self.y0],
            [0.0, 0.0, 1.0],
        ])
    }
}

impl From<[f64; 6]> for Matrix6 {
    fn from(v: [f64; 6]) -> Self {
        Self::new(v[0], v[1], v[2], v[3], v[4], v[5])
    }
}

impl From<Matrix6> for [f64; 6] {
    fn from(m: Matrix6) -> Self {
        m.to_array()
    }
}

impl From<kurbo::Affine> for Matrix6 {
    fn from(affine: kurbo::Affine) -> Self {
        let [xx, yx, xy, yy, x0, y0] = affine.as_coeffs();
        Self::new(xx, yx, xy, yy, x0, y0)
    }
}

impl From<Matrix6> for kurbo::Affine {
    fn from(m: Matrix6) -> Self {
        kurbo::Affine::new(m.to_array())
    }
}
