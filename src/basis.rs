use crate::Point;

/// A uniform cubic spline basis.
///
/// Row `k` of [`MATRIX`](Basis::MATRIX) holds the weights of the four
/// control points for the `tᵏ` term of a segment, so a segment evaluates as
/// `[1, t, t², t³] × MATRIX × [p₀, p₁, p₂, p₃]ᵀ`.
pub trait Basis {
    const NAME: &'static str;
    const MATRIX: [[f64; 4]; 4];

    /// Evaluates one cubic segment spanned by `cv` at local parameter `x`.
    ///
    /// `x` is expected in `[0, 1]` but is not clamped here.
    #[inline]
    fn segment(x: f64, cv: &[Point; 4]) -> Point {
        let m = Self::MATRIX;
        let [w0, w1, w2, w3] = [0, 1, 2, 3].map(|k| {
            cv[0] * m[k][0]
                + cv[1] * m[k][1]
                + cv[2] * m[k][2]
                + cv[3] * m[k][3]
        });

        // Horner's method.
        w0 + (w1 + (w2 + w3 * x) * x) * x
    }
}

/// A *Catmull-Rom* spline basis.
///
/// Interpolates `p₁` at `t = 0` and `p₂` at `t = 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatmullRom;

cubic_basis!(
    CatmullRom, "Catmull-Rom", scale = 0.5,
    [
        [0.0, 2.0, 0.0, 0.0],
        [-1.0, 0.0, 1.0, 0.0],
        [2.0, -5.0, 4.0, -1.0],
        [-1.0, 3.0, -3.0, 1.0],
    ]
);

/// A uniform cubic *B-spline* basis.
///
/// Approximates its control points; the curve is C² continuous.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bspline;

cubic_basis!(
    Bspline, "B-spline", scale = 1.0 / 6.0,
    [
        [1.0, 4.0, 1.0, 0.0],
        [-3.0, 0.0, 3.0, 0.0],
        [3.0, -6.0, 3.0, 0.0],
        [-1.0, 3.0, -3.0, 1.0],
    ]
);
