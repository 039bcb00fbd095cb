use crate::{Point, Spline, SplineError, SplineResult};
use lerp::Lerp;
use num_traits::ToPrimitive;

/// Piecewise-linear interpolation through the control points.
///
/// Parameter `t = i` is control point `i`; the curve is defined on
/// `[0, n - 1]` for `n` control points.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearSpline {
    points: Box<[Point]>,
}

impl LinearSpline {
    pub const NAME: &'static str = "Linear";

    /// Creates a linear spline through `points`.
    ///
    /// Needs at least two points.
    pub fn new(points: &[Point]) -> SplineResult<Self> {
        if points.len() < 2 {
            return Err(SplineError::NotEnoughPoints {
                kind: Self::NAME,
                required: 2,
                actual: points.len(),
            });
        }

        log::debug!("{} spline through {} points", Self::NAME, points.len());

        Ok(LinearSpline {
            points: points.into(),
        })
    }

    /// The control points, unchanged.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    fn segment_count(&self) -> usize {
        self.points.len() - 1
    }
}

impl Spline for LinearSpline {
    /// Returns the number of control points, not segments.
    ///
    /// This differs from the cubic schemes, whose `len()` is one more than
    /// their largest parameter. Here the largest parameter is `len() - 1`.
    fn len(&self) -> usize {
        self.points.len()
    }

    fn max_t(&self) -> f64 {
        self.segment_count() as f64
    }

    fn at(&self, t: f64) -> Point {
        let number_of_segments = self.segment_count();
        let t = num_traits::clamp(t, 0.0, self.max_t());

        // The end point belongs to the last segment.
        let segment = t
            .floor()
            .to_usize()
            .unwrap_or(0)
            .min(number_of_segments - 1);
        let local_t = t - segment as f64;

        self.points[segment]
            .lerp(self.points[segment + 1], local_t)
            .rounded()
    }
}
