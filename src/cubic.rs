//! Uniform cubic splines over a (optionally ghost-padded) point buffer.

use crate::{
    basis::{Basis, Bspline, CatmullRom},
    Point, Spline, SplineError, SplineResult,
};
use core::marker::PhantomData;
use num_traits::ToPrimitive;

/// A uniform cubic spline evaluated with basis `B`.
///
/// Every segment blends four consecutive buffer points. With ghost padding
/// the buffer is the control points plus one mirrored point at each end, so
/// the curve spans all control points and `t = i` lies at control point `i`
/// for interpolating bases.
#[derive(Clone, Debug, PartialEq)]
pub struct CubicSpline<B> {
    points: Box<[Point]>,
    basis: PhantomData<B>,
}

/// Catmull-Rom spline; passes through every control point.
pub type CatmullRomSpline = CubicSpline<CatmullRom>;

/// Uniform cubic B-spline.
///
/// With ghost padding it starts at the first and ends at the last control
/// point; interior control points are only approximated.
pub type CubicBspline = CubicSpline<Bspline>;

impl<B: Basis> CubicSpline<B> {
    /// Creates a spline from `points`.
    ///
    /// With `ghost` set, a point is synthesized at each end by mirroring the
    /// neighbouring control point: `p₀ - (p₁ - p₀)` in front and
    /// `pₙ₋₁ - (pₙ₋₂ - pₙ₋₁)` at the back. This needs at least two points.
    ///
    /// Without `ghost`, the first and last point only provide tangents and
    /// at least four points are needed.
    pub fn new(points: &[Point], ghost: bool) -> SplineResult<Self> {
        let required = if ghost { 2 } else { 4 };
        if points.len() < required {
            return Err(SplineError::NotEnoughPoints {
                kind: B::NAME,
                required,
                actual: points.len(),
            });
        }

        let mut buffer = Vec::with_capacity(points.len() + 2);
        if ghost {
            buffer.push(points[0].reflect(points[1]));
            buffer.extend_from_slice(points);

            let n = buffer.len();
            buffer.push(buffer[n - 1].reflect(buffer[n - 2]));

            log::trace!(
                "ghost points {:?} and {:?}",
                buffer[0],
                buffer[buffer.len() - 1]
            );
        } else {
            buffer.extend_from_slice(points);
        }

        log::debug!(
            "{} spline through {} points, buffer of {}",
            B::NAME,
            points.len(),
            buffer.len()
        );

        Ok(CubicSpline {
            points: buffer.into_boxed_slice(),
            basis: PhantomData,
        })
    }

    /// The evaluation buffer, ghost points included.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    fn segment_count(&self) -> usize {
        self.points.len() - 2
    }
}

impl<B: Basis> Spline for CubicSpline<B> {
    /// Buffer length minus the two tangent-only end points.
    fn len(&self) -> usize {
        self.segment_count()
    }

    fn max_t(&self) -> f64 {
        (self.segment_count() - 1) as f64
    }

    fn at(&self, t: f64) -> Point {
        let number_of_segments = self.segment_count();
        let t = num_traits::clamp(t, 0.0, self.max_t());

        let segment = t
            .floor()
            .to_usize()
            .unwrap_or(0)
            .min(number_of_segments - 2);
        let local_t = t - segment as f64;

        let cv: [Point; 4] = core::array::from_fn(|i| self.points[segment + i]);

        B::segment(local_t, &cv).rounded()
    }
}
