//! Evaluation of parametric 2D curves through a sequence of control points.
//!
//! Three schemes are available, selected by [`SplineKind`]:
//!
//! * [`Linear`](SplineKind::Linear) – piecewise-linear interpolation.
//! * [`CatmullRom`](SplineKind::CatmullRom) – cubic interpolation that
//!   passes through every control point.
//! * [`Bspline`](SplineKind::Bspline) – uniform cubic B-spline that starts
//!   and ends at the outer control points and smooths out the rest.
//!
//! The cubic schemes mirror the first and last segment to synthesize a
//! *ghost point* at each end, which gives the curve a tangent at its true
//! end points.
//!
//! All evaluators implement [`Spline`]. Evaluation never fails: parameters
//! outside the domain are clamped, and every coordinate is rounded to
//! [`DECIMALS`] decimal digits.
//!
//! # Examples
//! ```
//! use planar_splines::{new_spline, Point, Spline, SplineKind};
//!
//! let points = [
//!     Point::new(0.0, 2.5),
//!     Point::new(2.0, 4.0),
//!     Point::new(3.0, 2.0),
//!     Point::new(4.0, 1.5),
//! ];
//!
//! let curve = new_spline(SplineKind::CatmullRom, &points).unwrap();
//!
//! assert_eq!(curve.at(1.0), Point::new(2.0, 4.0));
//! assert_eq!(curve.range(0.0, 3.0, 0.5).count(), 7);
//! ```
//!
//! # Cargo features
#![doc = document_features::document_features!()]

#[macro_use]
mod basis_macros;
pub mod basis;
mod cubic;
mod error;
mod linear;
mod point;
mod spline_trait;

pub use cubic::{CatmullRomSpline, CubicBspline, CubicSpline};
pub use error::{SplineError, SplineResult};
pub use linear::LinearSpline;
pub use point::{Point, DECIMALS};
pub use spline_trait::{Spline, SplineRange};

use basis::Basis;

pub mod prelude {
    pub use crate::{
        new_spline, new_spline_from_tag, Curve, Point, Spline, SplineError,
        SplineKind,
    };
}

/// Selects the interpolation scheme.
///
/// The discriminants are stable and may be persisted. With the `serde`
/// feature a kind is (de)serialized as its discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "i64", try_from = "i64"))]
pub enum SplineKind {
    Linear = 0,
    CatmullRom = 1,
    Bspline = 2,
}

impl SplineKind {
    pub fn name(self) -> &'static str {
        match self {
            SplineKind::Linear => LinearSpline::NAME,
            SplineKind::CatmullRom => basis::CatmullRom::NAME,
            SplineKind::Bspline => basis::Bspline::NAME,
        }
    }
}

impl TryFrom<i64> for SplineKind {
    type Error = SplineError;

    fn try_from(tag: i64) -> SplineResult<Self> {
        match tag {
            0 => Ok(SplineKind::Linear),
            1 => Ok(SplineKind::CatmullRom),
            2 => Ok(SplineKind::Bspline),
            _ => Err(SplineError::UnknownSplineType(tag)),
        }
    }
}

impl From<SplineKind> for i64 {
    fn from(kind: SplineKind) -> Self {
        kind as i64
    }
}

/// A spline of any [`SplineKind`], as returned by [`new_spline()`].
#[derive(Clone, Debug, PartialEq)]
pub enum Curve {
    Linear(LinearSpline),
    CatmullRom(CatmullRomSpline),
    Bspline(CubicBspline),
}

impl Curve {
    pub fn kind(&self) -> SplineKind {
        match self {
            Curve::Linear(_) => SplineKind::Linear,
            Curve::CatmullRom(_) => SplineKind::CatmullRom,
            Curve::Bspline(_) => SplineKind::Bspline,
        }
    }

    /// The evaluation buffer. For the cubic kinds this includes the ghost
    /// points.
    pub fn points(&self) -> &[Point] {
        match self {
            Curve::Linear(s) => s.points(),
            Curve::CatmullRom(s) => s.points(),
            Curve::Bspline(s) => s.points(),
        }
    }
}

impl Spline for Curve {
    fn len(&self) -> usize {
        match self {
            Curve::Linear(s) => s.len(),
            Curve::CatmullRom(s) => s.len(),
            Curve::Bspline(s) => s.len(),
        }
    }

    fn max_t(&self) -> f64 {
        match self {
            Curve::Linear(s) => s.max_t(),
            Curve::CatmullRom(s) => s.max_t(),
            Curve::Bspline(s) => s.max_t(),
        }
    }

    #[inline]
    fn at(&self, t: f64) -> Point {
        match self {
            Curve::Linear(s) => s.at(t),
            Curve::CatmullRom(s) => s.at(t),
            Curve::Bspline(s) => s.at(t),
        }
    }
}

/// Creates a spline of the given `kind` through `points`.
///
/// At least two points are required for every kind. The cubic kinds are
/// always built with ghost points.
///
/// # Errors
/// [`SplineError::NotEnoughPoints`] if fewer than two points are given.
pub fn new_spline(kind: SplineKind, points: &[Point]) -> SplineResult<Curve> {
    if points.len() < 2 {
        return Err(SplineError::NotEnoughPoints {
            kind: kind.name(),
            required: 2,
            actual: points.len(),
        });
    }

    Ok(match kind {
        SplineKind::Linear => Curve::Linear(LinearSpline::new(points)?),
        SplineKind::CatmullRom => {
            Curve::CatmullRom(CatmullRomSpline::new(points, true)?)
        }
        SplineKind::Bspline => {
            Curve::Bspline(CubicBspline::new(points, true)?)
        }
    })
}

/// Like [`new_spline()`] but takes the kind as its integer tag.
///
/// # Errors
/// [`SplineError::UnknownSplineType`] if `tag` is not a [`SplineKind`]
/// discriminant, otherwise as [`new_spline()`].
pub fn new_spline_from_tag(
    tag: i64,
    points: &[Point],
) -> SplineResult<Curve> {
    new_spline(SplineKind::try_from(tag)?, points)
}
