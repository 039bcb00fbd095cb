use crate::{SplineError, SplineResult};
use core::ops::{Add, Mul, Neg, Sub};

/// Number of decimal digits every evaluated coordinate is rounded to.
pub const DECIMALS: i32 = 5;

/// A point in 2D space.
///
/// This is the only shape data goes in and out of a spline in.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Mirrors `other` about `self`, i.e. `self - (other - self)`.
    #[inline]
    pub fn reflect(self, other: Point) -> Point {
        self + -(other - self)
    }

    /// Rounds both coordinates to [`DECIMALS`] decimal digits.
    ///
    /// Ties round away from zero.
    #[inline]
    pub fn rounded(self) -> Point {
        Point {
            x: round_coordinate(self.x),
            y: round_coordinate(self.y),
        }
    }
}

#[inline]
pub(crate) fn round_coordinate(value: f64) -> f64 {
    let scale = 10f64.powi(DECIMALS);
    (value * scale).round() / scale
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Point) -> Point {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Point) -> Point {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl Neg for Point {
    type Output = Point;

    #[inline]
    fn neg(self) -> Point {
        Point {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Accepts raw coordinate slices; anything but exactly two values is
/// rejected with [`SplineError::InvalidPointDimension`].
impl TryFrom<&[f64]> for Point {
    type Error = SplineError;

    fn try_from(coordinates: &[f64]) -> SplineResult<Self> {
        match *coordinates {
            [x, y] => Ok(Point { x, y }),
            _ => Err(SplineError::InvalidPointDimension {
                actual: coordinates.len(),
            }),
        }
    }
}
