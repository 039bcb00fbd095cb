//! The capability contract shared by every spline scheme.
//!
//! This module provides the [`Spline`] trait and [`SplineRange`], the lazy
//! sampler every scheme gets for free.

use crate::Point;
use core::iter::FusedIterator;
use num_traits::ToPrimitive;

/// A curve that can be evaluated at any real parameter.
///
/// Implementations hold an immutable point buffer built once at construction,
/// so every method is a pure function of `self` and the arguments. That also
/// makes a constructed spline safe to share between threads.
#[allow(clippy::len_without_is_empty)]
pub trait Spline {
    /// Number of addressable segments, used to bound meaningful parameter
    /// ranges.
    ///
    /// What is counted differs per scheme; see the implementors.
    fn len(&self) -> usize;

    /// The largest meaningful parameter. [`at()`](Spline::at) clamps into
    /// `[0, max_t()]`.
    fn max_t(&self) -> f64;

    /// Evaluates the curve at parameter `t`.
    ///
    /// `t` is clamped to `[0, max_t()]`. Both coordinates of the result are
    /// rounded to [`DECIMALS`](crate::DECIMALS) decimal digits.
    fn at(&self, t: f64) -> Point;

    /// Samples the curve from `min(from, to)` to `max(from, to)` in
    /// increments of `step`.
    ///
    /// The sequence holds `⌊(max - min) / step⌋ + 1` points; sample `i` is
    /// taken at `min + i × step`. The bounds are normalized, so swapping
    /// `from` and `to` yields the same sequence.
    ///
    /// `step` must be positive. A non-positive or `NaN` step yields an
    /// empty sequence.
    fn range(&self, from: f64, to: f64, step: f64) -> SplineRange<'_, Self> {
        SplineRange::new(self, from, to, step)
    }
}

/// Lazy, restartable sampling of a [`Spline`]. See [`Spline::range()`].
///
/// Clones iterate independently, so cloning a fresh range replays it.
pub struct SplineRange<'a, S: ?Sized> {
    spline: &'a S,
    start: f64,
    step: f64,
    front: usize,
    back: usize,
}

impl<'a, S: Spline + ?Sized> SplineRange<'a, S> {
    pub(crate) fn new(spline: &'a S, from: f64, to: f64, step: f64) -> Self {
        let (start, end) = if from > to { (to, from) } else { (from, to) };

        SplineRange {
            spline,
            start,
            step,
            front: 0,
            back: sample_count(start, end, step),
        }
    }

    #[inline]
    fn sample(&self, index: usize) -> Point {
        self.spline.at(self.start + index as f64 * self.step)
    }
}

fn sample_count(start: f64, end: f64, step: f64) -> usize {
    // Also catches a NaN step.
    if !(step > 0.0) {
        log::warn!("range step must be positive, got {step}; nothing sampled");
        return 0;
    }

    match ((end - start) / step)
        .floor()
        .to_usize()
        .and_then(|n| n.checked_add(1))
    {
        Some(count) => count,
        None => {
            log::warn!(
                "cannot sample [{start}, {end}] with step {step}; \
                 nothing sampled"
            );
            0
        }
    }
}

impl<S: ?Sized> Clone for SplineRange<'_, S> {
    fn clone(&self) -> Self {
        SplineRange {
            spline: self.spline,
            start: self.start,
            step: self.step,
            front: self.front,
            back: self.back,
        }
    }
}

impl<S: Spline + ?Sized> Iterator for SplineRange<'_, S> {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.front < self.back {
            let point = self.sample(self.front);
            self.front += 1;
            Some(point)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Point> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<S: Spline + ?Sized> DoubleEndedIterator for SplineRange<'_, S> {
    #[inline]
    fn next_back(&mut self) -> Option<Point> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.sample(self.back))
        } else {
            None
        }
    }
}

impl<S: Spline + ?Sized> ExactSizeIterator for SplineRange<'_, S> {}

impl<S: Spline + ?Sized> FusedIterator for SplineRange<'_, S> {}
