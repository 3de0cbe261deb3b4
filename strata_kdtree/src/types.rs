// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::cmp::Ordering;
use core::fmt::Debug;

/// Numeric coordinate abstraction for points stored in a [`KdTree`](crate::KdTree).
///
/// Ordering only needs `PartialOrd`; distances are always computed in `f64`.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Convert the coordinate to `f64` for distance computations.
    fn to_f64(self) -> f64;
}

impl Scalar for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Scalar for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

impl Scalar for i32 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Scalar for i64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// The coordinate compared at a given tree level.
///
/// The root sits on level 1 and discriminates by `x`; every level below flips the axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Odd levels compare x coordinates.
    X,
    /// Even levels compare y coordinates.
    Y,
}

impl Axis {
    /// Axis used at the root.
    pub const ROOT: Self = Self::X;

    /// Axis used by the children of a node discriminating on `self`.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// Axis used at a 1-based tree level.
    #[cfg(test)]
    pub(crate) const fn at_level(level: usize) -> Self {
        if level % 2 == 1 { Self::X } else { Self::Y }
    }
}

/// Immutable 2D point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Point<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate.
    pub y: T,
}

impl<T> Point<T> {
    /// Create a point from its coordinates.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> Point<T> {
    /// The coordinate on `axis`.
    #[inline]
    pub fn coord(&self, axis: Axis) -> T {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Euclidean distance to `other`, rounded to 4 fractional digits.
    ///
    /// Rounding keeps nearest-point comparisons stable when two candidates differ only by
    /// floating-point noise.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x.to_f64() - other.x.to_f64();
        let dy = self.y.to_f64() - other.y.to_f64();
        round4(sqrt(dx * dx + dy * dy))
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned rectangle with inclusive bounds.
///
/// Callers are expected to pass `min_x <= max_x` and `min_y <= max_y`. This is not checked:
/// an inverted rectangle contains no point, so queries with it come back empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rectangle<T> {
    /// Minimum x (left)
    pub min_x: T,
    /// Minimum y (top)
    pub min_y: T,
    /// Maximum x (right)
    pub max_x: T,
    /// Maximum y (bottom)
    pub max_y: T,
}

impl<T> Rectangle<T> {
    /// Create a rectangle from its min/max corners.
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl<T: Scalar> Rectangle<T> {
    /// Whether the rectangle contains the point, bounds included.
    pub fn contains(&self, p: &Point<T>) -> bool {
        le(self.min_x, p.x) && le(p.x, self.max_x) && le(self.min_y, p.y) && le(p.y, self.max_y)
    }

    /// The `(min, max)` interval of the rectangle on `axis`.
    #[inline]
    pub fn interval(&self, axis: Axis) -> (T, T) {
        match axis {
            Axis::X => (self.min_x, self.max_x),
            Axis::Y => (self.min_y, self.max_y),
        }
    }
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Point> for Point<f64> {
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Rect> for Rectangle<f64> {
    fn from(r: kurbo::Rect) -> Self {
        Self::new(r.x0, r.y0, r.x1, r.y1)
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}

#[cfg(feature = "std")]
fn sqrt(v: f64) -> f64 {
    v.sqrt()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
fn sqrt(v: f64) -> f64 {
    libm::sqrt(v)
}

// Exact halves round to even.
#[cfg(feature = "std")]
fn round4(v: f64) -> f64 {
    (v * 10_000.0).round_ties_even() / 10_000.0
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
fn round4(v: f64) -> f64 {
    libm::rint(v * 10_000.0) / 10_000.0
}

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("strata_kdtree requires either the `std` or the `libm` feature");
