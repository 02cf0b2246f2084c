use nalgebra::Point2;
use num_traits::Num;
use serde::{Deserialize, Serialize};

use crate::cartesian::CartesianPoint2d;

/// Axis-aligned bounding rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<N = f64> {
    /// Left edge.
    pub x_min: N,
    /// Bottom edge.
    pub y_min: N,
    /// Right edge.
    pub x_max: N,
    /// Top edge.
    pub y_max: N,
}

impl<N: Num + Copy + PartialOrd> Rect<N> {
    /// Creates a new rectangle.
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> N {
        self.x_max - self.x_min
    }

    /// Height of the rectangle.
    pub fn height(&self) -> N {
        self.y_max - self.y_min
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Point2<N>
    where
        N: nalgebra::Scalar,
    {
        let two = N::one() + N::one();
        Point2::new(
            (self.x_min + self.x_max) / two,
            (self.y_min + self.y_max) / two,
        )
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: if self.x_min < other.x_min {
                self.x_min
            } else {
                other.x_min
            },
            y_min: if self.y_min < other.y_min {
                self.y_min
            } else {
                other.y_min
            },
            x_max: if self.x_max > other.x_max {
                self.x_max
            } else {
                other.x_max
            },
            y_max: if self.y_max > other.y_max {
                self.y_max
            } else {
                other.y_max
            },
        }
    }

    /// Bounding rectangle of a set of points. Returns `None` for an empty iterator.
    pub fn from_points<'a, P: CartesianPoint2d<Num = N> + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = points.next()?;
        let mut rect = Self::new(first.x(), first.y(), first.x(), first.y());

        for p in points {
            if rect.x_min > p.x() {
                rect.x_min = p.x();
            }
            if rect.y_min > p.y() {
                rect.y_min = p.y();
            }
            if rect.x_max < p.x() {
                rect.x_max = p.x();
            }
            if rect.y_max < p.y() {
                rect.y_max = p.y();
            }
        }

        Some(rect)
    }
}
