use serde::{Deserialize, Serialize};

use crate::cartesian::CartesianPoint2d;

/// Orientation of a triplet of points or a closed ring.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    Counterclockwise,
    /// Collinear
    Collinear,
}

impl Orientation {
    /// Determines orientation of a triplet of points.
    pub fn triplet<Num: num_traits::Num + PartialOrd>(
        p: &impl CartesianPoint2d<Num = Num>,
        q: &impl CartesianPoint2d<Num = Num>,
        r: &impl CartesianPoint2d<Num = Num>,
    ) -> Self {
        let v = (q.y() - p.y()) * (r.x() - q.x()) - (q.x() - p.x()) * (r.y() - q.y());
        if v == Num::zero() {
            Self::Collinear
        } else if v > Num::zero() {
            Self::Clockwise
        } else {
            Self::Counterclockwise
        }
    }

    /// Winding of a closed ring, determined by the shoelace sum. The ring must not duplicate its
    /// first point at the end.
    pub fn of_ring<Num, P>(points: &[P]) -> Self
    where
        Num: num_traits::Num + Copy + PartialOrd,
        P: CartesianPoint2d<Num = Num>,
    {
        if points.len() < 3 {
            return Self::Collinear;
        }

        let mut doubled_area = Num::zero();
        for i in 0..points.len() {
            let j = (i + 1) % points.len();
            doubled_area =
                doubled_area + points[i].x() * points[j].y() - points[j].x() * points[i].y();
        }

        if doubled_area == Num::zero() {
            Self::Collinear
        } else if doubled_area > Num::zero() {
            Self::Counterclockwise
        } else {
            Self::Clockwise
        }
    }
}
