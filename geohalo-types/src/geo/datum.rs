/// Reference ellipsoid used for geodetic calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    semimajor: f64,
    inv_flattening: f64,
}

impl Datum {
    /// WGS84 ellipsoid.
    pub const WGS84: Self = Datum {
        semimajor: 6_378_137.0,
        inv_flattening: 298.257223563,
    };

    /// Semimajor axis in meters.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// Inverse flattening.
    pub fn inv_flattening(&self) -> f64 {
        self.inv_flattening
    }

    /// Semiminor axis in meters, derived from the flattening.
    pub fn semiminor(&self) -> f64 {
        self.semimajor * (1.0 - 1.0 / self.inv_flattening)
    }

    /// Mean radius `(2a + b) / 3` in meters, used for great-circle calculations.
    pub fn mean_radius(&self) -> f64 {
        (2.0 * self.semimajor + self.semiminor()) / 3.0
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}
