//! Keying threshold.

use std::fmt;
use std::str::FromStr;

/// Threshold on the L1 color distance below which a pixel counts as
/// background.
///
/// The comparison is strict: a pixel whose distance equals the tolerance is
/// kept. `Tolerance(0)` therefore keys nothing out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tolerance(pub u32);

impl Tolerance {
    /// General-purpose default.
    pub const GENERIC: Tolerance = Tolerance(30);

    /// Looser threshold for lossy (JPEG) logo sources.
    pub const LOGO: Tolerance = Tolerance(50);

    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns true if `distance` falls inside the background band.
    #[inline]
    pub fn admits(self, distance: u32) -> bool {
        distance < self.0
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Tolerance {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Tolerance)
    }
}
