use std::{
    fmt,
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::Serialize;

/// The length of a road in kilometers. `Distance::max()` marks a city that
/// cannot be reached at all; addition saturates there instead of wrapping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Distance(usize);

impl Distance {
    pub fn new(km: usize) -> Self {
        Distance(km)
    }

    pub fn max() -> Self {
        Distance(usize::MAX)
    }

    pub fn is_finite(&self) -> bool {
        self.0 != usize::MAX
    }
}

impl Add for Distance {
    type Output = Self;
    fn add(self, rhs: Distance) -> Self::Output {
        Distance(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Distance {
    fn add_assign(&mut self, rhs: Distance) {
        *self = *self + rhs;
    }
}

impl Sum<Distance> for Distance {
    fn sum<I: Iterator<Item = Distance>>(iter: I) -> Self {
        iter.fold(Distance::new(0), |a, b| a + b)
    }
}

impl<'a> Sum<&'a Distance> for Distance {
    fn sum<I: Iterator<Item = &'a Distance>>(iter: I) -> Self {
        iter.fold(Distance::new(0), |a, b| a + *b)
    }
}

impl Display for Distance {
    // `pad` keeps width and alignment flags working for callers that build
    // fixed-width tables.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_finite() {
            f.pad(&self.0.to_string())
        } else {
            f.pad("∞")
        }
    }
}

impl From<usize> for Distance {
    fn from(km: usize) -> Self {
        Distance::new(km)
    }
}
