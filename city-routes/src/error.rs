use std::{error, fmt};

use crate::graph::City;

/// Failure modes of the query operations. `NoTourExists` is an expected
/// outcome of the tour search, not a defect in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    UnknownCity(City),
    NoTourExists,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownCity(city) => write!(f, "unknown city: {}", city),
            Error::NoTourExists => write!(f, "no round trip visits every city"),
        }
    }
}

impl error::Error for Error {}
