use serde::Serialize;

use crate::Distance;

use super::City;

/// An undirected road between two cities.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Road {
    source: City,
    sink: City,
    distance: Distance,
}

impl Road {
    pub fn new(source: City, sink: City, distance: Distance) -> Self {
        Road {
            source,
            sink,
            distance,
        }
    }

    pub fn source(&self) -> &City {
        &self.source
    }

    pub fn sink(&self) -> &City {
        &self.sink
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn reversed(&self) -> Road {
        Road::new(self.sink.clone(), self.source.clone(), self.distance)
    }
}

/// One road per line, the endpoint with the smaller name first.
impl std::fmt::Display for Road {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (a, b) = if self.source <= self.sink {
            (&self.source, &self.sink)
        } else {
            (&self.sink, &self.source)
        };
        write!(f, "{:<12} -- {:>3} --> {}", a, self.distance, b)
    }
}
