use serde::Serialize;

use crate::Distance;

use super::{City, CitySet};

/// A closed walk through the road network. The walk starts and ends at the
/// same city and visits every other city exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tour {
    cities: Vec<City>,
    distance: Distance,
}

impl Tour {
    pub fn new(cities: Vec<City>, distance: Distance) -> Self {
        assert_eq!(cities.first(), cities.last());
        debug_assert_eq!(
            cities.iter().cloned().collect::<CitySet>().len(),
            cities.len() - 1
        );
        Self { cities, distance }
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn cities(&self) -> &[City] {
        self.cities.as_slice()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn first(&self) -> &City {
        self.cities.first().unwrap()
    }

    pub fn last(&self) -> &City {
        self.cities.last().unwrap()
    }
}

impl<'a> IntoIterator for &'a Tour {
    type Item = &'a City;
    type IntoIter = std::slice::Iter<'a, City>;

    fn into_iter(self) -> Self::IntoIter {
        self.cities.iter()
    }
}

impl std::fmt::Display for Tour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}  ({} km total)",
            self.cities
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<String>>()
                .join(" -> "),
            self.distance
        )
    }
}

#[cfg(test)]
mod test_tour {
    use super::*;

    #[test]
    fn test_accessors() {
        let tour = Tour::new(
            vec!["Surabaya".into(), "Gresik".into(), "Tuban".into(), "Surabaya".into()],
            90.into(),
        );

        assert_eq!(tour.len(), 4);
        assert_eq!(tour.first(), tour.last());
        assert_eq!(tour.distance(), 90.into());
    }

    #[test]
    #[should_panic]
    fn test_open_walk_is_rejected() {
        Tour::new(vec!["Surabaya".into(), "Gresik".into()], 25.into());
    }

    #[test]
    fn test_display() {
        let tour = Tour::new(
            vec!["Surabaya".into(), "Gresik".into(), "Surabaya".into()],
            50.into(),
        );
        assert_eq!(tour.to_string(), "Surabaya -> Gresik -> Surabaya  (50 km total)");
    }
}
