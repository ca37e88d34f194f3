use std::{collections::BTreeSet, iter::FromIterator};

use serde::Serialize;

/// A city in the road network. It is identified by its unique name;
/// ordering and equality follow the name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct City(String);

impl City {
    pub fn new(name: impl Into<String>) -> Self {
        City(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for City {
    fn from(name: &str) -> Self {
        City::new(name)
    }
}

impl From<String> for City {
    fn from(name: String) -> Self {
        City::new(name)
    }
}

/// A set of cities, ordered by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CitySet(BTreeSet<City>);

impl CitySet {
    pub fn empty() -> Self {
        Self(BTreeSet::default())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, city: City) -> bool {
        self.0.insert(city)
    }

    pub fn remove(&mut self, city: &City) {
        self.0.remove(city);
    }

    pub fn contains(&self, city: &City) -> bool {
        self.0.contains(city)
    }

    pub fn to_sorted_vec(self) -> Vec<City> {
        self.0.into_iter().collect()
    }
}

impl IntoIterator for CitySet {
    type Item = City;
    type IntoIter = std::collections::btree_set::IntoIter<City>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CitySet {
    type Item = &'a City;
    type IntoIter = std::collections::btree_set::Iter<'a, City>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<City> for CitySet {
    fn from_iter<T: IntoIterator<Item = City>>(iter: T) -> Self {
        CitySet(iter.into_iter().collect())
    }
}

impl std::fmt::Display for CitySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}]",
            self.into_iter()
                .map(|c| c.to_string())
                .collect::<Vec<String>>()
                .join(",")
        )
    }
}
