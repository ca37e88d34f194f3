use std::ops::Index;

use rustc_hash::FxHashMap;

use super::City;

/// Assigns each city a dense position so the algorithms can keep their
/// bookkeeping in plain slices instead of maps.
#[derive(Debug, Clone)]
pub struct CityIndex {
    positions: FxHashMap<City, usize>,
    cities: Vec<City>,
}

impl CityIndex {
    pub fn init(cities: &[City]) -> Self {
        let positions = cities
            .iter()
            .enumerate()
            .map(|(i, city)| (city.clone(), i))
            .collect();

        Self {
            positions,
            cities: cities.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn get(&self, city: &City) -> Option<usize> {
        self.positions.get(city).copied()
    }

    pub fn cities(&self) -> &[City] {
        self.cities.as_slice()
    }
}

impl Index<&City> for CityIndex {
    type Output = usize;

    fn index(&self, city: &City) -> &Self::Output {
        &self.positions[city]
    }
}

#[cfg(test)]
mod test_index {
    use super::*;

    #[test]
    fn test_positions() {
        let cities: Vec<City> = vec!["Tuban".into(), "Gresik".into(), "Madura".into()];
        let index = CityIndex::init(&cities);

        assert_eq!(index.len(), 3);
        assert_eq!(index[&"Tuban".into()], 0);
        assert_eq!(index[&"Gresik".into()], 1);
        assert_eq!(index.get(&"Madura".into()), Some(2));
        assert_eq!(index.get(&"Kediri".into()), None);
    }
}
