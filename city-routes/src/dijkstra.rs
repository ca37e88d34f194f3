use std::{cmp::Ordering, collections::BTreeMap, fmt::Display};

use binary_heap_plus::BinaryHeap;
use compare::Compare;
use serde::Serialize;

use crate::{
    error::Error,
    graph::{City, CityIndex, Graph},
    Distance,
};

/// Orders cities by their current distance label, smallest label popped
/// first. Ties fall back to name order so selection never depends on
/// hash-map iteration order.
struct PrioComp<'a> {
    index: &'a CityIndex,
    distances: Vec<Distance>,
}

impl<'a> PrioComp<'a> {
    fn new(index: &'a CityIndex, distances: Vec<Distance>) -> Self {
        Self { index, distances }
    }
}

impl<'a> Compare<City> for PrioComp<'a> {
    fn compare(&self, l: &City, r: &City) -> Ordering {
        let li = self.index[l];
        let ri = self.index[r];
        self.distances[ri].cmp(&self.distances[li]).then(r.cmp(l))
    }
}

/// Computes shortest paths from `source` to every registered city.
///
/// Fails with [`Error::UnknownCity`] if `source` is not registered.
pub fn shortest_paths<'a, G>(graph: &'a G, source: &City) -> Result<ShortestPaths, Error>
where
    G: Graph<'a>,
{
    if !graph.contains_city(source) {
        return Err(Error::UnknownCity(source.clone()));
    }

    let cities: Vec<City> = graph.cities().cloned().collect();
    let index = CityIndex::init(&cities);

    let mut distances = vec![Distance::max(); cities.len()];
    let mut prev: Vec<Option<City>> = vec![None; cities.len()];
    distances[index[source]] = Distance::new(0);

    let mut heap = BinaryHeap::from_vec_cmp(cities, PrioComp::new(&index, distances.clone()));
    while let Some(current) = heap.pop() {
        for (neighbor, road) in graph.adjacent(&current) {
            let update = distances[index[&current]] + road;
            let label = distances.get_mut(index[neighbor]).unwrap();
            if update < *label {
                *label = update;
                prev[index[neighbor]] = Some(current.clone());
            }
        }
        heap.replace_cmp(PrioComp::new(&index, distances.clone()));
    }

    Ok(ShortestPaths {
        source: source.clone(),
        index,
        distances,
        prev,
    })
}

/// Computes the shortest route between two cities.
///
/// Fails with [`Error::UnknownCity`] if either city is not registered.
pub fn shortest_path<'a, G>(graph: &'a G, source: &City, target: &City) -> Result<Route, Error>
where
    G: Graph<'a>,
{
    if !graph.contains_city(target) {
        return Err(Error::UnknownCity(target.clone()));
    }
    let paths = shortest_paths(graph, source)?;
    Ok(paths.route_to(target).unwrap())
}

/// A single source-to-target answer: the total distance and the visited
/// cities in source-to-target order. An unreachable target carries
/// `Distance::max()` and the single-element path `[target]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub distance: Distance,
    pub path: Vec<City>,
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.distance.is_finite() {
            return write!(f, "unreachable");
        }
        write!(
            f,
            "{}  ({} km)",
            self.path
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<String>>()
                .join(" -> "),
            self.distance
        )
    }
}

/// The result of one Dijkstra run, covering every registered city.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: City,
    index: CityIndex,
    distances: Vec<Distance>,
    prev: Vec<Option<City>>,
}

impl ShortestPaths {
    pub fn source(&self) -> &City {
        &self.source
    }

    pub fn distance_to(&self, target: &City) -> Option<Distance> {
        self.index.get(target).map(|idx| self.distances[idx])
    }

    /// The path from the source to `target`, both ends included. A city that
    /// cannot be reached yields the path containing only itself; this is the
    /// sentinel for "no route", not an error.
    pub fn path_to(&self, target: &City) -> Option<Vec<City>> {
        self.index.get(target)?;

        let mut path = vec![target.clone()];
        let mut current = target;
        while *current != self.source {
            match &self.prev[self.index[current]] {
                Some(previous) => {
                    path.push(previous.clone());
                    current = previous;
                }
                None => return Some(vec![target.clone()]),
            }
        }
        path.reverse();
        Some(path)
    }

    pub fn route_to(&self, target: &City) -> Option<Route> {
        Some(Route {
            distance: self.distance_to(target)?,
            path: self.path_to(target)?,
        })
    }

    /// The full per-city mapping, ordered by city name.
    pub fn routes(&self) -> BTreeMap<City, Route> {
        self.index
            .cities()
            .iter()
            .map(|city| (city.clone(), self.route_to(city).unwrap()))
            .collect()
    }
}

/// Fixed-width diagnostic table, rows sorted by city name. Unreachable
/// cities show `∞`, and the predecessor column shows `-` whenever the path
/// has length one (the source itself and unreachable cities).
impl Display for ShortestPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "From city: {}", self.source)?;
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(50))?;
        writeln!(f, "{:<12} {:<8} {:<12} {}", "City", "Known?", "Distance(Km)", "Previous")?;
        writeln!(f, "{}", "-".repeat(50))?;

        let mut cities = self.index.cities().to_vec();
        cities.sort();
        for city in &cities {
            let idx = self.index[city];
            let distance = self.distances[idx];
            let known = if distance.is_finite() { "Y" } else { "N" };
            let previous = match &self.prev[idx] {
                Some(previous) => previous.name(),
                None => "-",
            };
            writeln!(f, "{:<12} {:<8} {:<12} {}", city, known, distance, previous)?;
        }
        writeln!(f, "{}", "-".repeat(50))
    }
}
