use std::fmt::Display;

use rustc_hash::FxHashMap;

use crate::Distance;

use super::{Adjacency, Cities, City, Graph, GraphSize, Neighbors, Road, Roads};

/// Adjacency-list based store for an undirected road network. Built once by
/// a sequence of `add_city` and `add_road` calls, then only queried.
#[derive(Debug, Clone, Default)]
pub struct CityGraph {
    /// Maps each registered city to its direct neighbors with road lengths.
    adj_list: FxHashMap<City, FxHashMap<City, Distance>>,
}

impl CityGraph {
    pub fn new() -> Self {
        CityGraph {
            adj_list: FxHashMap::default(),
        }
    }

    /// Registers a city. Re-adding an already registered city is a no-op.
    pub fn add_city(&mut self, city: City) {
        self.adj_list.entry(city).or_default();
    }

    /// Records a road in both directions, overwriting any previous road
    /// between the same pair. The call is silently ignored unless both
    /// cities are registered; a road from a city to itself is never stored.
    pub fn add_road(&mut self, city1: City, city2: City, distance: Distance) {
        if city1 == city2 {
            return;
        }
        if !self.adj_list.contains_key(&city1) || !self.adj_list.contains_key(&city2) {
            return;
        }

        self.adj_list
            .get_mut(&city1)
            .unwrap()
            .insert(city2.clone(), distance);
        self.adj_list.get_mut(&city2).unwrap().insert(city1, distance);
    }

    /// Number of roads, each undirected road counted once.
    pub fn m(&self) -> usize {
        self.adj_list
            .values()
            .map(|roads| roads.len())
            .sum::<usize>()
            / 2
    }
}

/// Lists each road exactly once, sorted by endpoint pair, in the form
/// `Gresik       --  25 --> Surabaya`.
impl Display for CityGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut roads: Vec<Road> = self.roads().collect();
        roads.sort_by(|r1, r2| {
            (r1.source(), r1.sink()).cmp(&(r2.source(), r2.sink()))
        });
        for road in roads {
            writeln!(f, "{}", road)?;
        }
        Ok(())
    }
}

impl GraphSize for CityGraph {
    fn n(&self) -> usize {
        self.adj_list.len()
    }
}

pub struct AdjacencyIter<'a> {
    adj_iter: Option<std::collections::hash_map::Iter<'a, City, Distance>>,
}

impl<'a> Iterator for AdjacencyIter<'a> {
    type Item = (&'a City, Distance);

    fn next(&mut self) -> Option<Self::Item> {
        self.adj_iter
            .as_mut()
            .and_then(|roads| roads.next().map(|(city, distance)| (city, *distance)))
    }
}

impl<'a> Adjacency<'a> for CityGraph {
    type AdjacencyIter = AdjacencyIter<'a>;

    fn adjacent(&'a self, city: &City) -> Self::AdjacencyIter {
        AdjacencyIter {
            adj_iter: self.adj_list.get(city).map(|roads| roads.iter()),
        }
    }
}

pub struct NeighborIter<'a> {
    adj_iter: Option<std::collections::hash_map::Keys<'a, City, Distance>>,
}

impl<'a> Iterator for NeighborIter<'a> {
    type Item = &'a City;

    fn next(&mut self) -> Option<Self::Item> {
        self.adj_iter.as_mut().and_then(|keys| keys.next())
    }
}

impl<'a> Neighbors<'a> for CityGraph {
    type NeighborIter = NeighborIter<'a>;

    fn neighbors(&'a self, city: &City) -> Self::NeighborIter {
        NeighborIter {
            adj_iter: self.adj_list.get(city).map(|roads| roads.keys()),
        }
    }
}

impl<'a> Cities<'a> for CityGraph {
    type CityIter = std::collections::hash_map::Keys<'a, City, FxHashMap<City, Distance>>;

    fn cities(&'a self) -> Self::CityIter {
        self.adj_list.keys()
    }
}

pub struct RoadIter<'a> {
    base_iter: std::collections::hash_map::Iter<'a, City, FxHashMap<City, Distance>>,
    sink_iter: Option<(&'a City, std::collections::hash_map::Iter<'a, City, Distance>)>,
}

impl<'a> Iterator for RoadIter<'a> {
    type Item = Road;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((source, sink_iter)) = &mut self.sink_iter {
                if let Some((sink, distance)) = sink_iter.next() {
                    if *source < sink {
                        return Some(Road::new(
                            (*source).clone(),
                            sink.clone(),
                            *distance,
                        ));
                    } else {
                        continue;
                    }
                }
            }
            // sink_iter empty or not initialized
            if let Some((city, roads)) = self.base_iter.next() {
                self.sink_iter = Some((city, roads.iter()))
            } else {
                break;
            }
        }
        None
    }
}

impl<'a> Roads<'a> for CityGraph {
    type RoadIter = RoadIter<'a>;

    fn roads(&'a self) -> Self::RoadIter {
        RoadIter {
            base_iter: self.adj_list.iter(),
            sink_iter: None,
        }
    }
}

impl<'a> Graph<'a> for CityGraph {
    fn contains_city(&self, city: &City) -> bool {
        self.adj_list.contains_key(city)
    }

    fn road_distance(&self, city1: &City, city2: &City) -> Option<Distance> {
        self.adj_list
            .get(city1)
            .and_then(|roads| roads.get(city2).copied())
    }

    fn contains_road(&self, city1: &City, city2: &City) -> bool {
        self.road_distance(city1, city2).is_some()
    }
}
