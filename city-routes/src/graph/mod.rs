mod city;
mod city_graph;
mod index;
mod road;
mod tour;

use std::fmt::Debug;

pub use city::{City, CitySet};
pub use city_graph::CityGraph;
pub use index::CityIndex;
pub use road::Road;
pub use tour::Tour;

use crate::Distance;

pub trait Graph<'a>: Adjacency<'a> + Neighbors<'a> + Cities<'a> + GraphSize + Debug {
    fn contains_city(&self, city: &City) -> bool;

    /// Returns the length of the direct road between two cities if such exists.
    fn road_distance(&self, city1: &City, city2: &City) -> Option<Distance>;

    fn contains_road(&self, city1: &City, city2: &City) -> bool;
}

pub trait Cities<'a> {
    type CityIter: Iterator<Item = &'a City>;

    fn cities(&'a self) -> Self::CityIter;
}

pub trait Neighbors<'a> {
    type NeighborIter: Iterator<Item = &'a City>;

    fn neighbors(&'a self, city: &City) -> Self::NeighborIter;
}

pub trait Adjacency<'a> {
    type AdjacencyIter: Iterator<Item = (&'a City, Distance)>;

    fn adjacent(&'a self, city: &City) -> Self::AdjacencyIter;
}

pub trait Roads<'a> {
    type RoadIter: Iterator<Item = Road>;

    fn roads(&'a self) -> Self::RoadIter;
}

pub trait GraphSize {
    fn n(&self) -> usize;
}

pub trait StartCity<'a> {
    fn start_city(&'a self) -> Option<&'a City>;
}

impl<'a, G> StartCity<'a> for G
where
    G: Cities<'a>,
{
    fn start_city(&'a self) -> Option<&'a City> {
        self.cities().min()
    }
}

pub trait Component<'a> {
    fn component_of(&'a self, city: &City) -> CitySet;
}

impl<'a, G> Component<'a> for G
where
    G: Neighbors<'a>,
{
    fn component_of(&'a self, city: &City) -> CitySet {
        let mut component = CitySet::empty();
        let mut stack: Vec<City> = vec![city.clone()];
        while let Some(current) = stack.pop() {
            for neighbor in self.neighbors(&current) {
                if !component.contains(neighbor) {
                    stack.push(neighbor.clone());
                }
            }
            component.insert(current);
        }
        component
    }
}

pub trait Connected<'a>: Component<'a> + StartCity<'a> + GraphSize {
    fn connected(&'a self) -> bool {
        match self.start_city() {
            Some(start) => {
                let start = start.clone();
                self.component_of(&start).len() == self.n()
            }
            None => true,
        }
    }
}

impl<'a, G> Connected<'a> for G where G: Component<'a> + StartCity<'a> + GraphSize {}

#[cfg(test)]
mod test_graph {
    use super::*;

    ///   Gresik --25-- Surabaya --20-- Madura        Ngawi --15-- Tuban
    fn two_components() -> CityGraph {
        let mut graph = CityGraph::new();
        for name in &["Gresik", "Surabaya", "Madura", "Ngawi", "Tuban"] {
            graph.add_city((*name).into());
        }
        graph.add_road("Gresik".into(), "Surabaya".into(), 25.into());
        graph.add_road("Surabaya".into(), "Madura".into(), 20.into());
        graph.add_road("Ngawi".into(), "Tuban".into(), 15.into());
        graph
    }

    #[test]
    fn test_component_of() {
        let graph = two_components();

        let coast = graph.component_of(&"Surabaya".into());
        assert_eq!(coast.len(), 3);
        assert!(coast.contains(&"Gresik".into()));
        assert!(coast.contains(&"Madura".into()));
        assert!(!coast.contains(&"Ngawi".into()));

        let inland = graph.component_of(&"Tuban".into());
        assert_eq!(inland.len(), 2);
    }

    #[test]
    fn test_connected() {
        let mut graph = two_components();
        assert!(!graph.connected());

        graph.add_road("Madura".into(), "Ngawi".into(), 85.into());
        assert!(graph.connected());

        let empty = CityGraph::new();
        assert!(empty.connected());
    }

    #[test]
    fn test_start_city_is_smallest_name() {
        let graph = two_components();
        assert_eq!(graph.start_city(), Some(&"Gresik".into()));
    }
}
