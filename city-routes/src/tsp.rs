use crate::{
    error::Error,
    graph::{City, Component, Graph, Tour},
    Distance,
};

/// Finds the shortest round trip that starts and ends at `start` and visits
/// every other city exactly once, using direct roads only.
///
/// The search enumerates all `(n-1)!` orderings of the remaining cities in
/// lexicographic name order, so results are reproducible and ties go to the
/// first ordering found. This is exact and exponential; it is meant for the
/// small networks this crate targets (roughly up to ten cities).
///
/// Fails with [`Error::UnknownCity`] if `start` is not registered and with
/// [`Error::NoTourExists`] if no ordering closes into a valid walk.
pub fn exact_tour<'a, G>(graph: &'a G, start: &City) -> Result<Tour, Error>
where
    G: Graph<'a>,
{
    if !graph.contains_city(start) {
        return Err(Error::UnknownCity(start.clone()));
    }

    // A city outside the start's component can never be visited, so the
    // enumeration cannot succeed.
    if graph.component_of(start).len() < graph.n() {
        return Err(Error::NoTourExists);
    }

    let mut others: Vec<City> = graph.cities().filter(|city| *city != start).cloned().collect();
    others.sort();

    log::info!(
        "Enumerating round trips from {} over {} cities.",
        start,
        graph.n()
    );

    let mut best: Option<(Vec<City>, Distance)> = None;
    loop {
        if let Some(total) = walk_distance(graph, start, &others) {
            let improved = match &best {
                Some((_, shortest)) => total < *shortest,
                None => true,
            };
            if improved {
                best = Some((others.clone(), total));
            }
        }
        if !next_permutation(&mut others) {
            break;
        }
    }

    match best {
        Some((order, total)) => {
            let mut cities = Vec::with_capacity(order.len() + 2);
            cities.push(start.clone());
            cities.extend(order);
            cities.push(start.clone());
            log::info!("Finished enumeration, best round trip is {} km.", total);
            Ok(Tour::new(cities, total))
        }
        None => Err(Error::NoTourExists),
    }
}

/// Length of the closed walk `start -> order[0] -> ... -> start`, or `None`
/// if any consecutive pair is not joined by a direct road.
fn walk_distance<'a, G>(graph: &'a G, start: &City, order: &[City]) -> Option<Distance>
where
    G: Graph<'a>,
{
    let mut total = Distance::new(0);
    let mut previous = start;
    for city in order.iter().chain(std::iter::once(start)) {
        total += graph.road_distance(previous, city)?;
        previous = city;
    }
    Some(total)
}

/// Advances `items` to the lexicographically next ordering, returning `false`
/// once the last ordering has been reached. Starting from sorted input this
/// visits every ordering exactly once.
fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    if items.len() < 2 {
        return false;
    }

    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    let mut j = items.len() - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}

#[cfg(test)]
mod test_tsp {
    use super::*;
    use crate::graph::CityGraph;

    fn complete_four() -> CityGraph {
        let mut graph = CityGraph::new();
        for name in &["Ambon", "Batu", "Cepu", "Demak"] {
            graph.add_city((*name).into());
        }
        graph.add_road("Ambon".into(), "Batu".into(), 1.into());
        graph.add_road("Ambon".into(), "Cepu".into(), 4.into());
        graph.add_road("Ambon".into(), "Demak".into(), 3.into());
        graph.add_road("Batu".into(), "Cepu".into(), 2.into());
        graph.add_road("Batu".into(), "Demak".into(), 5.into());
        graph.add_road("Cepu".into(), "Demak".into(), 1.into());
        graph
    }

    #[test]
    fn test_optimal_tour_on_complete_four() {
        let graph = complete_four();
        let tour = exact_tour(&graph, &"Ambon".into()).unwrap();

        // 1 + 2 + 1 + 3 beats all other orderings.
        assert_eq!(tour.distance(), 7.into());
        assert_eq!(
            tour.cities(),
            &[
                "Ambon".into(),
                "Batu".into(),
                "Cepu".into(),
                "Demak".into(),
                "Ambon".into()
            ]
        );
    }

    #[test]
    fn test_tour_uses_direct_roads_only() {
        //   Batu --1-- Ambon --1-- Cepu, no road closes Batu -- Cepu
        let mut graph = CityGraph::new();
        for name in &["Ambon", "Batu", "Cepu"] {
            graph.add_city((*name).into());
        }
        graph.add_road("Ambon".into(), "Batu".into(), 1.into());
        graph.add_road("Ambon".into(), "Cepu".into(), 1.into());

        assert_eq!(
            exact_tour(&graph, &"Ambon".into()).unwrap_err(),
            Error::NoTourExists
        );
    }

    #[test]
    fn test_two_cities_go_there_and_back() {
        let mut graph = CityGraph::new();
        graph.add_city("Ambon".into());
        graph.add_city("Batu".into());
        graph.add_road("Ambon".into(), "Batu".into(), 25.into());

        let tour = exact_tour(&graph, &"Ambon".into()).unwrap();
        assert_eq!(tour.distance(), 50.into());
        assert_eq!(
            tour.cities(),
            &["Ambon".into(), "Batu".into(), "Ambon".into()]
        );
    }

    #[test]
    fn test_single_city_has_no_tour() {
        let mut graph = CityGraph::new();
        graph.add_city("Ambon".into());

        assert_eq!(
            exact_tour(&graph, &"Ambon".into()).unwrap_err(),
            Error::NoTourExists
        );
    }

    #[test]
    fn test_disconnected_network_has_no_tour() {
        let mut graph = complete_four();
        graph.add_city("Ende".into());

        assert_eq!(
            exact_tour(&graph, &"Ambon".into()).unwrap_err(),
            Error::NoTourExists
        );
    }

    #[test]
    fn test_unknown_start_fails() {
        let graph = complete_four();
        assert_eq!(
            exact_tour(&graph, &"Ende".into()).unwrap_err(),
            Error::UnknownCity("Ende".into())
        );
    }

    #[test]
    fn test_next_permutation_visits_every_ordering_once() {
        let mut items = vec![1, 2, 3, 4];
        let mut seen = vec![items.clone()];
        while next_permutation(&mut items) {
            seen.push(items.clone());
        }

        assert_eq!(seen.len(), 24);
        let mut unique = seen.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 24);
        // lexicographic order, first and last are the sorted extremes
        assert_eq!(seen.first().unwrap(), &vec![1, 2, 3, 4]);
        assert_eq!(seen.last().unwrap(), &vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_next_permutation_trivial_inputs() {
        let mut empty: Vec<usize> = vec![];
        assert!(!next_permutation(&mut empty));

        let mut single = vec![7];
        assert!(!next_permutation(&mut single));
    }
}
