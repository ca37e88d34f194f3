use city_routes::{graph::CityGraph, Distance};

/// The built-in East Java road network: city names and road lengths in km.
const CITIES: [&str; 10] = [
    "Surabaya",
    "Tulungagung",
    "Malang",
    "Banyuwangi",
    "Mojokerto",
    "Gresik",
    "Ngawi",
    "Kediri",
    "Tuban",
    "Madura",
];

const ROADS: [(&str, &str, usize); 30] = [
    ("Surabaya", "Madura", 20),
    ("Surabaya", "Tuban", 30),
    ("Surabaya", "Gresik", 25),
    ("Tulungagung", "Mojokerto", 85),
    ("Tulungagung", "Kediri", 70),
    ("Malang", "Surabaya", 60),
    ("Banyuwangi", "Malang", 55),
    ("Kediri", "Ngawi", 35),
    ("Tuban", "Ngawi", 15),
    ("Madura", "Banyuwangi", 65),
    ("Malang", "Tulungagung", 95),
    ("Kediri", "Malang", 10),
    ("Gresik", "Mojokerto", 45),
    ("Ngawi", "Madura", 85),
    ("Ngawi", "Mojokerto", 60),
    ("Madura", "Malang", 80),
    ("Banyuwangi", "Tuban", 120),
    ("Banyuwangi", "Ngawi", 100),
    ("Kediri", "Madura", 50),
    ("Kediri", "Gresik", 40),
    ("Gresik", "Tulungagung", 90),
    ("Mojokerto", "Malang", 55),
    ("Tuban", "Gresik", 35),
    ("Tuban", "Mojokerto", 60),
    ("Madura", "Gresik", 75),
    ("Tulungagung", "Tuban", 80),
    ("Banyuwangi", "Mojokerto", 110),
    ("Malang", "Ngawi", 70),
    ("Kediri", "Tuban", 45),
    ("Madura", "Tulungagung", 95),
];

pub fn map() -> CityGraph {
    let mut graph = CityGraph::new();
    for name in CITIES.iter() {
        graph.add_city((*name).into());
    }
    for (city1, city2, km) in ROADS.iter() {
        graph.add_road((*city1).into(), (*city2).into(), Distance::new(*km));
    }
    graph
}

#[cfg(test)]
mod test_east_java {
    use super::*;
    use city_routes::{
        dijkstra::shortest_path,
        graph::{Connected, GraphSize},
        tsp::exact_tour,
    };

    #[test]
    fn test_map_shape() {
        let graph = map();
        assert_eq!(graph.n(), 10);
        assert_eq!(graph.m(), 30);
        assert!(graph.connected());
    }

    #[test]
    fn test_known_routes() {
        let graph = map();

        let direct = shortest_path(&graph, &"Surabaya".into(), &"Gresik".into()).unwrap();
        assert_eq!(direct.distance, 25.into());
        assert_eq!(direct.path, vec!["Surabaya".into(), "Gresik".into()]);

        // cheapest way to Kediri changes over in Gresik
        let via = shortest_path(&graph, &"Surabaya".into(), &"Kediri".into()).unwrap();
        assert_eq!(via.distance, 65.into());
        assert_eq!(
            via.path,
            vec!["Surabaya".into(), "Gresik".into(), "Kediri".into()]
        );
    }

    #[test]
    fn test_round_trip_exists() {
        let graph = map();
        let tour = exact_tour(&graph, &"Surabaya".into()).unwrap();

        assert_eq!(tour.len(), 11);
        assert_eq!(tour.first(), tour.last());
        // one valid round trip by hand comes to 440 km, the optimum can only
        // be shorter
        assert!(tour.distance() <= 440.into());
    }
}
