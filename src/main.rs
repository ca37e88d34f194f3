mod east_java;

use std::error::Error;

use clap::Clap;

use city_routes::{
    dijkstra::{shortest_path, shortest_paths},
    graph::{City, Connected, GraphSize},
    tsp::exact_tour,
};

#[derive(Clap)]
enum Cli {
    /// Print every road of the network once.
    Map,
    /// Print the shortest-path table from a source city.
    Table(Table),
    /// Print the shortest route between two cities.
    Route(Route),
    /// Print the shortest round trip through all cities.
    Tour(Tour),
}

#[derive(Clap)]
struct Table {
    source: String,
}

#[derive(Clap)]
struct Route {
    source: String,
    target: String,
}

#[derive(Clap)]
struct Tour {
    start: String,
}

fn set_up_logging() -> Result<(), fern::InitError> {
    std::fs::create_dir_all("logs")?;
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date}][{level}] {message}",
                date = chrono::Local::now().format("%H:%M:%S"),
                level = record.level(),
                message = message
            ));
        })
        .level(log::LevelFilter::Info)
        .chain(fern::log_file(format!(
            "logs/{}.log",
            chrono::Local::now().format("%d%m%Y-%H%M")
        ))?)
        .apply()?;

    log::info!("Logger set up!");

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    set_up_logging()?;
    let cli = Cli::parse();

    let graph = east_java::map();
    log::info!(
        "Loaded road network with {} cities and {} roads.",
        graph.n(),
        graph.m()
    );
    if !graph.connected() {
        log::warn!("Road network is not connected, some queries will find nothing.");
    }

    match cli {
        Cli::Map => {
            println!("=== Map of the road network ===");
            println!();
            print!("{}", graph);
            println!();
            println!("Note: the network is undirected, each road is listed once.");
        }
        Cli::Table(table) => {
            let paths = shortest_paths(&graph, &City::new(table.source))?;
            print!("{}", paths);
        }
        Cli::Route(route) => {
            let found = shortest_path(
                &graph,
                &City::new(route.source),
                &City::new(route.target),
            )?;
            println!("{}", found);
        }
        Cli::Tour(tour) => match exact_tour(&graph, &City::new(tour.start.clone())) {
            Ok(found) => println!("{}", found),
            Err(city_routes::Error::NoTourExists) => {
                println!("No round trip from {} visits every city.", tour.start)
            }
            Err(err) => return Err(err.into()),
        },
    }
    Ok(())
}
