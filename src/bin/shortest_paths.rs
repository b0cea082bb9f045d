use std::env;
use std::error::Error;
use std::fs::File;
use std::io::{self, Write};
use std::process;

use ordered_float::OrderedFloat;

use dijkstra_sp::{DijkstraSP, EdgeWeightedDigraph};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("usage: {} <graph-file> [source-vertex]", args[0]);
        process::exit(2);
    }

    if let Err(e) = run(&args[1], args.get(2).map(String::as_str)) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(path: &str, source_arg: Option<&str>) -> Result<(), Box<dyn Error>> {
    let file = File::open(path)?;
    let graph: EdgeWeightedDigraph<OrderedFloat<f64>> = EdgeWeightedDigraph::from_reader(file)?;
    log::info!(
        "loaded digraph with {} vertices and {} edges from {}",
        graph.vertex_count(),
        graph.edge_count(),
        path
    );

    let source = match source_arg {
        Some(s) => s.parse()?,
        None => prompt_for_source()?,
    };

    let sp = DijkstraSP::new(&graph, source)?;
    if cfg!(debug_assertions) && !sp.check_optimality(&graph) {
        log::error!("optimality check failed for source {}", source);
    }

    for t in 0..graph.vertex_count() {
        if sp.has_path_to(t)? {
            print!("{} to {} ({:.2})  ", source, t, sp.dist_to(t)?);
            if let Some(path) = sp.path_to(t)? {
                for e in path {
                    print!("{}   ", e);
                }
            }
            println!();
        } else {
            println!("{} to {}         no path", source, t);
        }
    }

    Ok(())
}

fn prompt_for_source() -> Result<usize, Box<dyn Error>> {
    print!("Enter source vertex: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().parse()?)
}
