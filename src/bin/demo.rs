use graphreps::algorithms::GraphAlgorithms;
use graphreps::densegraph::DenseGraph;
use graphreps::graph::*;
use graphreps::sparsegraph::SparseGraph;

fn main() {
    // Library diagnostics on stderr; RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_module("graphreps", log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();

    let vertices = [0, 1, 2, 3];
    let edges = [(0, 1), (1, 2), (2, 3)];

    let mut dense = DenseGraph::from_vertices(&vertices);
    let mut sparse = SparseGraph::from_vertices(&vertices);
    dense.add_edges(edges);
    sparse.add_edges(edges);

    println!("Dense graph representation:");
    dense.display();
    println!("Is the graph connected? {}", dense.is_connected());

    println!("\nSparse graph representation:");
    sparse.display();
    println!("Is the graph connected? {}", sparse.is_connected());

    println!("\nAre the two graphs isomorphic? {}", dense.is_isomorphic(&sparse));
}
