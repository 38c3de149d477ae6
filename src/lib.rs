//!
//! Undirected, unweighted graphs on the vertex set $\{0,\ldots,n-1\}$ with two
//! interchangeable representations:
//!
//! - [`DenseGraph`](crate::densegraph::DenseGraph) stores an adjacency matrix,
//! - [`SparseGraph`](crate::sparsegraph::SparseGraph) stores adjacency lists.
//!
//! Both implement the [`Graph`](crate::graph::Graph) and [`MutableGraph`](crate::graph::MutableGraph)
//! traits. The queries in [`algorithms`] only use these traits, so they work on either
//! representation and can compare graphs across representations:
//!
//! ```rust
//! use graphreps::graph::*;
//! use graphreps::algorithms::GraphAlgorithms;
//! use graphreps::densegraph::DenseGraph;
//! use graphreps::sparsegraph::SparseGraph;
//!
//! let vertices = [0, 1, 2, 3];
//! let mut dense = DenseGraph::from_vertices(&vertices);
//! let mut sparse = SparseGraph::from_vertices(&vertices);
//! for (u, v) in [(0, 1), (1, 2), (2, 3)] {
//!     dense.add_edge(&u, &v);
//!     sparse.add_edge(&u, &v);
//! }
//!
//! assert_eq!(dense.num_edges(), 3);
//! assert!(dense.is_connected() && sparse.is_connected());
//! assert!(dense.is_isomorphic(&sparse));
//! ```
#![allow(non_snake_case)]

pub mod algorithms;
pub mod densegraph;
pub mod error;
pub mod graph;
pub mod iterators;
pub mod labelled;
pub mod sparsegraph;
