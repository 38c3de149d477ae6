//!
//! Adjacency-list representation of an undirected graph. Every vertex stores the sequence
//! of its neighbours in insertion order, so space is linear in the number of vertices
//! and edges.
//!
//! Edge insertion does *not* check whether the edge already exists. Inserting the same
//! edge twice stores both incidences twice and therefore counts as two edges:
//!
//! ```rust
//! use graphreps::graph::*;
//! use graphreps::sparsegraph::SparseGraph;
//!
//! let mut graph = SparseGraph::new(2);
//! graph.add_edge(&0, &1);
//! graph.add_edge(&0, &1);
//!
//! assert_eq!(graph.num_edges(), 2);
//! assert_eq!(graph.neighbour_list(&0), &[1, 1]);
//! ```
use std::fmt;

use fxhash::FxHashMap;
use itertools::Itertools;
use log::trace;

use crate::graph::*;

/// An implementation of the [MutableGraph] trait that stores one neighbour list per vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseGraph {
    adj: FxHashMap<Vertex, Vec<Vertex>>,
}

impl SparseGraph {
    /// Returns the stored neighbour sequence of `u` in insertion order, including
    /// repeated entries.
    pub fn neighbour_list(&self, u:&Vertex) -> &[Vertex] {
        match self.adj.get(u) {
            Some(N) => N.as_slice(),
            None => panic!("Vertex {u} not contained in SparseGraph")
        }
    }

    fn neighbour_list_mut(&mut self, u:&Vertex) -> &mut Vec<Vertex> {
        match self.adj.get_mut(u) {
            Some(N) => N,
            None => panic!("Vertex {u} not contained in SparseGraph")
        }
    }

    /// Total length of all neighbour lists, i.e. twice the number of edges.
    pub fn num_incidences(&self) -> usize {
        self.adj.values().map(Vec::len).sum()
    }
}

impl Graph for SparseGraph {
    fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    fn num_edges(&self) -> usize {
        self.num_incidences() / 2
    }

    fn degree(&self, u:&Vertex) -> usize {
        self.neighbour_list(u).len()
    }

    fn neighbours<'a>(&'a self, u:&Vertex) -> Box<dyn Iterator<Item=Vertex> + 'a> {
        Box::new(self.neighbour_list(u).iter().copied())
    }
}

impl MutableGraph for SparseGraph {
    fn new(n:usize) -> SparseGraph {
        let mut adj = FxHashMap::with_capacity_and_hasher(n, Default::default());
        for v in 0..n {
            adj.insert(v as Vertex, Vec::new());
        }
        SparseGraph { adj }
    }

    fn add_edge(&mut self, u:&Vertex, v:&Vertex) {
        if !self.contains(u) || !self.contains(v) {
            panic!("Pair {u},{v} not contained in SparseGraph.");
        }
        self.neighbour_list_mut(u).push(*v);
        self.neighbour_list_mut(v).push(*u);
        trace!("sparse: appended edge {u}-{v}");
    }
}

impl fmt::Display for SparseGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for u in self.vertices() {
            writeln!(f, "{}: [{}]", u, self.neighbour_list(&u).iter().join(", "))?;
        }
        Ok(())
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
