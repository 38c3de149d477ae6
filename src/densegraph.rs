//!
//! Adjacency-matrix representation of an undirected graph. The matrix uses $O(n^2)$ space
//! regardless of the number of edges, which makes this representation a good fit for
//! dense graphs. Edge insertion and adjacency queries take $O(1)$ time, listing the
//! neighbours of a vertex takes $O(n)$ time.
//!
//! ```rust
//! use graphreps::graph::*;
//! use graphreps::densegraph::DenseGraph;
//!
//! let mut graph = DenseGraph::new(4);
//! graph.add_edge(&0, &1);
//! graph.add_edge(&1, &2);
//! graph.add_edge(&1, &2); // Inserting an edge twice has no effect
//!
//! assert_eq!(graph.num_edges(), 2);
//! assert_eq!(graph.neighbours(&1).collect::<Vec<Vertex>>(), vec![0, 2]);
//! assert_eq!(graph.to_string(), "[0, 1, 0, 0]\n[1, 0, 1, 0]\n[0, 1, 0, 0]\n[0, 0, 0, 0]\n");
//! ```
use std::fmt;

use itertools::Itertools;
use log::trace;

use crate::graph::*;

/// An implementation of the [MutableGraph] trait backed by a symmetric $n \times n$ matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseGraph {
    matrix: Vec<Vec<bool>>,
}

impl DenseGraph {
    fn row(&self, u:&Vertex) -> &[bool] {
        match self.matrix.get(*u as usize) {
            Some(row) => row,
            None => panic!("Vertex {u} not contained in DenseGraph")
        }
    }

    /// The number of present cells in the matrix, i.e. twice the number of edges
    /// (self-loops occupy a single cell).
    pub fn num_incidences(&self) -> usize {
        self.matrix.iter()
            .map(|row| row.iter().filter(|&&present| present).count())
            .sum()
    }
}

impl Graph for DenseGraph {
    fn num_vertices(&self) -> usize {
        self.matrix.len()
    }

    fn num_edges(&self) -> usize {
        self.num_incidences() / 2
    }

    fn adjacent(&self, u:&Vertex, v:&Vertex) -> bool {
        self.contains(u) && self.contains(v) && self.row(u)[*v as usize]
    }

    fn neighbours<'a>(&'a self, u:&Vertex) -> Box<dyn Iterator<Item=Vertex> + 'a> {
        Box::new(self.row(u).iter()
                    .enumerate()
                    .filter(|(_, &present)| present)
                    .map(|(v, _)| v as Vertex))
    }
}

impl MutableGraph for DenseGraph {
    fn new(n:usize) -> DenseGraph {
        DenseGraph { matrix: vec![vec![false; n]; n] }
    }

    fn add_edge(&mut self, u:&Vertex, v:&Vertex) {
        if !self.contains(u) || !self.contains(v) {
            panic!("Pair {u},{v} not contained in DenseGraph.");
        }
        let (iu, iv) = (*u as usize, *v as usize);
        self.matrix[iu][iv] = true;
        self.matrix[iv][iu] = true;
        trace!("dense: inserted edge {u}-{v}");
    }
}

impl fmt::Display for DenseGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.matrix {
            writeln!(f, "[{}]", row.iter().map(|&present| present as u8).join(", "))?;
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

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn basic_operations() {
        let mut G = DenseGraph::new(4);
        assert_eq!(G.num_vertices(), 4);
        assert_eq!(G.num_edges(), 0);

        G.add_edge(&0, &1);
        assert_eq!(G.degree(&0), 1);
        assert_eq!(G.degree(&1), 1);
        assert_eq!(G.degree(&2), 0);
        assert!(G.adjacent(&0, &1));
        assert!(G.adjacent(&1, &0));
        assert!(!G.adjacent(&0, &2));
        assert!(!G.adjacent(&0, &9));

        G.add_edge(&3, &1);
        G.add_edge(&2, &1);
        assert_eq!(G.num_edges(), 3);
        assert_eq!(G.neighbours(&1).collect::<Vec<_>>(), vec![0, 2, 3]);
    }

    #[test]
    fn idempotent_insertion() {
        let mut G = DenseGraph::new(2);
        G.add_edge(&0, &1);
        G.add_edge(&0, &1);
        G.add_edge(&1, &0);
        assert_eq!(G.num_edges(), 1);
        assert_eq!(G.num_incidences(), 2);
        assert_eq!(G.degree(&0), 1);
    }

    #[test]
    fn self_loop() {
        let mut G = DenseGraph::new(3);
        G.add_edge(&1, &1);
        assert_eq!(G.num_incidences(), 1);
        assert_eq!(G.num_edges(), 0);
        assert_eq!(G.neighbours(&1).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn display() {
        let G = DenseGraph::path(3);
        assert_eq!(format!("{G}"), "[0, 1, 0]\n[1, 0, 1]\n[0, 1, 0]\n");
        assert_eq!(DenseGraph::new(0).to_string(), "");
    }

    #[test]
    #[should_panic]
    fn neighbours_out_of_range() {
        let G = DenseGraph::new(2);
        G.neighbours(&2).count();
    }

    #[test]
    #[should_panic]
    fn add_edge_out_of_range() {
        let mut G = DenseGraph::new(2);
        G.add_edge(&0, &2);
    }
}
