use fxhash::{FxHashMap, FxHashSet};

use std::fmt;
use std::ops::Range;

use crate::error::GraphError;

pub type Vertex = u32;
pub type Edge = (Vertex, Vertex);
pub type VertexSet = FxHashSet<Vertex>;
pub type VertexMap<T> = FxHashMap<Vertex, T>;

/// Read-only access to an undirected graph whose vertices are the indices `0..n`.
///
/// Implementors only supply the vertex count, the edge count and the neighbourhood
/// of a vertex. Everything else, including the algorithms in
/// [`GraphAlgorithms`](crate::algorithms::GraphAlgorithms), is derived from these three.
pub trait Graph: fmt::Display {
    fn num_vertices(&self) -> usize;

    /// Number of undirected edges, i.e. the number of stored incidences divided by two.
    fn num_edges(&self) -> usize;

    /// Returns the neighbours of `u`. The order is representation-defined.
    ///
    /// Panics if `u` is not a vertex of the graph, see [`Graph::try_neighbours`]
    /// for a checked version.
    fn neighbours<'a>(&'a self, u:&Vertex) -> Box<dyn Iterator<Item=Vertex> + 'a>;

    fn len(&self) -> usize {
        self.num_vertices()
    }

    fn is_empty(&self) -> bool {
        self.num_vertices() == 0
    }

    fn vertices(&self) -> Range<Vertex> {
        0..(self.num_vertices() as Vertex)
    }

    fn contains(&self, u:&Vertex) -> bool {
        (*u as usize) < self.num_vertices()
    }

    fn adjacent(&self, u:&Vertex, v:&Vertex) -> bool {
        self.contains(u) && self.neighbours(u).any(|x| x == *v)
    }

    fn degree(&self, u:&Vertex) -> usize {
        self.neighbours(u).count()
    }

    fn try_neighbours<'a>(&'a self, u:&Vertex) -> Result<Box<dyn Iterator<Item=Vertex> + 'a>, GraphError> {
        self.check_vertex(u)?;
        Ok(self.neighbours(u))
    }

    fn check_vertex(&self, u:&Vertex) -> Result<(), GraphError> {
        if self.contains(u) {
            Ok(())
        } else {
            Err(GraphError::out_of_range(*u, self.num_vertices()))
        }
    }

    /// Prints the representation of the graph to stdout.
    fn display(&self) {
        println!("{}", self);
    }
}

/// Graphs over a fixed vertex set that can only grow by inserting edges.
pub trait MutableGraph: Graph + Sized {
    /// Creates a graph on the vertices `0..n` without any edges.
    fn new(n:usize) -> Self;

    /// Inserts the undirected edge `uv`. Panics if either endpoint is not a vertex
    /// of the graph.
    fn add_edge(&mut self, u:&Vertex, v:&Vertex);

    /// Creates an edgeless graph with one vertex per entry of `vertices`. Only the length
    /// of the sequence matters, vertex `i` is the `i`-th entry.
    fn from_vertices(vertices:&[Vertex]) -> Self {
        Self::new(vertices.len())
    }

    fn from_edges<I>(n:usize, edges:I) -> Self where I: IntoIterator<Item=Edge> {
        let mut res = Self::new(n);
        res.add_edges(edges);
        res
    }

    fn try_add_edge(&mut self, u:&Vertex, v:&Vertex) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.add_edge(u, v);
        Ok(())
    }

    fn add_edges<I>(&mut self, edges:I) where I: IntoIterator<Item=Edge> {
        for (u,v) in edges {
            self.add_edge(&u, &v);
        }
    }

    /// Generates a path on `n` vertices.
    fn path(n:u32) -> Self {
        let mut res = Self::new(n as usize);
        for u in 0..n.saturating_sub(1) {
            res.add_edge(&u, &(u+1));
        }
        res
    }

    /// Generates a cycle on `n` vertices. For `n < 3` this is a path.
    fn cycle(n:u32) -> Self {
        let mut res = Self::path(n);
        if n >= 3 {
            res.add_edge(&(n-1), &0);
        }
        res
    }

    /// Generates a complete graph (clique) on `n` vertices.
    fn clique(n:u32) -> Self {
        let mut res = Self::new(n as usize);
        for u in 0..n {
            for v in (u+1)..n {
                res.add_edge(&u, &v);
            }
        }
        res
    }

    /// Generates a star with `n` leaves, so `n+1` vertices total. Vertex `0` is the center.
    fn star(n:u32) -> Self {
        let mut res = Self::new(n as usize + 1);
        for v in 1..=n {
            res.add_edge(&0, &v);
        }
        res
    }

    /// Generates a matching on `2n` vertices.
    fn matching(n:u32) -> Self {
        let mut res = Self::new(2 * n as usize);
        for u in 0..n {
            res.add_edge(&u, &(u+n));
        }
        res
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
