use itertools::Itertools;
use log::debug;
use union_find_rs::prelude::{DisjointSets, UnionFind};

use crate::error::GraphError;
use crate::graph::*;
use crate::iterators::*;

/// Structural queries that only rely on the [Graph] trait and therefore work the same
/// for every representation.
pub trait GraphAlgorithms {
    /// Returns whether every vertex can be reached from vertex `0`.
    ///
    /// Panics if the graph has no vertices, see [GraphAlgorithms::try_is_connected].
    fn is_connected(&self) -> bool;
    fn try_is_connected(&self) -> Result<bool, GraphError>;

    /// Compares vertex counts, edge counts and sorted degree sequences of both graphs.
    ///
    /// This is a necessary condition for the two graphs being isomorphic but not
    /// a sufficient one: a 6-cycle and two disjoint triangles are reported as isomorphic.
    fn is_isomorphic<H: Graph>(&self, other:&H) -> bool;

    /// The degrees of all vertices in ascending order.
    fn degree_sequence(&self) -> Vec<usize>;

    /// The vertex sets of all connected components, ordered by their smallest vertex.
    fn components(&self) -> Vec<VertexSet>;
}

impl<G> GraphAlgorithms for G where G: Graph {
    fn is_connected(&self) -> bool {
        match self.try_is_connected() {
            Ok(res) => res,
            Err(err) => panic!("Cannot test connectivity: {err}")
        }
    }

    fn try_is_connected(&self) -> Result<bool, GraphError> {
        if self.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let mut seen = VertexSet::default();
        let mut stack = vec![0];
        seen.insert(0);
        while let Some(u) = stack.pop() {
            for v in self.neighbours(&u) {
                if seen.insert(v) {
                    stack.push(v);
                }
            }
        }

        debug!("dfs from 0 reached {} of {} vertices", seen.len(), self.num_vertices());
        Ok(seen.len() == self.num_vertices())
    }

    fn is_isomorphic<H: Graph>(&self, other:&H) -> bool {
        if self.num_vertices() != other.num_vertices() {
            debug!("not isomorphic: {} vs {} vertices", self.num_vertices(), other.num_vertices());
            return false;
        }
        if self.num_edges() != other.num_edges() {
            debug!("not isomorphic: {} vs {} edges", self.num_edges(), other.num_edges());
            return false;
        }

        let other_seq:Vec<usize> = other.vertices().map(|v| other.degree(&v)).sorted().collect();
        let res = self.degree_sequence() == other_seq;
        debug!("degree sequences {}", if res { "match" } else { "differ" });
        res
    }

    fn degree_sequence(&self) -> Vec<usize> {
        self.vertices().map(|v| self.degree(&v)).sorted().collect()
    }

    #[allow(unused_must_use)]
    fn components(&self) -> Vec<VertexSet> {
        let mut dsets:DisjointSets<Vertex> = DisjointSets::new();

        for v in self.vertices() {
            dsets.make_set(v);
        }

        for (u,v) in self.edges() {
            // Joining two already joined elements returns an error we can ignore.
            dsets.union(&u, &v);
        }

        let mut res:Vec<VertexSet> = Vec::new();
        for comp in dsets {
            res.push(comp.iter().cloned().collect())
        }
        res.sort_by_key(|comp| comp.iter().min().cloned());
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

#[cfg(test)]
mod test {
    use super::*;
    use crate::densegraph::DenseGraph;
    use crate::sparsegraph::SparseGraph;

    #[test]
    fn connectivity() {
        let G = DenseGraph::from_edges(4, vec![(0,1),(1,2),(2,3)]);
        assert!(G.is_connected());
        let G = DenseGraph::from_edges(4, vec![(0,1),(2,3)]);
        assert!(!G.is_connected());

        let H = SparseGraph::from_edges(4, vec![(0,1),(1,2),(2,3)]);
        assert!(H.is_connected());
        let H = SparseGraph::from_edges(4, vec![(0,1),(2,3)]);
        assert!(!H.is_connected());

        // Vertex 0 itself may be the one that is cut off.
        let H = SparseGraph::from_edges(3, vec![(1,2)]);
        assert!(!H.is_connected());

        assert!(DenseGraph::new(1).is_connected());
        assert!(!SparseGraph::new(2).is_connected());
        assert!(SparseGraph::clique(6).is_connected());
        assert!(!SparseGraph::matching(3).is_connected());
    }

    #[test]
    fn connectivity_empty() {
        assert_eq!(DenseGraph::new(0).try_is_connected(), Err(GraphError::EmptyGraph));
        assert_eq!(SparseGraph::new(0).try_is_connected(), Err(GraphError::EmptyGraph));
        assert_eq!(SparseGraph::path(3).try_is_connected(), Ok(true));
    }

    #[test]
    #[should_panic]
    fn connectivity_empty_panics() {
        SparseGraph::new(0).is_connected();
    }

    #[test]
    fn isomorphism() {
        let G = DenseGraph::path(4);
        let H = SparseGraph::from_edges(4, vec![(2,0),(0,3),(3,1)]);
        assert!(G.is_isomorphic(&H));
        assert!(H.is_isomorphic(&G));

        // Different vertex counts
        assert!(!G.is_isomorphic(&SparseGraph::path(5)));
        // Different edge counts
        assert!(!G.is_isomorphic(&DenseGraph::cycle(4)));
        // Same counts, different degree sequences: path vs star
        assert!(!G.is_isomorphic(&SparseGraph::star(3)));
    }

    #[test]
    fn isomorphism_false_positive() {
        // C6 and two disjoint triangles share the degree sequence [2;6]
        let C6 = SparseGraph::cycle(6);
        let triangles = DenseGraph::from_edges(6, vec![(0,1),(1,2),(2,0),(3,4),(4,5),(5,3)]);
        assert!(C6.is_connected());
        assert!(!triangles.is_connected());
        assert!(C6.is_isomorphic(&triangles));
    }

    #[test]
    fn degree_sequence() {
        assert_eq!(DenseGraph::path(4).degree_sequence(), vec![1,1,2,2]);
        assert_eq!(SparseGraph::star(3).degree_sequence(), vec![1,1,1,3]);
        assert_eq!(SparseGraph::new(0).degree_sequence(), Vec::<usize>::new());
    }

    #[test]
    fn components() {
        let G = SparseGraph::from_edges(6, vec![(0,1),(2,3),(3,4)]);
        let comps = G.components();
        assert_eq!(comps.len(), 3);
        assert_eq!(comps[0], [0,1].iter().cloned().collect());
        assert_eq!(comps[1], [2,3,4].iter().cloned().collect());
        assert_eq!(comps[2], [5].iter().cloned().collect());

        assert_eq!(DenseGraph::matching(4).components().len(), 4);
        assert_eq!(DenseGraph::cycle(5).components().len(), 1);
        assert!(DenseGraph::new(0).components().is_empty());
    }
}
