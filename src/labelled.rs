//!
//! Graphs whose vertices carry arbitrary labels. A [LabelledGraph] maps every label to the
//! vertex index it was assigned at construction time and otherwise defers to the wrapped
//! index-based graph, so all algorithms keep operating on indices.
//!
//! ```rust
//! use graphreps::graph::*;
//! use graphreps::algorithms::GraphAlgorithms;
//! use graphreps::labelled::LabelledGraph;
//! use graphreps::sparsegraph::SparseGraph;
//!
//! let mut graph:LabelledGraph<SparseGraph, &str> = LabelledGraph::new(["a", "b", "c"]).unwrap();
//! graph.add_edge(&"a", &"b").unwrap();
//! graph.add_edge(&"b", &"c").unwrap();
//!
//! assert!(graph.graph().is_connected());
//! assert_eq!(graph.neighbours(&"b").unwrap(), vec![&"a", &"c"]);
//! assert!(graph.add_edge(&"a", &"z").is_err());
//! ```
use std::fmt::Debug;
use std::hash::Hash;

use fxhash::FxHashMap;

use crate::error::GraphError;
use crate::graph::*;

#[derive(Debug, Clone)]
pub struct LabelledGraph<G, L> where G: MutableGraph, L: Hash + Eq + Clone + Debug {
    graph: G,
    labels: Vec<L>,
    index: FxHashMap<L, Vertex>,
}

impl<G, L> LabelledGraph<G, L> where G: MutableGraph, L: Hash + Eq + Clone + Debug {
    /// Creates an edgeless graph with one vertex per label. The `i`-th label becomes vertex `i`.
    pub fn new<I>(labels:I) -> Result<Self, GraphError> where I: IntoIterator<Item=L> {
        let labels:Vec<L> = labels.into_iter().collect();
        let mut index = FxHashMap::with_capacity_and_hasher(labels.len(), Default::default());
        for (i, l) in labels.iter().enumerate() {
            if index.insert(l.clone(), i as Vertex).is_some() {
                return Err(GraphError::duplicate_label(format!("{l:?}")));
            }
        }

        let graph = G::new(labels.len());
        Ok(LabelledGraph { graph, labels, index })
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn into_inner(self) -> G {
        self.graph
    }

    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    pub fn index_of(&self, label:&L) -> Result<Vertex, GraphError> {
        self.index.get(label)
            .copied()
            .ok_or_else(|| GraphError::unknown_label(format!("{label:?}")))
    }

    pub fn label_of(&self, v:&Vertex) -> Option<&L> {
        self.labels.get(*v as usize)
    }

    pub fn add_edge(&mut self, a:&L, b:&L) -> Result<(), GraphError> {
        let u = self.index_of(a)?;
        let v = self.index_of(b)?;
        self.graph.add_edge(&u, &v);
        Ok(())
    }

    /// Labels of the neighbours of `label`, in the order of the wrapped representation.
    pub fn neighbours(&self, label:&L) -> Result<Vec<&L>, GraphError> {
        let u = self.index_of(label)?;
        Ok(self.graph.neighbours(&u)
            .map(|v| &self.labels[v as usize])
            .collect())
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
    use crate::algorithms::GraphAlgorithms;
    use crate::densegraph::DenseGraph;
    use crate::sparsegraph::SparseGraph;

    #[test]
    fn labels() {
        let G:LabelledGraph<DenseGraph, String> =
            LabelledGraph::new(["x", "y", "z"].iter().map(|s| s.to_string())).unwrap();
        assert_eq!(G.index_of(&"y".to_string()), Ok(1));
        assert_eq!(G.label_of(&2), Some(&"z".to_string()));
        assert_eq!(G.label_of(&3), None);
        assert_eq!(G.labels().len(), 3);
        assert!(G.index_of(&"w".to_string()).is_err());
    }

    #[test]
    fn duplicate_labels() {
        let res:Result<LabelledGraph<SparseGraph, u64>, _> = LabelledGraph::new(vec![10, 20, 10]);
        assert_eq!(res.err(), Some(GraphError::duplicate_label("10")));
    }

    #[test]
    fn edges_by_label() {
        let mut G:LabelledGraph<SparseGraph, char> = LabelledGraph::new("abcd".chars()).unwrap();
        G.add_edge(&'a', &'d').unwrap();
        G.add_edge(&'d', &'c').unwrap();
        assert_eq!(G.neighbours(&'d').unwrap(), vec![&'a', &'c']);
        assert_eq!(G.graph().num_edges(), 2);
        assert!(!G.graph().is_connected());

        G.add_edge(&'b', &'c').unwrap();
        assert!(G.graph().is_connected());
        assert_eq!(G.add_edge(&'a', &'q'), Err(GraphError::unknown_label("'q'")));

        let H = G.into_inner();
        assert!(H.adjacent(&0, &3));
    }
}
