use std::ops::Range;

use crate::graph::*;

pub type NVertexIterator<'a> = Box<dyn Iterator<Item=Vertex> + 'a>;

/// Allows iteration over the neighbourhoods of a graph.
pub trait NeighbourhoodIterable: Graph + Sized {
    fn neighbourhoods(&self) -> NIterator<'_, Self>;
}

impl<G> NeighbourhoodIterable for G where G: Graph {
    fn neighbourhoods(&self) -> NIterator<'_, G> {
        NIterator::new(self)
    }
}

/// Allows iteration over the edges of a graph.
pub trait EdgeIterable: Graph + Sized {
    fn edges(&self) -> EdgeIterator<'_, Self>;
}

impl<G> EdgeIterable for G where G: Graph {
    fn edges(&self) -> EdgeIterator<'_, G> {
        EdgeIterator::new(self)
    }
}

/// Neighbourhood iterator for graphs. At each step, the iterator
/// returns a pair $(v,N(v))$.
pub struct NIterator<'a, G> where G: Graph {
    G: &'a G,
    v_it: Range<Vertex>,
}

impl<'a, G> NIterator<'a, G> where G: Graph {
    pub fn new(G: &'a G) -> NIterator<'a, G> {
        NIterator { G, v_it: G.vertices() }
    }
}

impl<'a, G> Iterator for NIterator<'a, G> where G: Graph {
    type Item = (Vertex, NVertexIterator<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.v_it.next()?;
        let N = self.G.neighbours(&v);

        Some((v, N))
    }
}

/// Edge iterator for graphs. Every stored incidence pair $uv$ is returned once as `(u,v)`
/// with `u <= v`, so an edge that was inserted twice into a
/// [SparseGraph](crate::sparsegraph::SparseGraph) is returned twice.
pub struct EdgeIterator<'a, G> where G: Graph {
    N_it: NIterator<'a, G>,
    curr_v: Vertex,
    curr_it: Option<NVertexIterator<'a>>,
}

impl<'a, G> EdgeIterator<'a, G> where G: Graph {
    pub fn new(G: &'a G) -> EdgeIterator<'a, G> {
        let mut res = EdgeIterator {
            N_it: G.neighbourhoods(),
            curr_v: Vertex::MAX,
            curr_it: None,
        };
        res.advance();
        res
    }

    fn advance(&mut self) {
        if let Some((v, it)) = self.N_it.next() {
            self.curr_v = v;
            self.curr_it = Some(it);
        } else {
            self.curr_it = None;
        }
    }
}

impl<'a, G> Iterator for EdgeIterator<'a, G> where G: Graph {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(it) = self.curr_it.as_mut() {
            let Some(u) = it.next() else {
                self.advance();
                continue;
            };

            // Tie-breaking so we only return every edge once
            if self.curr_v > u {
                continue;
            }
            return Some((self.curr_v, u));
        }

        None
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
