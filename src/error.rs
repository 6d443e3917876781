use thiserror::Error;

/** errors raised by graph construction, coloring access and the solvers.

Every error surfaces immediately to the direct caller: no retry, no partial
result. `NotBipartite` is an expected outcome of the 2-coloring (the caller
should anticipate it); the other kinds signal misuse of the data structures.
*/
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ColoringError {
    /// the graph already holds `capacity` vertices
    #[error("graph full: capacity of {capacity} vertices reached")]
    CapacityExceeded {
        /// declared capacity of the graph
        capacity: usize,
    },
    /// a vertex index outside `[0, nb_vertices)` was given to a graph operation
    #[error("vertex {index} does not exist (graph has {nb_vertices} vertices)")]
    InvalidIndex {
        /// offending index
        index: usize,
        /// number of live vertices at the time of the call
        nb_vertices: usize,
    },
    /// an edge from a vertex to itself was requested
    #[error("self-loop on vertex {vertex} rejected")]
    SelfLoop {
        /// the vertex on both endpoints
        vertex: usize,
    },
    /// a coloring was accessed outside `[0, len)`
    #[error("coloring index {index} out of range (coloring has {len} slots)")]
    IndexOutOfRange {
        /// offending index
        index: usize,
        /// number of slots of the coloring
        len: usize,
    },
    /// the 2-coloring found an odd cycle
    #[error("graph is not bipartite: color conflict on vertex {vertex}")]
    NotBipartite {
        /// vertex on which the conflicting color was found
        vertex: usize,
    },
}
