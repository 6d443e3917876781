use bit_set::BitSet;

use crate::error::ColoringError;

/** Vertex Id */
pub type VertexId = usize;

/** models a dense undirected graph.

The capacity (maximum number of vertices) is fixed at construction; vertices
are appended one at a time and never removed. adjacency[i] is the bitset row
of the adjacency matrix for vertex i. The matrix stays symmetric and the
diagonal stays empty (self-loops are rejected).
*/
#[derive(Debug, Clone)]
pub struct Graph {
    /// adjacency[i]: bitset of the neighbors of i (one row per capacity slot)
    adjacency: Vec<BitSet>,
    /// nb live vertices (only indices below this are valid)
    n: usize,
}

impl Graph {
    /** creates an empty graph able to hold up to `capacity` vertices */
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            adjacency: vec![BitSet::with_capacity(capacity); capacity],
            n: 0,
        }
    }

    /// number of live vertices
    pub fn nb_vertices(&self) -> usize { self.n }

    /// maximum number of vertices
    pub fn capacity(&self) -> usize { self.adjacency.len() }

    /// number of edges
    pub fn nb_edges(&self) -> usize {
        let degree_sum: usize = self.adjacency[..self.n].iter()
            .map(|row| row.len()).sum();
        degree_sum / 2 // each edge counted from both endpoints
    }

    /** appends a vertex and returns its index.
    Fails with `CapacityExceeded` (and changes nothing) once the graph is full.
    */
    pub fn add_vertex(&mut self) -> Result<VertexId, ColoringError> {
        if self.n >= self.capacity() {
            return Err(ColoringError::CapacityExceeded { capacity: self.capacity() });
        }
        self.n += 1;
        Ok(self.n - 1)
    }

    /** adds the edge {i,j} (both directions, the graph is undirected).
    Re-adding an existing edge is allowed and changes nothing.
    Fails with `InvalidIndex` on an out-of-range endpoint, `SelfLoop` if i = j.
    */
    pub fn add_edge(&mut self, i: VertexId, j: VertexId) -> Result<(), ColoringError> {
        self.check_index(i)?;
        self.check_index(j)?;
        if i == j {
            return Err(ColoringError::SelfLoop { vertex: i });
        }
        self.adjacency[i].insert(j);
        self.adjacency[j].insert(i);
        Ok(())
    }

    /** returns true iff i and j are adjacent.
    Bounds are enforced on reads as strictly as on writes.
    */
    pub fn are_adjacent(&self, i: VertexId, j: VertexId) -> Result<bool, ColoringError> {
        self.check_index(i)?;
        self.check_index(j)?;
        Ok(self.adjacency[i].contains(j))
    }

    /** neighbors of i, in ascending index order.
    Solvers depend on this ordering (the 2-coloring visit order follows it).
    */
    pub fn neighbors(&self, i: VertexId) -> Result<Vec<VertexId>, ColoringError> {
        self.check_index(i)?;
        Ok(self.adjacency[i].iter().collect())
    }

    /// degree of vertex i
    pub fn degree(&self, i: VertexId) -> Result<usize, ColoringError> {
        self.check_index(i)?;
        Ok(self.adjacency[i].len())
    }

    /** builds the subgraph induced by `vertices`.

    The new graph has `vertices.len()` vertices; new vertex i stands for
    `vertices[i]`, and an edge {i,j} exists iff {vertices[i],vertices[j]} is an
    edge of self. Fails with `InvalidIndex` if some listed vertex does not exist.
    */
    pub fn induced(&self, vertices: &[VertexId]) -> Result<Graph, ColoringError> {
        let k = vertices.len();
        let mut sub = Graph::with_capacity(k);
        for _ in 0..k {
            sub.add_vertex()?; // cannot fail: k slots reserved
        }
        for i in 0..k {
            for j in i + 1..k {
                if self.are_adjacent(vertices[i], vertices[j])? {
                    sub.add_edge(i, j)?;
                }
            }
        }
        Ok(sub)
    }

    /// print statistics of the graph
    pub fn display_statistics(&self) {
        println!("\t{} \t vertices", self.nb_vertices());
        println!("\t{} \t edges", self.nb_edges());
        if self.n > 0 {
            let degrees: Vec<usize> = (0..self.n).map(|i| self.adjacency[i].len()).collect();
            println!("\t{} \t min degree", degrees.iter().min().unwrap());
            println!("\t{} \t max degree", degrees.iter().max().unwrap());
        }
    }

    fn check_index(&self, i: VertexId) -> Result<(), ColoringError> {
        if i >= self.n {
            return Err(ColoringError::InvalidIndex { index: i, nb_vertices: self.n });
        }
        Ok(())
    }
}

/** builds a graph with `n` vertices and the given edges (test/demo helper) */
pub fn graph_from_edges(n: usize, edges: &[(VertexId, VertexId)]) -> Result<Graph, ColoringError> {
    let mut g = Graph::with_capacity(n);
    for _ in 0..n {
        g.add_vertex()?;
    }
    for &(i, j) in edges {
        g.add_edge(i, j)?;
    }
    Ok(g)
}
