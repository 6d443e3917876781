use rand::Rng;

use crate::error::ColoringError;
use crate::graph::Graph;

/** generates a G(n,p) graph: every possible edge kept with probability p */
pub fn gnp<R: Rng>(n: usize, p: f64, rng: &mut R) -> Result<Graph, ColoringError> {
    let mut g = Graph::with_capacity(n);
    for _ in 0..n {
        g.add_vertex()?;
    }
    for i in 0..n {
        for j in i + 1..n {
            if rng.gen_bool(p) {
                g.add_edge(i, j)?;
            }
        }
    }
    Ok(g)
}

/** generates a random bipartite graph.

Vertices `0..left` form one side, `left..left+right` the other; every
cross-side edge is kept with probability p. No within-side edge is ever
produced, so the result is bipartite by construction.
*/
pub fn random_bipartite<R: Rng>(
    left: usize,
    right: usize,
    p: f64,
    rng: &mut R,
) -> Result<Graph, ColoringError> {
    let mut g = Graph::with_capacity(left + right);
    for _ in 0..left + right {
        g.add_vertex()?;
    }
    for i in 0..left {
        for j in left..left + right {
            if rng.gen_bool(p) {
                g.add_edge(i, j)?;
            }
        }
    }
    Ok(g)
}
