use crate::color::{ColorId, Coloring};
use crate::error::ColoringError;
use crate::graph::{Graph, VertexId};

/** colors a bipartite graph with two colors, or fails with `NotBipartite`.

Vertices are scanned in ascending order; each still-unset vertex seeds a
depth-first walk colored 0, alternating 0/1 along the way, so every connected
component is handled independently. A back edge reaching an already-colored
vertex with the wrong expected color proves an odd cycle and fails the whole
call (no partial result).

The walk uses an explicit stack rather than recursion (large graphs would
otherwise tie stack depth to graph size) but keeps the recursive visit order:
neighbors are explored in ascending index order. O(V+E).
*/
pub fn two_color(graph: &Graph) -> Result<Coloring, ColoringError> {
    let n = graph.nb_vertices();
    let mut coloring = Coloring::new(n);
    for seed in 0..n {
        if coloring.get(seed)?.is_none() {
            color_component(graph, &mut coloring, seed)?;
        }
    }
    Ok(coloring)
}

/// depth-first 2-coloring of the component containing `seed`
fn color_component(
    graph: &Graph,
    coloring: &mut Coloring,
    seed: VertexId,
) -> Result<(), ColoringError> {
    let mut stack: Vec<(VertexId, ColorId)> = vec![(seed, 0)];
    while let Some((u, expected)) = stack.pop() {
        match coloring.get(u)? {
            Some(c) => {
                if c != expected {
                    return Err(ColoringError::NotBipartite { vertex: u });
                }
            }
            None => {
                coloring.set(u, expected)?;
                // pushed in reverse so the smallest neighbor is explored first,
                // matching the recursive formulation
                for v in graph.neighbors(u)?.into_iter().rev() {
                    stack.push((v, 1 - expected));
                }
            }
        }
    }
    Ok(())
}
