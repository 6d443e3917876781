use crate::color::{ColorId, Coloring};
use crate::error::ColoringError;
use crate::graph::{Graph, VertexId};
use crate::solvers::greedy::greedy;
use crate::solvers::two_color::two_color;

/// uncolored neighbors of `s`, ascending
fn uncolored_neighbors(
    graph: &Graph,
    coloring: &Coloring,
    s: VertexId,
) -> Result<Vec<VertexId>, ColoringError> {
    let mut res = Vec::new();
    for v in graph.neighbors(s)? {
        if coloring.get(v)?.is_none() {
            res.push(v);
        }
    }
    Ok(res)
}

/// residual degree of `s`: number of its uncolored neighbors
fn residual_degree(
    graph: &Graph,
    coloring: &Coloring,
    s: VertexId,
) -> Result<usize, ColoringError> {
    Ok(uncolored_neighbors(graph, coloring, s)?.len())
}

/** Wigderson two-phase heuristic for graphs believed 3-colorable.

Phase 1: as long as some uncolored vertex has at least ceil(sqrt(n)) uncolored
neighbors, take the one with the largest residual degree (first one in an
ascending scan on ties), 2-color the subgraph induced by its uncolored
neighbors, and merge the two local colors into the next two never-used global
colors. The selected vertex itself stays uncolored. In a 3-colorable graph
every neighborhood is bipartite, so a `NotBipartite` failure here is how a
caller learns the graph is probably not 3-colorable; it aborts the whole call.

Phase 2: greedy coloring of the remaining vertices in ascending index order.
The sweep runs on a coloring of its own and is merged into the still-unset
slots, so a successful return is no guarantee of properness; callers needing
that guarantee must run `is_proper_coloring` on the result.
*/
pub fn wigderson(graph: &Graph) -> Result<Coloring, ColoringError> {
    let n = graph.nb_vertices();
    let mut coloring = Coloring::new(n);
    let threshold = (n as f64).sqrt().ceil() as usize;
    let mut next_color: ColorId = 0;

    loop {
        let mut best: Option<(VertexId, usize)> = None;
        for s in coloring.uncolored() {
            let deg = residual_degree(graph, &coloring, s)?;
            if deg >= threshold && best.map_or(true, |(_, best_deg)| deg > best_deg) {
                best = Some((s, deg));
            }
        }
        let pivot = match best {
            None => break,
            Some((s, _)) => s,
        };
        // deg >= threshold >= 1: the neighborhood is never empty here
        let neighborhood = uncolored_neighbors(graph, &coloring, pivot)?;
        let local = two_color(&graph.induced(&neighborhood)?)?;
        for (i, &v) in neighborhood.iter().enumerate() {
            match local.get(i)? {
                Some(0) => coloring.set(v, next_color)?,
                Some(_) => coloring.set(v, next_color + 1)?,
                None => {}
            }
        }
        next_color += 2;
    }

    let rest = coloring.uncolored();
    let sweep = greedy(graph, &rest)?;
    for v in rest {
        if let Some(c) = sweep.get(v)? {
            coloring.set(v, c)?;
        }
    }
    Ok(coloring)
}
