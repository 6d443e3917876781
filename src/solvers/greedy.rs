use std::cmp::Reverse;

use bit_set::BitSet;

use crate::color::{ColorId, Coloring};
use crate::error::ColoringError;
use crate::graph::{Graph, VertexId};

/** smallest color not used by any already-colored neighbor of `s`.

Unset neighbors forbid nothing. May return one past the largest forbidden
color (a vertex of degree d never needs more than color d).
*/
pub fn min_available_color(
    graph: &Graph,
    coloring: &Coloring,
    s: VertexId,
) -> Result<ColorId, ColoringError> {
    let mut forbidden = BitSet::with_capacity(graph.nb_vertices() + 1);
    for v in graph.neighbors(s)? {
        if let Some(c) = coloring.get(v)? {
            forbidden.insert(c);
        }
    }
    let mut color: ColorId = 0;
    while forbidden.contains(color) {
        color += 1;
    }
    Ok(color)
}

/** greedy coloring following an explicit visiting order.

`order` may be any sequence of existing vertices, not necessarily all of them
(this is how partial colorings of a subset are built). The returned coloring
is sized to the graph; vertices absent from `order` stay unset.
Fails with `InvalidIndex` if `order` names a vertex that does not exist.
*/
pub fn greedy(graph: &Graph, order: &[VertexId]) -> Result<Coloring, ColoringError> {
    let mut coloring = Coloring::new(graph.nb_vertices());
    for &s in order {
        let c = min_available_color(graph, &coloring, s)?;
        coloring.set(s, c)?;
    }
    Ok(coloring)
}

/** vertex indices sorted by decreasing degree, ties by ascending index
(the sort is stable, so equal degrees keep their original order) */
pub fn degree_order(graph: &Graph) -> Vec<VertexId> {
    let n = graph.nb_vertices();
    let degrees: Vec<usize> = (0..n).map(|v| graph.degree(v).unwrap()).collect();
    let mut order: Vec<VertexId> = (0..n).collect();
    order.sort_by_key(|&v| Reverse(degrees[v]));
    order
}

/** Welsh-Powell: greedy coloring in decreasing degree order */
pub fn welsh_powell(graph: &Graph) -> Result<Coloring, ColoringError> {
    greedy(graph, &degree_order(graph))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::is_proper_coloring;
    use crate::graph::graph_from_edges;

    fn complete_graph(n: usize) -> Graph {
        let mut edges = Vec::new();
        for i in 0..n {
            for j in i + 1..n {
                edges.push((i, j));
            }
        }
        graph_from_edges(n, &edges).unwrap()
    }

    #[test]
    fn test_greedy_k3_uses_three_colors() {
        let g = complete_graph(3);
        let c = greedy(&g, &[0, 1, 2]).unwrap();
        assert!(is_proper_coloring(&g, &c));
        assert_eq!(c.nb_colors(), 3);
        assert_eq!(c.get(0), Ok(Some(0)));
        assert_eq!(c.get(1), Ok(Some(1)));
        assert_eq!(c.get(2), Ok(Some(2)));
    }

    #[test]
    fn test_greedy_order_matters() {
        // path 0-1-2-3: coloring the endpoints first forces a third color on 2
        let g = graph_from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let c_bad = greedy(&g, &[0, 3, 1, 2]).unwrap();
        assert!(is_proper_coloring(&g, &c_bad));
        assert_eq!(c_bad.nb_colors(), 3);
        let c_good = greedy(&g, &[0, 1, 2, 3]).unwrap();
        assert!(is_proper_coloring(&g, &c_good));
        assert_eq!(c_good.nb_colors(), 2);
    }

    #[test]
    fn test_greedy_partial_order() {
        let g = graph_from_edges(4, &[(0, 1), (2, 3)]).unwrap();
        let c = greedy(&g, &[0, 1]).unwrap();
        assert_eq!(c.get(0), Ok(Some(0)));
        assert_eq!(c.get(1), Ok(Some(1)));
        assert_eq!(c.get(2), Ok(None));
        assert_eq!(c.uncolored(), vec![2, 3]);
    }

    #[test]
    fn test_greedy_invalid_vertex_in_order() {
        let g = graph_from_edges(2, &[(0, 1)]).unwrap();
        assert_eq!(
            greedy(&g, &[0, 5]),
            Err(ColoringError::InvalidIndex { index: 5, nb_vertices: 2 })
        );
    }

    #[test]
    fn test_greedy_never_runs_out_of_colors() {
        // complete graph: every vertex needs its own color
        let g = complete_graph(8);
        let c = greedy(&g, &(0..8).collect::<Vec<_>>()).unwrap();
        assert!(is_proper_coloring(&g, &c));
        assert_eq!(c.nb_colors(), 8); // beyond the 6-hue display palette
    }

    #[test]
    fn test_min_available_color_skips_forbidden() {
        let g = graph_from_edges(4, &[(3, 0), (3, 1), (3, 2)]).unwrap();
        let mut c = Coloring::new(4);
        c.set(0, 0).unwrap();
        c.set(1, 2).unwrap();
        assert_eq!(min_available_color(&g, &c, 3), Ok(1));
        c.set(2, 1).unwrap();
        assert_eq!(min_available_color(&g, &c, 3), Ok(3));
    }

    #[test]
    fn test_degree_order_descending_stable() {
        // degrees: 0 -> 1, 1 -> 3, 2 -> 2, 3 -> 2, 4 -> 0
        let g = graph_from_edges(5, &[(0, 1), (1, 2), (1, 3), (2, 3)]).unwrap();
        assert_eq!(degree_order(&g), vec![1, 2, 3, 0, 4]);
    }

    #[test]
    fn test_welsh_powell_star() {
        // center 0 with 6 leaves: center first, all leaves share one other color
        let edges: Vec<(usize, usize)> = (1..7).map(|leaf| (0, leaf)).collect();
        let g = graph_from_edges(7, &edges).unwrap();
        let c = welsh_powell(&g).unwrap();
        assert!(is_proper_coloring(&g, &c));
        assert_eq!(c.nb_colors(), 2);
        assert_eq!(c.get(0), Ok(Some(0)));
        for leaf in 1..7 {
            assert_eq!(c.get(leaf), Ok(Some(1)));
        }
    }

    #[test]
    fn test_welsh_powell_k3() {
        let g = complete_graph(3);
        let c = welsh_powell(&g).unwrap();
        assert!(is_proper_coloring(&g, &c));
        assert_eq!(c.nb_colors(), 3);
    }
}
