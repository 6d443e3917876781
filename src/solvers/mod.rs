//! Coloring algorithms over dense graphs.

/// exact 2-coloring (bipartiteness test)
pub mod two_color;

/// greedy coloring, degree ordering and Welsh-Powell
pub mod greedy;

/// Wigderson two-phase heuristic for 3-colorable graphs
pub mod wigderson;
