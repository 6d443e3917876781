//! Proper vertex colorings of dense undirected graphs

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// error kinds shared by graph, coloring and solver operations
pub mod error;

/// dense undirected graph (bitset adjacency matrix, append-only construction)
pub mod graph;

/// colorings, display palette, and the proper-coloring checker
pub mod color;

/// read DIMACS instance files
pub mod dimacs;

/// random instance generators (used by tests and demonstrations)
pub mod gens;

/// helper and utility methods for executables
pub mod util;

/// coloring algorithms (2-coloring, greedy, Welsh-Powell, Wigderson)
pub mod solvers;
