use crate::error::ColoringError;
use crate::graph::{Graph, VertexId};

/** Color Id (0-based).

Solvers pick colors from this open-ended domain so that a graph needing many
colors never runs out; the closed [`Hue`] palette only matters for display.
*/
pub type ColorId = usize;

/** display palette.

Rendering maps the first six color ids onto named hues and falls back to a
numbered label beyond that. Unset vertices render as "-".
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hue {
    /// color id 0
    Red,
    /// color id 1
    Green,
    /// color id 2
    Blue,
    /// color id 3
    Yellow,
    /// color id 4
    Orange,
    /// color id 5
    Violet,
}

impl Hue {
    /// hue displayed for a color id, if the palette covers it
    pub fn of(color: ColorId) -> Option<Hue> {
        match color {
            0 => Some(Hue::Red),
            1 => Some(Hue::Green),
            2 => Some(Hue::Blue),
            3 => Some(Hue::Yellow),
            4 => Some(Hue::Orange),
            5 => Some(Hue::Violet),
            _ => None,
        }
    }

    /// display name
    pub fn name(self) -> &'static str {
        match self {
            Hue::Red => "red",
            Hue::Green => "green",
            Hue::Blue => "blue",
            Hue::Yellow => "yellow",
            Hue::Orange => "orange",
            Hue::Violet => "violet",
        }
    }
}

/// display label of a (possibly unset) color
pub fn color_label(color: Option<ColorId>) -> String {
    match color {
        None => "-".to_string(),
        Some(c) => match Hue::of(c) {
            Some(hue) => hue.name().to_string(),
            None => format!("color{}", c),
        },
    }
}

/** a coloring: one optional color per vertex index.

The length is fixed at construction and is deliberately independent from any
particular graph (solvers build colorings sized to neighbor subsets before
merging them into a full-size one). All slots start unset.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    /// colors[i]: color assigned to vertex i (None while unset)
    colors: Vec<Option<ColorId>>,
}

impl Coloring {
    /** creates a coloring with `len` unset slots */
    pub fn new(len: usize) -> Self {
        Self { colors: vec![None; len] }
    }

    /// number of addressable vertex slots
    pub fn len(&self) -> usize { self.colors.len() }

    /// true iff the coloring has no slot
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /** color of vertex i (None while unset).
    Fails with `IndexOutOfRange` outside `[0, len)`, never clamps.
    */
    pub fn get(&self, i: VertexId) -> Result<Option<ColorId>, ColoringError> {
        self.check_index(i)?;
        Ok(self.colors[i])
    }

    /** assigns a color to vertex i (may overwrite a previous assignment).
    Fails with `IndexOutOfRange` outside `[0, len)`.
    */
    pub fn set(&mut self, i: VertexId, color: ColorId) -> Result<(), ColoringError> {
        self.check_index(i)?;
        self.colors[i] = Some(color);
        Ok(())
    }

    /// indices of the still-unset slots, ascending
    pub fn uncolored(&self) -> Vec<VertexId> {
        self.colors.iter().enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// number of distinct colors assigned
    pub fn nb_colors(&self) -> usize {
        let mut seen: Vec<ColorId> = self.colors.iter().flatten().copied().collect();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }

    /** writes a string encoding the coloring, one `vertex label` line per slot */
    pub fn to_lines(&self) -> String {
        let mut res = String::default();
        for (i, c) in self.colors.iter().enumerate() {
            res += format!("{} {}\n", i, color_label(*c)).as_str();
        }
        res
    }

    fn check_index(&self, i: VertexId) -> Result<(), ColoringError> {
        if i >= self.colors.len() {
            return Err(ColoringError::IndexOutOfRange { index: i, len: self.colors.len() });
        }
        Ok(())
    }
}

/** returns true iff `coloring` is a proper coloring of `graph`.

A coloring shorter than the graph is never proper. Otherwise every adjacent
pair must carry different values; two adjacent unset vertices compare equal
and fail the check, so a proper coloring is in particular a complete one over
the graph's vertices. An empty coloring of an empty graph is vacuously proper.
*/
pub fn is_proper_coloring(graph: &Graph, coloring: &Coloring) -> bool {
    let n = graph.nb_vertices();
    if coloring.len() < n {
        return false;
    }
    for i in 0..n {
        for j in i + 1..n {
            // indices are < n <= coloring.len(): neither call can fail
            if graph.are_adjacent(i, j) == Ok(true)
                && coloring.colors[i] == coloring.colors[j]
            {
                return false;
            }
        }
    }
    true
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::graph_from_edges;

    #[test]
    fn test_new_coloring_is_unset() {
        let c = Coloring::new(3);
        assert_eq!(c.len(), 3);
        assert_eq!(c.get(0), Ok(None));
        assert_eq!(c.uncolored(), vec![0, 1, 2]);
        assert_eq!(c.nb_colors(), 0);
    }

    #[test]
    fn test_out_of_range_access() {
        let mut c = Coloring::new(2);
        assert_eq!(c.get(2), Err(ColoringError::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(c.set(2, 0), Err(ColoringError::IndexOutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn test_set_overwrites() {
        let mut c = Coloring::new(1);
        c.set(0, 3).unwrap();
        c.set(0, 1).unwrap();
        assert_eq!(c.get(0), Ok(Some(1)));
        assert_eq!(c.nb_colors(), 1);
    }

    #[test]
    fn test_proper_coloring_simple() {
        let g = graph_from_edges(3, &[(0, 1)]).unwrap();
        let mut c = Coloring::new(3);
        c.set(0, 0).unwrap();
        c.set(1, 1).unwrap();
        c.set(2, 0).unwrap();
        assert!(is_proper_coloring(&g, &c));
        c.set(1, 0).unwrap(); // same color on both endpoints of 0-1
        assert!(!is_proper_coloring(&g, &c));
    }

    #[test]
    fn test_undersized_coloring_never_proper() {
        let g = graph_from_edges(3, &[]).unwrap();
        assert!(!is_proper_coloring(&g, &Coloring::new(2)));
    }

    #[test]
    fn test_oversized_coloring_allowed() {
        let g = graph_from_edges(2, &[(0, 1)]).unwrap();
        let mut c = Coloring::new(5);
        c.set(0, 0).unwrap();
        c.set(1, 1).unwrap();
        assert!(is_proper_coloring(&g, &c));
    }

    #[test]
    fn test_adjacent_unset_pair_conflicts() {
        let g = graph_from_edges(2, &[(0, 1)]).unwrap();
        // both endpoints unset: treated as equal, not proper
        assert!(!is_proper_coloring(&g, &Coloring::new(2)));
    }

    #[test]
    fn test_empty_graph_vacuously_proper() {
        let g = graph_from_edges(0, &[]).unwrap();
        assert!(is_proper_coloring(&g, &Coloring::new(0)));
    }

    #[test]
    fn test_color_labels() {
        assert_eq!(color_label(Some(0)), "red");
        assert_eq!(color_label(Some(5)), "violet");
        assert_eq!(color_label(Some(6)), "color6");
        assert_eq!(color_label(None), "-");
        assert_eq!(Hue::of(9), None);
    }
}
