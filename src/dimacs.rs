use std::fs;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{tag, take, take_until};
use nom::character::complete::{digit1, multispace0, space1};
use nom::combinator::map_res;
use nom::multi::many0;

use crate::graph::Graph;

/// reads an unsigned integer
fn read_usize(s: &str) -> IResult<&str, usize> {
    map_res(digit1, |d: &str| d.parse::<usize>())(s)
}

/// reads two numbers separated by spaces, consuming trailing whitespace
fn read_two_integers(s: &str) -> IResult<&str, (usize, usize)> {
    let (s, a) = read_usize(s)?;
    let (s, _) = space1(s)?;
    let (s, b) = read_usize(s)?;
    let (s, _) = multispace0(s)?;
    Ok((s, (a, b)))
}

/// skips a single comment line
fn skip_comment(s: &str) -> IResult<&str, &str> {
    let (s, _) = tag("c")(s)?;
    let (s, _) = take_until("\n")(s)?;
    take(1usize)(s)
}

/// skips all comment lines
pub fn skip_comments(s: &str) -> IResult<&str, Vec<&str>> {
    many0(skip_comment)(s)
}

/// reads the header containing (n,m)
pub fn read_header(s: &str) -> IResult<&str, (usize, usize)> {
    let (s, _) = alt((tag("p edge "), tag("p col ")))(s)?;
    read_two_integers(s)
}

/// reads an edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s: &str) -> IResult<&str, (usize, usize)> {
    let (s, _) = tag("e ")(s)?;
    read_two_integers(s)
}

/** parses a DIMACS-formatted string, returns (n, m, edges) with 0-based endpoints.

# Panics
 - if the header is missing or the edge count disagrees with the header
*/
pub fn read_from_str(content: &str) -> (usize, usize, Vec<(usize, usize)>) {
    let cleaned = content.replace('\r', "");
    let body = skip_comments(cleaned.as_str())
        .expect("DIMACS: malformed comments").0;
    let (mut rest, (n, m)) = read_header(body)
        .expect("DIMACS: missing 'p edge' header");
    let mut edges = Vec::new();
    while let Ok((tmp, (a, b))) = read_edge(rest) {
        rest = tmp;
        edges.push((a - 1, b - 1));
    }
    assert!(
        edges.len() == m || 2 * edges.len() == m,
        "DIMACS: header announces {} edges, found {}", m, edges.len()
    );
    (n, m, edges)
}

/** reads an instance from a file, returns (n, m, edges)

# Panics
 - if the file cannot be read or parsed
*/
pub fn read_from_file(filename: &str) -> (usize, usize, Vec<(usize, usize)>) {
    let content = fs::read_to_string(filename)
        .expect("DIMACS: unable to read file");
    read_from_str(&content)
}

/** builds a dense graph from a DIMACS file

# Panics
 - if the file cannot be read, or an edge is invalid for the announced size
*/
pub fn graph_from_file(filename: &str) -> Graph {
    let (n, _, edges) = read_from_file(filename);
    let mut g = Graph::with_capacity(n);
    for _ in 0..n {
        g.add_vertex().expect("DIMACS: more vertices than announced");
    }
    for (a, b) in edges {
        g.add_edge(a, b).unwrap_or_else(|err| {
            panic!("DIMACS: edge ({},{}) rejected: {}", a + 1, b + 1, err)
        });
    }
    g
}
