//! Parsing the `mvn dependency:tree -DoutputType=dot` dump into an
//! adjacency map.
//!
//! The format is line-oriented: a line containing `{` opens a package's
//! subgraph and embeds the package's artifact id as colon field 1; a line
//! containing `->` records one edge, with the artifact id at colon field 1
//! of each side. The parser takes raw lines in and hands an [`AdjacencyMap`]
//! out, so the dump format can be swapped without touching the merger.

use std::collections::BTreeMap;

/// Artifact id to the ordered artifact ids it directly depends on.
///
/// May reference ids absent from the module set; the merger drops those.
pub type AdjacencyMap = BTreeMap<String, Vec<String>>;

/// Parse a dot-format graph dump.
///
/// Edges whose left-hand id matches the current package header are recorded
/// under that package; any other edge is recorded under its own left-hand
/// id. Either way an edge already recorded for a source is not recorded
/// again.
pub fn parse_graph(text: &str) -> AdjacencyMap {
    let mut adjacency = AdjacencyMap::new();
    let mut current_pkg = String::new();
    // Some Maven versions emit an anonymous wrapper digraph that closes on
    // the second line; its edges must not be attributed to a root package.
    let mut anonymous_wrapper = false;

    for (index, line) in text.lines().enumerate() {
        if line.contains('{') {
            current_pkg = colon_field(line, 1).unwrap_or_default().to_string();
        } else if line.contains("->") {
            let Some((lhs, rhs)) = line.split_once("->") else {
                continue;
            };
            let (Some(source), Some(target)) = (colon_field(lhs, 1), colon_field(rhs, 1)) else {
                tracing::debug!("skipping malformed edge line: {line:?}");
                continue;
            };
            if !anonymous_wrapper && source == current_pkg {
                insert_edge(&mut adjacency, &current_pkg, target);
            } else {
                insert_edge(&mut adjacency, source, target);
            }
        } else if line.contains('}') && index == 1 {
            anonymous_wrapper = true;
        }
    }

    adjacency
}

/// Extract a colon-delimited field from a (possibly quoted) graph token.
fn colon_field(token: &str, index: usize) -> Option<&str> {
    let field = token.split(':').nth(index)?;
    let field = field.trim().trim_matches('"');
    if field.is_empty() {
        None
    } else {
        Some(field)
    }
}

fn insert_edge(adjacency: &mut AdjacencyMap, source: &str, target: &str) {
    let targets = adjacency.entry(source.to_string()).or_default();
    if !targets.iter().any(|t| t == target) {
        targets.push(target.to_string());
    }
}
