//! Topology path text parsing and matching
//!
//! Operators describe target sets, modules, or custom levels as one path per
//! line, segments separated by `>`:
//!
//! ```text
//! a > b > c > s
//!    a>v>c
//!
//! a
//! ```
//!
//! parses to `[[a, b, c, s], [a, v, c], [a]]`. Blank lines and blank segments
//! are dropped rather than rejected.

use std::fmt;

use cmdb_bridge_common::constants::PATH_DELIMITER;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TopologyError;
use crate::tree::TopologyNode;

/// A non-empty sequence of trimmed, non-empty segment names
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedPath(Vec<String>);

impl ParsedPath {
    /// Build a path from raw segments, trimming each and dropping blanks.
    ///
    /// Returns `None` when no segment survives.
    pub fn from_segments<I, S>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments: Vec<String> = segments
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if segments.is_empty() {
            None
        } else {
            Some(Self(segments))
        }
    }

    /// Parse a single line; `None` for a line with no segments
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        Self::from_segments(line.split(PATH_DELIMITER))
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ParsedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; 4];
        f.write_str(&self.0.join(PATH_DELIMITER.encode_utf8(&mut buf)))
    }
}

/// Parse multi-line path text. Never fails; lines without segments are omitted.
pub fn parse_path_text(text: &str) -> Vec<ParsedPath> {
    text.lines().filter_map(ParsedPath::parse_line).collect()
}

/// Match every path against the tree and return the instance id each path
/// ends on, in input order.
///
/// At each level the first sibling whose name equals the segment is taken,
/// with no backtracking. The batch is all-or-nothing: the first path that
/// fails to match aborts with [`TopologyError::PathNotFound`].
pub fn match_paths(
    roots: &[TopologyNode],
    paths: &[ParsedPath],
) -> Result<Vec<i64>, TopologyError> {
    paths.iter().map(|path| match_path(roots, path)).collect()
}

fn match_path(roots: &[TopologyNode], path: &ParsedPath) -> Result<i64, TopologyError> {
    let not_found = || {
        debug!("No topology node matches path {}", path);
        TopologyError::PathNotFound {
            path: path.to_string(),
        }
    };

    let mut level = roots;
    let mut matched = None;
    for segment in path.segments() {
        let node = level
            .iter()
            .find(|node| node.instance_name == *segment)
            .ok_or_else(not_found)?;
        level = &node.children;
        matched = Some(node.instance_id);
    }

    matched.ok_or_else(not_found)
}

/// Parse `text` and match the result against `roots`
pub fn resolve_path_text(roots: &[TopologyNode], text: &str) -> Result<Vec<i64>, TopologyError> {
    let paths = parse_path_text(text);
    let ids = match_paths(roots, &paths)?;
    debug!("Resolved {} topology paths", ids.len());
    Ok(ids)
}
