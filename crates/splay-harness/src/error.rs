use std::fmt;

use splay_tree::Violation;

/// Which pass of the tree scenario was running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Insert,
    Find,
    Miss,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Insert => "inserting",
            Phase::Find => "finding",
            Phase::Miss => "probing absent key",
        })
    }
}

/// Why a harness run stopped.
///
/// Variants raised mid-scenario carry the rendered tree so the caller can
/// show the shape that failed.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("invalid key range {low}..={high}")]
    InvalidRange { low: i64, high: i64 },
    #[error("key range {low}..={high} holds more than {max} keys")]
    RangeTooLarge { low: i64, high: i64, max: u64 },
    #[error("rotate: {0}")]
    Rotate(String),
    #[error("after {phase} {key}: {violation}")]
    Violation {
        phase: Phase,
        key: i64,
        #[source]
        violation: Violation<i64>,
        tree: String,
    },
    #[error("after {phase} {key} it should be splayed to the root (root is {root:?})")]
    NotAtRoot {
        phase: Phase,
        key: i64,
        root: Option<i64>,
        tree: String,
    },
    #[error("find() couldn't find {key}")]
    Missing { key: i64, tree: String },
    #[error("find() reported never-inserted key {key} as present")]
    UnexpectedHit { key: i64, tree: String },
    #[error("tree does not have the correct number of nodes (expected {expected}, found {found})")]
    WrongCount {
        expected: usize,
        found: usize,
        tree: String,
    },
}

impl ScenarioError {
    /// Rendered tree at the point of failure, if one was captured.
    pub fn tree(&self) -> Option<&str> {
        match self {
            ScenarioError::Violation { tree, .. }
            | ScenarioError::NotAtRoot { tree, .. }
            | ScenarioError::Missing { tree, .. }
            | ScenarioError::UnexpectedHit { tree, .. }
            | ScenarioError::WrongCount { tree, .. } => Some(tree),
            ScenarioError::InvalidRange { .. }
            | ScenarioError::RangeTooLarge { .. }
            | ScenarioError::Rotate(_) => None,
        }
    }
}
