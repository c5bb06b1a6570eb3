//! Test driver for `splay-tree`.
//!
//! Feeds seeded permutations of an integer key range through
//! [`SplayTree::insert`](splay_tree::SplayTree::insert) and
//! [`SplayTree::find`](splay_tree::SplayTree::find), runs the structural
//! verifier after every step and stops at the first violation with the
//! offending tree rendered. The `splay-harness` binary wraps [`run`] with a
//! command line and a non-zero exit status on failure.

pub mod config;
pub mod error;
pub mod permutation;
pub mod scenario;

pub use config::{HarnessConfig, MAX_KEYS};
pub use error::{Phase, ScenarioError};
pub use permutation::Permutation;
pub use scenario::{rotate_scenario, run, tree_scenario, ScenarioReport};
