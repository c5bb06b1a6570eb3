//! Arena-based splay tree with parent links.
//!
//! Nodes live in a `Vec<N>`; every link is an `Option<u32>` index into it,
//! so the parent link is a plain back-reference and the tree can never form
//! an ownership cycle. A logical cycle (an index pointing back at an
//! ancestor) is still possible after a bad rotation, which is what the
//! [`verify`](mod@verify) module exists to catch.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] and [`KeyNode`] traits |
//! [`node`] | [`SplayNode`], the concrete arena node |
//! [`splay`] | [`rotate`] and [`splay`](splay::splay) |
//! [`util`] | `insert`, `find`, `contains`, traversal and measurements |
//! [`verify`] | read-only structural verifier |
//! [`print`] | cycle-safe debug rendering |
//! [`tree`] | [`SplayTree`], an owning facade over the above |

pub mod node;
pub mod print;
pub mod splay;
pub mod tree;
pub mod types;
pub mod util;
pub mod verify;

pub use node::SplayNode;
pub use print::render;
pub use splay::{rotate, splay};
pub use tree::{Iter, SplayTree};
pub use types::{KeyNode, Node};
pub use util::{balance, contains, count_nodes, find, first, height, insert, last, next, prev};
pub use verify::{check_cycles, is_valid, verify, VerifyOptions, Violation, ViolationKind};
