//! Node trait definitions.
//!
//! Nodes live in a caller-owned arena (`Vec<N>` or `[N]`). Each relation is an
//! `Option<u32>` index into that arena, so `parent` is a plain back-reference
//! and ownership flows only through the arena itself.

/// Tree links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// A node that carries an ordered key.
///
/// Keys are compared with [`Ord`]; a tree never holds two nodes with equal
/// keys.
pub trait KeyNode<K>: Node {
    fn key(&self) -> &K;
}
