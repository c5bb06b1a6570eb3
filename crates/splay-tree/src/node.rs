use crate::types::{KeyNode, Node};

/// Concrete arena node used by [`SplayTree`](crate::SplayTree).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplayNode<K> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
}

impl<K> SplayNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
        }
    }

    /// Node with preset links. Used to hand-build fixtures.
    pub fn with_links(k: K, p: Option<u32>, l: Option<u32>, r: Option<u32>) -> Self {
        Self { p, l, r, k }
    }
}

impl<K> Node for SplayNode<K> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K> KeyNode<K> for SplayNode<K> {
    fn key(&self) -> &K {
        &self.k
    }
}
