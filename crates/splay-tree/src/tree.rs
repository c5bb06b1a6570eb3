use std::fmt::{Debug, Display};

use crate::node::SplayNode;
use crate::print::render;
use crate::util::{self, first, next};
use crate::verify::{verify, VerifyOptions, Violation};

/// An ordered set of keys kept in a splay tree.
///
/// Nodes are stored in an arena owned by the tree and never freed until the
/// tree is dropped. [`insert`](Self::insert) and [`find`](Self::find) splay
/// the touched node to the root; the `&self` queries never restructure.
#[derive(Clone, Debug)]
pub struct SplayTree<K> {
    arena: Vec<SplayNode<K>>,
    root: Option<u32>,
}

impl<K> Default for SplayTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> SplayTree<K> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            root: None,
        }
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    /// Key stored at the root.
    pub fn root_key(&self) -> Option<&K> {
        self.root
            .and_then(|i| self.arena.get(i as usize))
            .map(|n| &n.k)
    }

    pub fn arena(&self) -> &[SplayNode<K>] {
        &self.arena
    }

    /// Number of nodes ever created. Nodes are never removed, so on a sound
    /// tree this equals [`count_nodes`](Self::count_nodes).
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn count_nodes(&self) -> usize {
        util::count_nodes(&self.arena, self.root)
    }

    pub fn height(&self) -> usize {
        util::height(&self.arena, self.root)
    }

    pub fn balance(&self) -> f64 {
        util::balance(&self.arena, self.root)
    }

    pub fn first(&self) -> Option<&K> {
        first(&self.arena, self.root).map(|i| &self.arena[i as usize].k)
    }

    pub fn last(&self) -> Option<&K> {
        util::last(&self.arena, self.root).map(|i| &self.arena[i as usize].k)
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            arena: &self.arena,
            curr: first(&self.arena, self.root),
        }
    }

    /// Hand the arena and root back to the caller.
    pub fn into_parts(self) -> (Vec<SplayNode<K>>, Option<u32>) {
        (self.arena, self.root)
    }

    /// Rebuild a tree from raw parts without checking them. Pair with
    /// [`verify`](Self::verify) before trusting the result.
    pub fn from_parts(arena: Vec<SplayNode<K>>, root: Option<u32>) -> Self {
        Self { arena, root }
    }
}

impl<K: Ord> SplayTree<K> {
    /// Insert `key` and splay it to the root. Returns `false` if the key was
    /// already present, in which case the existing node is splayed instead.
    pub fn insert(&mut self, key: K) -> bool {
        let out = util::insert(&mut self.arena, self.root, key, SplayNode::new);
        self.root = Some(out.root);
        out.created
    }

    /// Look `key` up, splaying it to the root when found. A miss splays the
    /// last node visited and reports `false`.
    pub fn find(&mut self, key: &K) -> bool {
        let out = util::find(&mut self.arena, self.root, key);
        self.root = out.root;
        out.found
    }

    /// Membership test that leaves the shape alone.
    pub fn contains(&self, key: &K) -> bool {
        util::contains(&self.arena, self.root, key)
    }
}

impl<K: Ord + Clone + Debug> SplayTree<K> {
    pub fn verify(&self, options: VerifyOptions) -> Result<(), Violation<K>> {
        verify(&self.arena, self.root, options)
    }
}

impl<K: Display> SplayTree<K> {
    pub fn render(&self) -> String {
        render(&self.arena, self.root)
    }
}

impl<K: Ord> FromIterator<K> for SplayTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        for key in iter {
            tree.insert(key);
        }
        tree
    }
}

impl<K: Ord> Extend<K> for SplayTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

/// In-order iterator over the keys of a [`SplayTree`].
pub struct Iter<'a, K> {
    arena: &'a [SplayNode<K>],
    curr: Option<u32>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let i = self.curr?;
        self.curr = next(self.arena, i);
        Some(&self.arena[i as usize].k)
    }
}

impl<'a, K> IntoIterator for &'a SplayTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}
