//! Tree utility functions over the p / l / r links.
//!
//! Everything here except [`insert`] and [`find`] is read-only. The
//! read-only walks use explicit stacks and assume an acyclic tree; run
//! [`verify`](crate::verify::verify) first when the arena may be corrupted.

pub mod walk;

use std::cmp::Ordering;

use crate::splay::splay;
use crate::types::{KeyNode, Node};

pub use walk::{balance, count_nodes, height};

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Where a BST descent for some key ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Descent {
    /// A node holding the key.
    Found(u32),
    /// The key is absent; `last` is the final node visited and `left` tells
    /// which of its slots the key belongs in. `last` is `None` only for an
    /// empty tree.
    Vacant { last: Option<u32>, left: bool },
}

/// Walk from `root` towards `key` without touching any link.
pub fn descend<K, N>(arena: &[N], root: Option<u32>, key: &K) -> Descent
where
    K: Ord,
    N: KeyNode<K>,
{
    let mut curr = root;
    let mut last = None;
    let mut left = false;
    while let Some(i) = curr {
        last = Some(i);
        match key.cmp(arena[i as usize].key()) {
            Ordering::Equal => return Descent::Found(i),
            Ordering::Less => {
                left = true;
                curr = get_l(arena, i);
            }
            Ordering::Greater => {
                left = false;
                curr = get_r(arena, i);
            }
        }
    }
    Descent::Vacant { last, left }
}

/// BST search that leaves the tree untouched.
pub fn contains<K, N>(arena: &[N], root: Option<u32>, key: &K) -> bool
where
    K: Ord,
    N: KeyNode<K>,
{
    matches!(descend(arena, root, key), Descent::Found(_))
}

/// Outcome of [`insert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Inserted {
    /// New root: the node holding the inserted key.
    pub root: u32,
    /// `false` when the key was already present.
    pub created: bool,
}

/// Insert `key` and splay its node to the root.
///
/// `make` builds the arena node for a fresh key; it is not called when the
/// key already exists, in which case the existing node is splayed instead.
///
/// Panics if the arena already holds `u32::MAX + 1` nodes.
pub fn insert<K, N, F>(arena: &mut Vec<N>, root: Option<u32>, key: K, make: F) -> Inserted
where
    K: Ord,
    N: KeyNode<K>,
    F: FnOnce(K) -> N,
{
    let (node, created) = match descend(arena, root, &key) {
        Descent::Found(i) => (i, false),
        Descent::Vacant { last, left } => {
            assert!(
                u32::try_from(arena.len()).is_ok(),
                "arena is full: node indices are u32"
            );
            arena.push(make(key));
            let node = (arena.len() - 1) as u32;
            if let Some(parent) = last {
                set_p(arena, node, Some(parent));
                if left {
                    set_l(arena, parent, Some(node));
                } else {
                    set_r(arena, parent, Some(node));
                }
            }
            (node, true)
        }
    };
    Inserted {
        root: splay(arena, node),
        created,
    }
}

/// Outcome of [`find`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lookup {
    pub root: Option<u32>,
    pub found: bool,
}

/// Search for `key`, splaying the match to the root.
///
/// On a miss the last node visited is splayed instead, so the new root is
/// the in-order neighbour of `key` on the side the descent ended. An empty
/// tree stays empty.
pub fn find<K, N>(arena: &mut [N], root: Option<u32>, key: &K) -> Lookup
where
    K: Ord,
    N: KeyNode<K>,
{
    match descend(arena, root, key) {
        Descent::Found(i) => Lookup {
            root: Some(splay(arena, i)),
            found: true,
        },
        Descent::Vacant { last, .. } => Lookup {
            root: last.map(|i| splay(arena, i)),
            found: false,
        },
    }
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}
