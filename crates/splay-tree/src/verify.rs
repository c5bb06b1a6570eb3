//! Read-only structural verifier.
//!
//! [`verify`] runs four checks in a fixed order and stops at the first
//! failure:
//!
//! 1. the root has no parent;
//! 2. no node is reachable twice through child links (optional, see
//!    [`VerifyOptions::check_cycles`]);
//! 3. every child points back at its parent and sits on the correct side;
//! 4. every key lies strictly inside the bounds inherited from its
//!    ancestors.
//!
//! All traversals use explicit stacks and never index outside the arena, so
//! the verifier is safe to run on an arbitrarily corrupted tree. Even with
//! the cycle scan disabled, checks 3 and 4 give up after `arena.len()`
//! visits and report the overrun as a cycle.

use std::fmt::Debug;

use crate::types::KeyNode;

/// Per-call verifier switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifyOptions {
    /// Run the visited-set scan for child-link cycles.
    pub check_cycles: bool,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self { check_cycles: true }
    }
}

impl VerifyOptions {
    pub fn without_cycle_check() -> Self {
        Self {
            check_cycles: false,
        }
    }
}

/// Which invariant a [`Violation`] broke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    RootParentNotNull,
    Cycle,
    ParentMismatch,
    OrderViolation,
    DanglingLink,
}

/// First structural problem found by [`verify`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Violation<K> {
    #[error("root->parent should always be null (root = {key:?}, parent = #{parent})")]
    RootParentNotNull { key: K, parent: u32 },
    #[error("tree structure contains a cycle (node {key:?} reached twice)")]
    Cycle { key: K },
    #[error("found node {key:?} with incorrect parent pointer (expected #{expected}, found {actual:?})")]
    ParentMismatch {
        key: K,
        expected: u32,
        actual: Option<u32>,
    },
    #[error("found node {key:?} improperly placed")]
    OrderViolation { key: K },
    #[error("link to #{index} points outside the arena (from node {from:?})")]
    DanglingLink { from: Option<K>, index: u32 },
}

impl<K> Violation<K> {
    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::RootParentNotNull { .. } => ViolationKind::RootParentNotNull,
            Violation::Cycle { .. } => ViolationKind::Cycle,
            Violation::ParentMismatch { .. } => ViolationKind::ParentMismatch,
            Violation::OrderViolation { .. } => ViolationKind::OrderViolation,
            Violation::DanglingLink { .. } => ViolationKind::DanglingLink,
        }
    }

    /// Key of the offending node. `None` only for a dangling root index.
    pub fn key(&self) -> Option<&K> {
        match self {
            Violation::RootParentNotNull { key, .. }
            | Violation::Cycle { key }
            | Violation::ParentMismatch { key, .. }
            | Violation::OrderViolation { key } => Some(key),
            Violation::DanglingLink { from, .. } => from.as_ref(),
        }
    }
}

/// Check every structural invariant of the tree under `root`.
pub fn verify<K, N>(arena: &[N], root: Option<u32>, options: VerifyOptions) -> Result<(), Violation<K>>
where
    K: Ord + Clone + Debug,
    N: KeyNode<K>,
{
    let result = run_checks(arena, root, options);

    #[cfg(feature = "tracing")]
    if let Err(violation) = &result {
        tracing::debug!(kind = ?violation.kind(), %violation, "tree verification failed");
    }

    result
}

/// [`verify`] collapsed to pass/fail.
pub fn is_valid<K, N>(arena: &[N], root: Option<u32>, options: VerifyOptions) -> bool
where
    K: Ord + Clone + Debug,
    N: KeyNode<K>,
{
    verify(arena, root, options).is_ok()
}

fn run_checks<K, N>(arena: &[N], root: Option<u32>, options: VerifyOptions) -> Result<(), Violation<K>>
where
    K: Ord + Clone,
    N: KeyNode<K>,
{
    let Some(root) = root else {
        return Ok(());
    };

    let node = slot::<K, N>(arena, root, None)?;
    if let Some(parent) = node.p() {
        return Err(Violation::RootParentNotNull {
            key: node.key().clone(),
            parent,
        });
    }

    if options.check_cycles {
        check_cycles(arena, root)?;
    }
    check_links(arena, root)?;
    check_order(arena, root)
}

fn slot<'a, K, N>(arena: &'a [N], index: u32, from: Option<&N>) -> Result<&'a N, Violation<K>>
where
    K: Clone,
    N: KeyNode<K>,
{
    arena.get(index as usize).ok_or_else(|| Violation::DanglingLink {
        from: from.map(|n| n.key().clone()),
        index,
    })
}

/// Visited-set preorder scan over child links starting at `root`.
///
/// Unlike [`verify`], `root` may be any node, parent or not, which makes this
/// usable on a subtree or a hand-built fixture.
pub fn check_cycles<K, N>(arena: &[N], root: u32) -> Result<(), Violation<K>>
where
    K: Clone,
    N: KeyNode<K>,
{
    slot::<K, N>(arena, root, None)?;
    let mut visited = vec![false; arena.len()];
    let mut stack = vec![root];
    while let Some(i) = stack.pop() {
        let node = &arena[i as usize];
        if std::mem::replace(&mut visited[i as usize], true) {
            return Err(Violation::Cycle {
                key: node.key().clone(),
            });
        }
        // Push right first so the scan runs in preorder.
        for child in [node.r(), node.l()].into_iter().flatten() {
            slot::<K, N>(arena, child, Some(node))?;
            stack.push(child);
        }
    }
    Ok(())
}

fn check_links<K, N>(arena: &[N], root: u32) -> Result<(), Violation<K>>
where
    K: Ord + Clone,
    N: KeyNode<K>,
{
    let mut budget = arena.len();
    let mut stack = vec![root];
    while let Some(i) = stack.pop() {
        let node = &arena[i as usize];
        if budget == 0 {
            return Err(Violation::Cycle {
                key: node.key().clone(),
            });
        }
        budget -= 1;

        for (child, is_left) in [(node.l(), true), (node.r(), false)] {
            let Some(child) = child else {
                continue;
            };
            let c = slot::<K, N>(arena, child, Some(node))?;
            if c.p() != Some(i) {
                return Err(Violation::ParentMismatch {
                    key: c.key().clone(),
                    expected: i,
                    actual: c.p(),
                });
            }
            let wrong_side = if is_left {
                c.key() >= node.key()
            } else {
                c.key() <= node.key()
            };
            if wrong_side {
                return Err(Violation::OrderViolation {
                    key: c.key().clone(),
                });
            }
            stack.push(child);
        }
    }
    Ok(())
}

fn check_order<K, N>(arena: &[N], root: u32) -> Result<(), Violation<K>>
where
    K: Ord + Clone,
    N: KeyNode<K>,
{
    let mut budget = arena.len();
    let mut stack: Vec<(u32, Option<&K>, Option<&K>)> = vec![(root, None, None)];
    while let Some((i, low, high)) = stack.pop() {
        let node = &arena[i as usize];
        let key = node.key();
        if budget == 0 {
            return Err(Violation::Cycle { key: key.clone() });
        }
        budget -= 1;

        let above_low = low.map_or(true, |lo| key > lo);
        let below_high = high.map_or(true, |hi| key < hi);
        if !(above_low && below_high) {
            return Err(Violation::OrderViolation { key: key.clone() });
        }
        if let Some(l) = node.l() {
            slot::<K, N>(arena, l, Some(node))?;
            stack.push((l, low, Some(key)));
        }
        if let Some(r) = node.r() {
            slot::<K, N>(arena, r, Some(node))?;
            stack.push((r, Some(key), high));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::SplayNode;

    #[test]
    fn empty_tree_passes() {
        let arena: Vec<SplayNode<i32>> = Vec::new();
        assert_eq!(verify(&arena, None, VerifyOptions::default()), Ok(()));
    }

    #[test]
    fn dangling_root_index() {
        let arena: Vec<SplayNode<i32>> = vec![SplayNode::new(1)];
        let err = verify(&arena, Some(3), VerifyOptions::default()).unwrap_err();
        assert_eq!(err, Violation::DanglingLink { from: None, index: 3 });
        assert_eq!(err.key(), None);
    }

    #[test]
    fn display_matches_diagnostic_wording() {
        let v: Violation<i32> = Violation::ParentMismatch {
            key: 3,
            expected: 0,
            actual: None,
        };
        assert_eq!(
            v.to_string(),
            "found node 3 with incorrect parent pointer (expected #0, found None)"
        );
        assert_eq!(v.kind(), ViolationKind::ParentMismatch);
        assert_eq!(v.key(), Some(&3));
    }
}
