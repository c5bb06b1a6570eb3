//! Whole-tree measurements.

use crate::types::Node;

use super::{get_l, get_r};

/// Number of nodes reachable from `root` through child links.
pub fn count_nodes<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut count = 0;
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        count += 1;
        stack.extend(get_l(arena, i));
        stack.extend(get_r(arena, i));
    }
    count
}

/// Nodes on the longest root-to-leaf path; 0 for an empty tree.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut max = 0;
    let mut stack: Vec<(u32, usize)> = root.map(|r| (r, 1)).into_iter().collect();
    while let Some((i, depth)) = stack.pop() {
        max = max.max(depth);
        if let Some(l) = get_l(arena, i) {
            stack.push((l, depth + 1));
        }
        if let Some(r) = get_r(arena, i) {
            stack.push((r, depth + 1));
        }
    }
    max
}

/// Balance factor in `(0, 1]`, 1 meaning perfectly balanced.
///
/// An empty subtree scores 1. A node with two children scores the mean of
/// the two; a node with one child scores half of that child.
pub fn balance<N: Node>(arena: &[N], root: Option<u32>) -> f64 {
    let Some(root) = root else {
        return 1.0;
    };

    // Post-order: a node is scored once both children have been.
    let mut score = vec![1.0_f64; arena.len()];
    let mut stack = vec![(root, false)];
    while let Some((i, children_done)) = stack.pop() {
        let l = get_l(arena, i);
        let r = get_r(arena, i);
        if !children_done {
            stack.push((i, true));
            stack.extend(l.map(|l| (l, false)));
            stack.extend(r.map(|r| (r, false)));
            continue;
        }
        score[i as usize] = match (l, r) {
            (None, None) => 1.0,
            (Some(c), None) | (None, Some(c)) => 0.5 * score[c as usize],
            (Some(l), Some(r)) => (score[l as usize] + score[r as usize]) / 2.0,
        };
    }
    score[root as usize]
}
