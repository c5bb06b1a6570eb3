use std::collections::HashSet;

use splay_tree::types::Node;
use splay_tree::util::{descend, Descent};
use splay_tree::{find, first, insert, next, splay, SplayNode, SplayTree, VerifyOptions};

fn key_of(arena: &[SplayNode<i32>], idx: Option<u32>) -> Option<i32> {
    idx.map(|i| arena[i as usize].k)
}

fn inorder_keys(arena: &[SplayNode<i32>], root: Option<u32>) -> Vec<i32> {
    let mut out = Vec::new();
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        out.push(arena[i as usize].k);
        curr = next(arena, i);
    }
    out
}

fn assert_tree_links(arena: &[SplayNode<i32>], root: Option<u32>) {
    fn walk(arena: &[SplayNode<i32>], idx: u32, expected_parent: Option<u32>, visited: &mut HashSet<u32>) {
        assert!(visited.insert(idx), "cycle detected at node {idx}");
        let node = &arena[idx as usize];
        assert_eq!(node.p(), expected_parent);
        if let Some(l) = node.l() {
            walk(arena, l, Some(idx), visited);
        }
        if let Some(r) = node.r() {
            walk(arena, r, Some(idx), visited);
        }
    }

    let mut visited = HashSet::<u32>::new();
    if let Some(root) = root {
        walk(arena, root, None, &mut visited);
    }
}

/// Keys -20..=20 in a fixed scrambled order (17 is coprime with 41).
fn scrambled_range(stride: i32) -> Vec<i32> {
    (0..41).map(|i| (i * stride).rem_euclid(41) - 20).collect()
}

fn build_balanced(arena: &mut [SplayNode<i32>], lo: u32, hi: u32, parent: Option<u32>) -> Option<u32> {
    if lo >= hi {
        return None;
    }
    let mid = (lo + hi) / 2;
    arena[mid as usize].p = parent;
    arena[mid as usize].l = build_balanced(arena, lo, mid, Some(mid));
    arena[mid as usize].r = build_balanced(arena, mid + 1, hi, Some(mid));
    Some(mid)
}

#[test]
fn insert_splays_every_key_to_root_matrix() {
    let mut arena = Vec::new();
    let mut root = None;
    for k in [1, 5, 3, 9, 7, 2] {
        let out = insert(&mut arena, root, k, SplayNode::new);
        root = Some(out.root);
        assert!(out.created);
        assert_eq!(key_of(&arena, root), Some(k));
        assert_tree_links(&arena, root);
    }
    assert_eq!(inorder_keys(&arena, root), vec![1, 2, 3, 5, 7, 9]);
}

#[test]
fn splay_every_shape_matrix() {
    let keys: Vec<i32> = (0..15).collect();
    for target in 0..15u32 {
        let mut arena: Vec<SplayNode<i32>> = keys.iter().map(|&k| SplayNode::new(k)).collect();
        let root = build_balanced(&mut arena, 0, 15, None);
        assert_eq!(root, Some(7));

        let root = Some(splay(&mut arena, target));
        assert_eq!(key_of(&arena, root), Some(target as i32));
        assert_tree_links(&arena, root);
        assert_eq!(inorder_keys(&arena, root), keys);
    }
}

#[test]
fn splay_deep_chain_matrix() {
    // Ascending inserts without splaying give a right spine 0 -> 1 -> ... -> 99.
    let mut arena: Vec<SplayNode<i32>> = (0..100).map(SplayNode::new).collect();
    for i in 1..100u32 {
        arena[(i - 1) as usize].r = Some(i);
        arena[i as usize].p = Some(i - 1);
    }
    let root = Some(splay(&mut arena, 99));
    assert_eq!(key_of(&arena, root), Some(99));
    assert_tree_links(&arena, root);
    assert!(splay_tree::height(&arena, root) <= 52, "zig-zig roughly halves a spine");

    let root = Some(splay(&mut arena, 0));
    assert_eq!(key_of(&arena, root), Some(0));
    assert_eq!(inorder_keys(&arena, root), (0..100).collect::<Vec<_>>());
}

#[test]
fn find_hit_and_miss_matrix() {
    let mut tree: SplayTree<i32> = [10, 20, 30, 40].into_iter().collect();

    assert!(tree.find(&20));
    assert_eq!(tree.root_key(), Some(&20));

    // 35 falls between 30 and 40; whichever the descent ends on becomes root.
    let before = tree.len();
    assert!(!tree.find(&35));
    assert!(matches!(tree.root_key(), Some(&30) | Some(&40)));
    assert_eq!(tree.len(), before);
    assert_eq!(tree.count_nodes(), before);
    assert_eq!(tree.verify(VerifyOptions::default()), Ok(()));

    assert!(!tree.find(&-5));
    assert_eq!(tree.root_key(), Some(&10));
    assert!(!tree.find(&99));
    assert_eq!(tree.root_key(), Some(&40));
}

#[test]
fn find_miss_targets_descent_end_matrix() {
    let tree: SplayTree<i32> = [50, 25, 75, 60].into_iter().collect();
    let (mut arena, root) = tree.into_parts();
    let Descent::Vacant { last, .. } = descend(&arena, root, &65) else {
        panic!("65 is not in the tree");
    };
    let out = find(&mut arena, root, &65);
    assert!(!out.found);
    assert_eq!(out.root, last);
}

#[test]
fn duplicate_insert_keeps_count_matrix() {
    let mut tree = SplayTree::new();
    for k in [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5] {
        tree.insert(k);
        assert_eq!(tree.root_key(), Some(&k));
        assert_eq!(tree.verify(VerifyOptions::default()), Ok(()));
    }
    assert_eq!(tree.count_nodes(), 7);
    assert_eq!(tree.len(), 7);
}

#[test]
fn contains_leaves_shape_alone_matrix() {
    let tree: SplayTree<i32> = (0..10).collect();
    let root = tree.root();
    assert!(tree.contains(&4));
    assert!(!tree.contains(&10));
    assert_eq!(tree.root(), root);
}

#[test]
fn end_to_end_forty_one_keys_matrix() {
    let mut tree = SplayTree::new();
    for k in scrambled_range(17) {
        assert!(tree.insert(k));
        assert_eq!(tree.verify(VerifyOptions::default()), Ok(()), "{}", tree.render());
        assert_eq!(tree.root_key(), Some(&k), "{}", tree.render());
    }
    assert_eq!(tree.count_nodes(), 41);

    for k in scrambled_range(23) {
        assert!(tree.find(&k), "find() couldn't find {k}");
        assert_eq!(tree.verify(VerifyOptions::default()), Ok(()), "{}", tree.render());
        assert_eq!(tree.root_key(), Some(&k), "{}", tree.render());
    }
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), (-20..=20).collect::<Vec<_>>());
    assert!(tree.balance() > 0.0 && tree.balance() <= 1.0);
}
