//! Rotation and splay for the p / l / r links.
//!
//! Both functions take the arena slice and node indices (u32). [`rotate`] is
//! the only place that rewires existing links; [`splay`] is expressed purely
//! as a sequence of rotations.

use crate::types::Node;
use crate::util::{get_l, get_p, get_r, set_l, set_p, set_r};

// ── single rotation ───────────────────────────────────────────────────────

/// Promote `child` above `parent`.
///
/// ```text
///       g               g
///       |               |
///       p               c
///      / \     →       / \
///     c   z           x   p
///    / \                 / \
///   x   y               y   z
/// ```
///
/// The mirrored case (`child` is the right child of `parent`) moves `c.l`
/// across instead. The grandparent edge that pointed at `parent` is
/// repointed at `child`; when `parent` was the root, `child` comes out with
/// no parent. Keys are never consulted.
///
/// # Panics
///
/// If `child` is not a direct child of `parent`.
pub fn rotate<N: Node>(arena: &mut [N], child: u32, parent: u32) {
    let from_left = get_l(arena, parent) == Some(child);
    assert!(
        child != parent && (from_left || get_r(arena, parent) == Some(child)),
        "rotate: node #{child} is not a child of node #{parent}"
    );

    let g = get_p(arena, parent);
    let moved = if from_left {
        let b = get_r(arena, child);
        set_l(arena, parent, b);
        set_r(arena, child, Some(parent));
        b
    } else {
        let b = get_l(arena, child);
        set_r(arena, parent, b);
        set_l(arena, child, Some(parent));
        b
    };
    if let Some(b) = moved {
        set_p(arena, b, Some(parent));
    }

    set_p(arena, parent, Some(child));
    set_p(arena, child, g);
    if let Some(g) = g {
        if get_l(arena, g) == Some(parent) {
            set_l(arena, g, Some(child));
        } else if get_r(arena, g) == Some(parent) {
            set_r(arena, g, Some(child));
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(child, parent, grandparent = ?g, from_left, "rotate");
}

// ── splay ─────────────────────────────────────────────────────────────────

/// Splay `node` all the way to the root and return it as the new root.
///
/// - zig: parent is the root, one rotation;
/// - zig-zig: same-side child of a same-side child, rotate the parent over
///   the grandparent first, then `node` over the parent;
/// - zig-zag: opposite sides, rotate `node` up twice.
pub fn splay<N: Node>(arena: &mut [N], node: u32) -> u32 {
    while let Some(p) = get_p(arena, node) {
        let Some(g) = get_p(arena, p) else {
            rotate(arena, node, p);
            break;
        };
        let node_is_left = get_l(arena, p) == Some(node);
        let parent_is_left = get_l(arena, g) == Some(p);
        if node_is_left == parent_is_left {
            rotate(arena, p, g);
            rotate(arena, node, p);
        } else {
            rotate(arena, node, p);
            rotate(arena, node, g);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(node, "splayed to root");

    node
}
