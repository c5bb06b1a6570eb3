//! Debug rendering of a tree shape.
//!
//! Output is line-per-node with box-drawing branches; left children are
//! marked `←`, right children `→`. The walk uses an explicit stack and a
//! visited set, so a corrupted arena renders instead of hanging: a node met a
//! second time prints as `CYCLE (key)` and is not descended, an index past
//! the end of the arena prints as `DANGLING (#i)`.

use std::fmt::{Display, Write};

use crate::types::KeyNode;

pub const HEADER: &str = "--- Tree structure ---";

struct Line {
    tab: String,
    branch: &'static str,
    side: &'static str,
    last: bool,
    link: Option<u32>,
}

/// Render the tree under `root`.
pub fn render<K, N>(arena: &[N], root: Option<u32>) -> String
where
    K: Display,
    N: KeyNode<K>,
{
    let mut out = String::from(HEADER);
    if root.is_none() {
        out.push_str("\n(empty)");
        return out;
    }

    let mut visited = vec![false; arena.len()];
    let mut stack = vec![Line {
        tab: String::new(),
        branch: "",
        side: "",
        last: true,
        link: root,
    }];
    while let Some(line) = stack.pop() {
        out.push('\n');
        out.push_str(&line.tab);
        out.push_str(line.branch);
        out.push_str(line.side);

        let Some(i) = line.link else {
            out.push('∅');
            continue;
        };
        let Some(node) = arena.get(i as usize) else {
            let _ = write!(out, "DANGLING (#{i})");
            continue;
        };
        if std::mem::replace(&mut visited[i as usize], true) {
            let _ = write!(out, "CYCLE ({})", node.key());
            continue;
        }

        let _ = write!(out, "{}", node.key());
        if let Some(p) = node.p() {
            match arena.get(p as usize) {
                Some(parent) => {
                    let _ = write!(out, " [p = {}]", parent.key());
                }
                None => {
                    let _ = write!(out, " [p = #{p}?]");
                }
            }
        }

        // Leaves print no children; otherwise both slots are shown.
        if node.l().is_none() && node.r().is_none() {
            continue;
        }
        let child_tab = if line.branch.is_empty() {
            String::new()
        } else {
            format!("{}{}", line.tab, if line.last { "   " } else { "│  " })
        };
        // The stack is LIFO: push the right child first so the left one
        // prints first.
        stack.push(Line {
            tab: child_tab.clone(),
            branch: "└─ ",
            side: "→ ",
            last: true,
            link: node.r(),
        });
        stack.push(Line {
            tab: child_tab,
            branch: "├─ ",
            side: "← ",
            last: false,
            link: node.l(),
        });
    }
    out
}
