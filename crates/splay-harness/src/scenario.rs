//! The two harness scenarios.
//!
//! [`rotate_scenario`] checks single rotations on hand-built fixtures;
//! [`tree_scenario`] drives a [`SplayTree`] through a seeded insert pass and
//! a seeded find pass, verifying the whole structure after every step and
//! stopping at the first problem.

use splay_tree::{check_cycles, rotate, SplayNode, SplayTree, VerifyOptions};
use tracing::{debug, info};

use crate::config::HarnessConfig;
use crate::error::{Phase, ScenarioError};
use crate::permutation::Permutation;

/// Summary of a passing [`tree_scenario`].
#[derive(Clone, Debug)]
pub struct ScenarioReport {
    pub inserted: usize,
    pub found: usize,
    pub height: usize,
    pub balance: f64,
    /// Final tree, rendered.
    pub tree: String,
}

/// Validate `config`, then run both scenarios.
pub fn run(config: &HarnessConfig) -> Result<ScenarioReport, ScenarioError> {
    config.validate()?;
    rotate_scenario()?;
    tree_scenario(config)
}

fn ensure(ok: bool, what: &str) -> Result<(), ScenarioError> {
    if ok {
        Ok(())
    } else {
        Err(ScenarioError::Rotate(what.to_string()))
    }
}

fn no_cycle_below(arena: &[SplayNode<i64>], from: u32) -> Result<(), ScenarioError> {
    check_cycles(arena, from)
        .map_err(|v| ScenarioError::Rotate(format!("rotation created a cycle: {v}")))
}

/// Rotate a child over its parent in both orientations, then once more with
/// absent siblings and no grandparent.
///
/// Each fixture is an arena owned by this function, so every node is freed
/// however the checks end.
pub fn rotate_scenario() -> Result<(), ScenarioError> {
    const ROOT: u32 = 0;
    const X: u32 = 1;
    const Y: u32 = 2;
    const Z: u32 = 3;
    const C: u32 = 4;
    const P: u32 = 5;
    let leaf = |k: i64, p: u32| SplayNode::with_links(k, Some(p), None, None);

    info!("testing rotate");

    //      p          c
    //     / \        / \
    //    c   Z  →   X   p
    //   / \            / \
    //  X   Y          Y   Z
    let mut arena = vec![
        SplayNode::new(10000),
        leaf(-10, C),
        leaf(-20, C),
        leaf(-30, P),
        SplayNode::with_links(2, Some(P), Some(X), Some(Y)),
        SplayNode::with_links(1, Some(ROOT), Some(C), Some(Z)),
    ];
    rotate(&mut arena, C, P);
    let (c, p) = (&arena[C as usize], &arena[P as usize]);
    ensure(c.p == Some(ROOT), "parent's parent is not preserved")?;
    ensure(c.r == Some(P), "rotate did not make parent into child")?;
    ensure(c.l == Some(X), "left child of child should be unchanged")?;
    ensure(p.l == Some(Y), "child's right child should become left child of parent")?;
    ensure(p.r == Some(Z), "right child of parent should be unchanged")?;
    ensure(p.p == Some(C), "parent->parent is not original child")?;
    ensure(arena[Y as usize].p == Some(P), "moved subtree still points at child")?;
    no_cycle_below(&arena, C)?;

    //    p              c
    //   / \            / \
    //  X   c    →     p   Z
    //     / \        / \
    //    Y   Z      X   Y
    let mut arena = vec![
        SplayNode::new(10000),
        leaf(-10, P),
        leaf(-20, C),
        leaf(-30, C),
        SplayNode::with_links(2, Some(P), Some(Y), Some(Z)),
        SplayNode::with_links(1, Some(ROOT), Some(X), Some(C)),
    ];
    rotate(&mut arena, C, P);
    let (c, p) = (&arena[C as usize], &arena[P as usize]);
    ensure(c.p == Some(ROOT), "parent's parent is not preserved")?;
    ensure(c.l == Some(P), "rotate did not make parent into child")?;
    ensure(p.l == Some(X), "left child of parent should be unchanged")?;
    ensure(c.r == Some(Z), "right child of child should be unchanged")?;
    ensure(p.r == Some(Y), "left child of child should become right child of parent")?;
    ensure(p.p == Some(C), "parent->parent is not original child")?;
    no_cycle_below(&arena, C)?;

    // Null siblings, null grandparent.
    let mut arena = vec![
        SplayNode::with_links(0, None, Some(1), None),
        SplayNode::with_links(1, Some(0), None, None),
    ];
    rotate(&mut arena, 1, 0);
    ensure(arena[0].p == Some(1), "parent did not become the child")?;
    ensure(arena[1].r == Some(0), "parent did not become right child")?;
    ensure(arena[1].p.is_none(), "new root kept a parent")?;

    info!("rotate OK");
    Ok(())
}

fn check_step(
    tree: &SplayTree<i64>,
    phase: Phase,
    key: i64,
    options: VerifyOptions,
) -> Result<(), ScenarioError> {
    tree.verify(options)
        .map_err(|violation| ScenarioError::Violation {
            phase,
            key,
            violation,
            tree: tree.render(),
        })?;
    if tree.root_key() != Some(&key) {
        return Err(ScenarioError::NotAtRoot {
            phase,
            key,
            root: tree.root_key().copied(),
            tree: tree.render(),
        });
    }
    Ok(())
}

/// Insert a seeded permutation of `low..=high`, then find every key in a
/// second seeded order, then probe one key past `high`.
///
/// After every insert and every hit the tree must verify and hold the key at
/// its root. The probe must miss without adding a node.
pub fn tree_scenario(config: &HarnessConfig) -> Result<ScenarioReport, ScenarioError> {
    config.validate()?;
    let options = config.verify_options();
    let mut tree = SplayTree::new();

    let inserts = Permutation::shuffled(config.low, config.high, config.insert_seed);
    info!(seed = inserts.seed, keys = inserts.len(), "testing tree insertion");
    for key in &inserts {
        debug!(key, "insert");
        tree.insert(key);
        check_step(&tree, Phase::Insert, key, options)?;
    }

    let count = tree.count_nodes();
    if count != config.key_count() {
        return Err(ScenarioError::WrongCount {
            expected: config.key_count(),
            found: count,
            tree: tree.render(),
        });
    }
    info!(
        nodes = count,
        height = tree.height(),
        balance = tree.balance(),
        "insertion OK"
    );

    let finds = Permutation::shuffled(config.low, config.high, config.find_seed);
    info!(seed = finds.seed, "testing tree find()");
    for key in &finds {
        debug!(key, "find");
        if !tree.find(&key) {
            return Err(ScenarioError::Missing {
                key,
                tree: tree.render(),
            });
        }
        check_step(&tree, Phase::Find, key, options)?;
    }

    if let Some(absent) = config.high.checked_add(1) {
        debug!(key = absent, "probe");
        if tree.find(&absent) {
            return Err(ScenarioError::UnexpectedHit {
                key: absent,
                tree: tree.render(),
            });
        }
        tree.verify(options)
            .map_err(|violation| ScenarioError::Violation {
                phase: Phase::Miss,
                key: absent,
                violation,
                tree: tree.render(),
            })?;
        let after = tree.count_nodes();
        if after != count {
            return Err(ScenarioError::WrongCount {
                expected: count,
                found: after,
                tree: tree.render(),
            });
        }
    }

    info!(height = tree.height(), balance = tree.balance(), "find OK");
    Ok(ScenarioReport {
        inserted: count,
        found: finds.len(),
        height: tree.height(),
        balance: tree.balance(),
        tree: tree.render(),
    })
}
