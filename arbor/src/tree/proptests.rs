//! Property-based tests for tree operations.
//!
//! Random operation sequences run against both backings in lockstep; after
//! every step the link invariants must hold and both backings must agree.

use super::TreeOps;
use crate::path::{parse, TreePath};
use crate::store::{Intrinsic, Node, Registry};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

const NODES: usize = 8;

#[derive(Debug, Clone)]
enum Op {
    Add {
        parent: usize,
        key: String,
        child: usize,
    },
    Detach(usize),
    DetachChild {
        parent: usize,
        key: String,
    },
    Replace {
        node: usize,
        replacement: usize,
    },
}

type Shape = Vec<(Option<(usize, String)>, Vec<(String, usize)>)>;

fn key_strategy(allow_empty: bool) -> BoxedStrategy<String> {
    if allow_empty {
        prop_oneof![Just(String::new()), "[a-c]"].boxed()
    } else {
        "[a-c]".boxed()
    }
}

fn op_strategy(allow_empty: bool) -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..NODES, key_strategy(allow_empty), 0..NODES)
            .prop_map(|(parent, key, child)| Op::Add { parent, key, child }),
        1 => (0..NODES).prop_map(Op::Detach),
        1 => (0..NODES, key_strategy(allow_empty))
            .prop_map(|(parent, key)| Op::DetachChild { parent, key }),
        1 => (0..NODES, 0..NODES)
            .prop_map(|(node, replacement)| Op::Replace { node, replacement }),
    ]
}

fn index_of<N: PartialEq>(nodes: &[N], node: &N) -> usize {
    nodes
        .iter()
        .position(|n| n == node)
        .expect("store only links nodes from the fixed set")
}

fn shape<S: TreeOps>(store: &S, nodes: &[S::Node]) -> Shape {
    nodes
        .iter()
        .map(|node| {
            let parent = store
                .parent_link(node)
                .map(|(parent, key)| (index_of(nodes, &parent), key));
            let children = store
                .children(node)
                .into_iter()
                .map(|(key, child)| (key, index_of(nodes, &child)))
                .collect();
            (parent, children)
        })
        .collect()
}

fn apply<S: TreeOps>(store: &mut S, nodes: &[S::Node], op: &Op) -> bool {
    match op {
        Op::Add { parent, key, child } => {
            store.add_child(&nodes[*parent], key, &nodes[*child]).is_ok()
        }
        Op::Detach(node) => {
            store.detach(&nodes[*node]);
            true
        }
        Op::DetachChild { parent, key } => {
            store.detach_child(&nodes[*parent], key);
            true
        }
        Op::Replace { node, replacement } => store
            .replace_with(&nodes[*node], &nodes[*replacement])
            .is_ok(),
    }
}

fn check_invariants<S: TreeOps>(store: &S, nodes: &[S::Node]) -> Result<(), TestCaseError> {
    for node in nodes {
        for (key, child) in store.children(node) {
            prop_assert!(store.parent_link(&child) == Some((node.clone(), key)));
        }

        if let Some((parent, key)) = store.parent_link(node) {
            prop_assert!(store.child(&parent, &key).as_ref() == Some(node));
        }

        prop_assert_eq!(store.parent(node).is_some(), store.key(node).is_some());

        // Bounded climb so a cycle fails instead of hanging.
        let mut steps = 0;
        let mut current = store.parent(node);
        while let Some(parent) = current {
            steps += 1;
            prop_assert!(steps <= nodes.len(), "cycle above node");
            current = store.parent(&parent);
        }

        let root = store.top_ancestor(node);
        prop_assert!(store.pick(&root, store.path(node)) == Some(node.clone()));
    }
    Ok(())
}

fn run_both(ops: &[Op]) -> Result<(Registry<usize>, Vec<usize>), TestCaseError> {
    let handles: Vec<Node<usize>> = (0..NODES).map(Node::new).collect();
    let mut intrinsic = Intrinsic::new();

    let ids: Vec<usize> = (0..NODES).collect();
    let mut registry = Registry::new();

    for op in ops {
        let before = shape(&registry, &ids);

        let intrinsic_ok = apply(&mut intrinsic, &handles, op);
        let registry_ok = apply(&mut registry, &ids, op);
        prop_assert_eq!(intrinsic_ok, registry_ok, "backings disagree on {:?}", op);

        let after = shape(&registry, &ids);
        prop_assert_eq!(&shape(&intrinsic, &handles), &after);
        if !registry_ok {
            prop_assert_eq!(&before, &after, "failed {:?} changed the tree", op);
        }
        if let (true, Op::Add { parent, key, child }) = (registry_ok, op) {
            prop_assert_eq!(after[*child].0.clone(), Some((*parent, key.clone())));
        }

        check_invariants(&intrinsic, &handles)?;
        check_invariants(&registry, &ids)?;
    }

    Ok((registry, ids))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Links stay consistent and both backings agree after any sequence
    #[test]
    fn random_ops_preserve_invariants(
        ops in prop::collection::vec(op_strategy(true), 0..40)
    ) {
        run_both(&ops)?;
    }

    // Without empty keys, flatten has one entry per walked node
    #[test]
    fn flatten_agrees_with_walk(
        ops in prop::collection::vec(op_strategy(false), 0..40)
    ) {
        let (registry, ids) = run_both(&ops)?;

        for id in ids.iter().filter(|id| registry.is_root(id)) {
            let walked: Vec<_> = registry.walk(id).map(|(node, _)| node).collect();
            let flat = registry.flatten(id);

            prop_assert_eq!(flat.len(), walked.len());
            prop_assert_eq!(flat.get(""), Some(id));
            prop_assert_eq!(flat.values().copied().collect::<Vec<_>>(), walked);
            for (path, node) in &flat {
                prop_assert_eq!(registry.pick(id, path.as_str()), Some(*node));
            }
        }
    }

    // Joining keys then parsing returns the same keys
    #[test]
    fn path_string_roundtrip(keys in prop::collection::vec("[a-z0-9_.-]{1,8}", 0..8)) {
        let joined = parse::join_keys(&keys);
        prop_assert_eq!(TreePath::parse(&joined).keys(), keys.as_slice());
    }

    // Interior empty keys survive parsing
    #[test]
    fn interior_empty_keys_preserved(
        first in "[a-z]{1,4}",
        last in "[a-z]{1,4}",
        gaps in 1usize..4
    ) {
        let text = format!("{first}{}{last}", "/".repeat(gaps + 1));
        let path = TreePath::parse(&text);
        prop_assert_eq!(path.len(), gaps + 2);
        prop_assert!(path.keys()[1..=gaps].iter().all(String::is_empty));
    }
}
