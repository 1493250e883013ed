//! Common test utilities for integration tests.

use arbor::ValueNode;
use serde_json::{json, Value};

/// Builds `root -> a -> {c, d}, root -> b` with each value equal to its key.
#[allow(dead_code)]
pub fn sample_tree() -> ValueNode {
    let root = ValueNode::with_value(json!("root"));
    for path in ["a", "a/c", "a/d", "b"] {
        let key = path.rsplit('/').next().unwrap_or(path);
        root.put_value(path, json!(key), None).unwrap();
    }
    root
}

/// Values of `nodes` in order.
#[allow(dead_code)]
pub fn values(nodes: &[ValueNode]) -> Vec<Value> {
    nodes.iter().map(ValueNode::value).collect()
}
