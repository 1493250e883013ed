//! Integration tests for the value/metadata layer and its JSON codec.

mod common;

use arbor::config::JsonConfig;
use arbor::value::{AttributeView, Payload};
use arbor::{Error, ValueNode};
use common::sample_tree;
use indexmap::IndexMap;
use serde_json::{json, Value};

#[test]
fn test_json_roundtrip_scenario() {
    let encoded = json!({
        "value": 1,
        "data": {"foo": "bar"},
        "children": {"b": {"value": 2}}
    });

    let root = ValueNode::from_json(&encoded).unwrap();
    assert_eq!(root.value(), json!(1));
    assert_eq!(root.attribute("foo"), AttributeView::User(Some(json!("bar"))));
    assert_eq!(root.pick("b").unwrap().value(), json!(2));

    let copy = ValueNode::from_json(&root.to_json()).unwrap();
    assert_eq!(copy.to_json(), root.to_json());
    assert_ne!(copy, root);
    assert_ne!(copy.pick("b"), root.pick("b"));
}

#[test]
fn test_string_roundtrip_preserves_order() {
    let root = ValueNode::default();
    for key in ["zeta", "alpha", "mid"] {
        root.put_value(key, json!(key), None).unwrap();
    }
    root.set_attribute("z", json!(1)).unwrap();
    root.set_attribute("a", json!(2)).unwrap();

    let text = root.to_json_string(false).unwrap();
    let decoded = ValueNode::from_json_str(&text).unwrap();

    let keys: Vec<_> = decoded.children().keys().cloned().collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    let names: Vec<_> = decoded.data().keys().cloned().collect();
    assert_eq!(names, vec!["z", "a"]);
}

#[test]
fn test_pretty_output_follows_config() {
    let root = sample_tree();
    let config = JsonConfig {
        pretty: Some(true),
        indent: Some(3),
    };
    let text = root.to_json_string_with(&config).unwrap();
    assert!(text.starts_with("{\n   \"value\""), "{text}");

    let reparsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(reparsed, root.to_json());
}

#[test]
fn test_structural_attributes_read_only() {
    let root = sample_tree();
    let a = root.pick("a").unwrap();

    for name in ["parent", "key", "children"] {
        let err = a.set_attribute(name, json!(1)).unwrap_err();
        assert!(err.is_invalid_attribute(), "{name}");
        assert!(a.remove_attribute(name).unwrap_err().is_invalid_attribute());
    }
    assert!(a.data().is_empty());

    assert_eq!(a.attribute("parent"), AttributeView::Parent(Some(root.clone())));
    assert_eq!(a.attribute("key"), AttributeView::Key(Some("a".to_string())));
    match a.attribute("children") {
        AttributeView::Children(children) => {
            assert_eq!(children.keys().collect::<Vec<_>>(), vec!["c", "d"]);
        }
        other => panic!("unexpected view: {other:?}"),
    }
}

#[test]
fn test_user_attributes() {
    let node = ValueNode::default();
    assert_eq!(node.attribute("color"), AttributeView::User(None));

    node.set_attribute("color", json!("red")).unwrap();
    assert_eq!(node.attribute("color"), AttributeView::User(Some(json!("red"))));
    assert_eq!(node.remove_attribute("color").unwrap(), Some(json!("red")));
    assert_eq!(node.remove_attribute("color").unwrap(), None);
}

#[test]
fn test_put_value_with_invalid_data_creates_nothing() {
    let root = ValueNode::default();
    let mut data = IndexMap::new();
    data.insert("ok".to_string(), json!(1));
    data.insert("parent".to_string(), json!(2));

    let err = root.put_value("x/y", json!(0), Some(data)).unwrap_err();
    assert!(err.is_invalid_attribute());
    assert!(root.children().is_empty());
}

#[test]
fn test_put_value_merges_data() {
    let root = ValueNode::default();
    let mut first = IndexMap::new();
    first.insert("a".to_string(), json!(1));
    first.insert("b".to_string(), json!(2));
    root.put_value("n", json!("v1"), Some(first)).unwrap();

    let mut second = IndexMap::new();
    second.insert("b".to_string(), json!(20));
    let node = root.put_value("n", json!("v2"), Some(second)).unwrap();

    assert_eq!(node.value(), json!("v2"));
    assert_eq!(node.data()["a"], json!(1));
    assert_eq!(node.data()["b"], json!(20));
}

#[test]
fn test_put_node_empty_path_fails() {
    let root = ValueNode::default();
    let other = ValueNode::default();
    assert!(matches!(
        root.put_node("", &other),
        Err(Error::EmptyPathNotAllowed)
    ));
    assert!(matches!(
        root.put_node("///", &other),
        Err(Error::EmptyPathNotAllowed)
    ));
}

#[test]
fn test_put_node_moves_existing_node() {
    let root = sample_tree();
    let c = root.pick("a/c").unwrap();

    root.put_node("b/new/spot", &c).unwrap();

    assert_eq!(root.pick("b/new/spot"), Some(c.clone()));
    assert_eq!(root.pick("a/c"), None);
    assert_eq!(root.pick("b/new").unwrap().value(), Value::Null);
}

#[test]
fn test_put_node_cycle_leaves_tree_unchanged() {
    let root = sample_tree();
    let a = root.pick("a").unwrap();
    let before = root.to_json();

    let err = a.put_node("c/deeper/x", &root).unwrap_err();
    assert!(err.is_circular_reference());
    assert_eq!(root.to_json(), before);
}

#[test]
fn test_map_builds_isomorphic_tree() {
    let root = sample_tree();
    root.pick("a").unwrap().set_attribute("tag", json!(true)).unwrap();

    let upper = root.map(|payload| Payload {
        value: json!(payload.value.as_str().unwrap_or_default().to_uppercase()),
        data: payload.data.clone(),
    });

    assert_eq!(upper.pick("a/d").unwrap().value(), json!("D"));
    assert_eq!(upper.pick("a").unwrap().data()["tag"], json!(true));
    assert_eq!(upper.flatten().len(), root.flatten().len());
    assert_eq!(root.pick("a/d").unwrap().value(), json!("d"));
}

#[test]
fn test_pick_or_create_uses_default_value() {
    let root = ValueNode::default();
    let leaf = root.pick_or_create("x/y", &json!({}));
    assert_eq!(leaf.value(), json!({}));
    assert_eq!(root.pick("x").unwrap().value(), json!({}));
    assert_eq!(root.pick_or_create("x/y", &json!(null)), leaf);
}

#[test]
fn test_deep_clone_is_independent() {
    let root = sample_tree();
    let copy = root.deep_clone().unwrap();

    copy.pick("a").unwrap().detach();
    assert!(root.pick("a/c").is_some());
    assert_eq!(copy.descendants().len(), 1);
}
