//! JSON encoding of value trees.
//!
//! A node encodes as an object with three fields:
//!
//! ```json
//! { "value": 1, "data": { "foo": "bar" }, "children": { "b": { "value": 2, "data": {}, "children": {} } } }
//! ```
//!
//! Encoding always writes all three fields, children in insertion order.
//! Decoding treats a missing `value` as `null` and missing `data` or
//! `children` as empty, and ignores unknown fields. Both directions walk the
//! tree with an explicit stack rather than recursion, and JSON text is parsed
//! without serde_json's nesting limit, so any tree this module writes can be
//! read back regardless of depth.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};

use super::{Payload, ValueNode};
use crate::config::JsonConfig;
use crate::error::{Error, Result};
use crate::path::TreePath;
use crate::store::{Intrinsic, Node, RelationshipStore};

fn invalid(path: &TreePath, message: &str) -> Error {
    let location = if path.is_empty() {
        "root".to_string()
    } else {
        format!("'{path}'")
    };
    Error::InvalidFormat {
        reason: format!("node at {location}: {message}"),
    }
}

fn object_field<'a>(
    object: &'a Map<String, Value>,
    field: &str,
    path: &TreePath,
) -> Result<Option<&'a Map<String, Value>>> {
    match object.get(field) {
        None => Ok(None),
        Some(Value::Object(inner)) => Ok(Some(inner)),
        Some(_) => Err(invalid(path, &format!("`{field}` must be an object"))),
    }
}

/// Serialize `value` using the output settings in `config`.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] if serialization fails.
///
/// # Examples
///
/// ```
/// use arbor::config::JsonConfig;
/// use arbor::value::codec::render;
/// use serde_json::json;
///
/// let config = JsonConfig { pretty: Some(true), indent: Some(4) };
/// assert_eq!(render(&json!({"a": 1}), &config).unwrap(), "{\n    \"a\": 1\n}");
/// ```
pub fn render(value: &Value, config: &JsonConfig) -> Result<String> {
    if !config.pretty() {
        return Ok(serde_json::to_string(value)?);
    }

    let indent = " ".repeat(config.indent());
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    String::from_utf8(buffer).map_err(|e| Error::InvalidFormat {
        reason: e.to_string(),
    })
}

/// Parse JSON text with no nesting limit, growing the stack as needed.
fn parse_unbounded(encoded: &str) -> Result<Value> {
    let mut deserializer = serde_json::Deserializer::from_str(encoded);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}

fn encode_one(payload: &Payload, children: Map<String, Value>) -> Value {
    let mut object = Map::new();
    object.insert("value".to_string(), payload.value.clone());
    object.insert(
        "data".to_string(),
        Value::Object(
            payload
                .data
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
        ),
    );
    object.insert("children".to_string(), Value::Object(children));
    Value::Object(object)
}

impl Node<Payload> {
    /// Encode this subtree as a JSON value.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor::ValueNode;
    /// use serde_json::json;
    ///
    /// let root = ValueNode::with_value(json!(1));
    /// root.put_value("b", json!(2), None).unwrap();
    ///
    /// assert_eq!(
    ///     root.to_json(),
    ///     json!({
    ///         "value": 1,
    ///         "data": {},
    ///         "children": {"b": {"value": 2, "data": {}, "children": {}}}
    ///     })
    /// );
    /// ```
    #[must_use]
    pub fn to_json(&self) -> Value {
        // Reverse pre-order visits every child before its parent.
        let order: Vec<ValueNode> = self.walk().map(|(node, _)| node).collect();
        let mut encoded: HashMap<ValueNode, Value> = HashMap::with_capacity(order.len());

        for node in order.into_iter().rev() {
            let children: Map<String, Value> = node
                .children()
                .into_iter()
                .map(|(key, child)| {
                    let value = encoded.remove(&child).unwrap_or(Value::Null);
                    (key, value)
                })
                .collect();
            let value = encode_one(&node.payload(), children);
            encoded.insert(node, value);
        }

        encoded.remove(self).unwrap_or(Value::Null)
    }

    /// Encode this subtree as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if serialization fails.
    pub fn to_json_string(&self, pretty: bool) -> Result<String> {
        let value = self.to_json();
        let encoded = if pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(encoded)
    }

    /// Encode this subtree as a JSON string using the output settings in
    /// `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if serialization fails.
    pub fn to_json_string_with(&self, config: &JsonConfig) -> Result<String> {
        render(&self.to_json(), config)
    }

    /// Decode a tree from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if the value, or any node position
    /// inside it, is not an object, or if `data`/`children` are not objects.
    /// Returns [`Error::InvalidAttribute`] if `data` uses a reserved name.
    pub fn from_json(value: &Value) -> Result<Self> {
        let mut store = Intrinsic::new();
        let root = Self::default();
        let mut stack = vec![(root.clone(), value, TreePath::root())];

        while let Some((node, encoded, path)) = stack.pop() {
            let object = encoded
                .as_object()
                .ok_or_else(|| invalid(&path, "expected an object"))?;

            node.set_value(object.get("value").cloned().unwrap_or(Value::Null));

            let children = object_field(object, "children", &path)?;
            for (key, child) in children.into_iter().flatten() {
                let created = Self::default();
                store.link(&node, key, &created);
                stack.push((created, child, path.child(key.clone())));
            }

            if let Some(data) = object_field(object, "data", &path)? {
                node.set_data(
                    data.iter()
                        .map(|(name, value)| (name.clone(), value.clone()))
                        .collect(),
                )?;
            }
        }

        Ok(root)
    }

    /// Decode a tree from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] for malformed JSON or a malformed
    /// document, and [`Error::InvalidAttribute`] for reserved `data` names.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor::ValueNode;
    ///
    /// let root = ValueNode::from_json_str(r#"{"value": 1, "children": {"b": {"value": 2}}}"#).unwrap();
    /// assert_eq!(root.pick("b").unwrap().value(), 2);
    ///
    /// assert!(ValueNode::from_json_str("[1, 2]").is_err());
    /// assert!(ValueNode::from_json_str("{").is_err());
    /// ```
    pub fn from_json_str(encoded: &str) -> Result<Self> {
        Self::from_json(&parse_unbounded(encoded)?)
    }

    /// Deep copy by encoding and decoding.
    ///
    /// The copy has the same values, attributes and shape, and shares no node
    /// with the original.
    ///
    /// # Errors
    ///
    /// Propagates decoding errors, which a tree built through this API cannot
    /// produce.
    pub fn deep_clone(&self) -> Result<Self> {
        Self::from_json(&self.to_json())
    }
}
