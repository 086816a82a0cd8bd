//! Translation document model and key flattening
//!
//! A translation document is a tree of mappings whose leaves are opaque JSON values.
//! Sequences are leaves too: a list of strings is one translation, never a subtree,
//! so flattening does not descend into it.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeMap};
use serde_json::Value;

/// Separator used to join keys into a key path
pub const KEY_SEPARATOR: char = '.';

/// Dot-joined chain of keys from the document root to a leaf
pub type KeyPath = String;

/// Ordered set of key paths, iteration is lexicographic
pub type KeySet = BTreeSet<KeyPath>;

/// A node of a translation document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationNode {
    /// Keyed children, in file order
    Mapping(IndexMap<String, TranslationNode>),
    /// Any non-mapping value: string, number, boolean, null or sequence
    Leaf(Value)
}

impl TranslationNode {
    /// Parse a document from JSON text
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Render the document as 2-space indented JSON, non-ASCII kept literal
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn as_mapping(&self) -> Option<&IndexMap<String, TranslationNode>> {
        match self {
            TranslationNode::Mapping(entries) => Some(entries),
            TranslationNode::Leaf(_) => None
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut IndexMap<String, TranslationNode>> {
        match self {
            TranslationNode::Mapping(entries) => Some(entries),
            TranslationNode::Leaf(_) => None
        }
    }

    /// Child node under `key`, when this node is a mapping
    pub fn get(&self, key: &str) -> Option<&TranslationNode> {
        self.as_mapping().and_then(|entries| entries.get(key))
    }

    /// All key paths of this document
    pub fn key_set(&self) -> KeySet {
        flatten(self, "")
    }

    /// Number of leaves in the tree
    pub fn leaf_count(&self) -> usize {
        match self {
            TranslationNode::Mapping(entries) => entries.values().map(TranslationNode::leaf_count).sum(),
            TranslationNode::Leaf(_) => 1
        }
    }
}

impl Default for TranslationNode {
    fn default() -> Self {
        TranslationNode::Mapping(IndexMap::new())
    }
}

impl From<Value> for TranslationNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                TranslationNode::Mapping(map.into_iter().map(|(key, child)| (key, TranslationNode::from(child))).collect())
            }
            other => TranslationNode::Leaf(other)
        }
    }
}

impl From<TranslationNode> for Value {
    fn from(node: TranslationNode) -> Self {
        match node {
            TranslationNode::Mapping(entries) => {
                Value::Object(entries.into_iter().map(|(key, child)| (key, Value::from(child))).collect())
            }
            TranslationNode::Leaf(value) => value
        }
    }
}

impl Serialize for TranslationNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TranslationNode::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, child) in entries {
                    map.serialize_entry(key, child)?;
                }
                map.end()
            }
            TranslationNode::Leaf(value) => value.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for TranslationNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(TranslationNode::from)
    }
}

/// Extend `prefix` with `key`, or start a new path when `prefix` is empty
pub fn join_key(prefix: &str, key: &str) -> KeyPath {
    if prefix.is_empty() { key.to_string() } else { format!("{}{}{}", prefix, KEY_SEPARATOR, key) }
}

/// Collect the key path of every leaf under `node`.
///
/// A leaf at the root yields the empty key path. Empty mappings contribute nothing.
pub fn flatten(node: &TranslationNode, prefix: &str) -> KeySet {
    let mut keys = KeySet::new();
    collect_keys(node, prefix, &mut keys);
    keys
}

fn collect_keys(node: &TranslationNode, prefix: &str, keys: &mut KeySet) {
    match node {
        TranslationNode::Mapping(entries) => {
            for (key, child) in entries {
                collect_keys(child, &join_key(prefix, key), keys);
            }
        }
        TranslationNode::Leaf(_) => {
            keys.insert(prefix.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn node(value: Value) -> TranslationNode {
        TranslationNode::from(value)
    }

    #[test]
    fn test_flatten_nested_tool_title() {
        let doc = node(json!({"tools": {"t1": {"title": "X"}}}));

        let keys = doc.key_set();

        assert_eq!(keys.into_iter().collect::<Vec<_>>(), vec!["tools.t1.title".to_string()]);
    }

    #[test]
    fn test_flatten_one_path_per_leaf() {
        let doc = node(json!({
            "nav": {"home": "Home", "about": "About"},
            "tools": {
                "uuid": {"title": "UUID", "count": 3, "enabled": true, "removed": null},
                "hash": {"title": "Hash", "algorithms": ["md5", "sha1"]}
            },
            "footer": "©"
        }));

        let keys = doc.key_set();

        assert_eq!(keys.len(), doc.leaf_count());
        assert_eq!(keys.len(), 9);
        assert!(keys.contains("tools.uuid.removed"));
        assert!(keys.contains("tools.hash.algorithms"));
        assert!(keys.contains("footer"));
    }

    #[test]
    fn test_flatten_is_deterministic() {
        let doc = node(json!({"b": {"y": 1, "x": 2}, "a": "z"}));

        assert_eq!(doc.key_set(), doc.key_set());
        assert_eq!(doc.key_set().into_iter().collect::<Vec<_>>(), vec!["a", "b.x", "b.y"]);
    }

    #[test]
    fn test_sequences_are_opaque_leaves() {
        let doc = node(json!({"list": [{"nested": "a"}, "b"]}));

        let keys = doc.key_set();

        assert_eq!(keys.len(), 1);
        assert!(keys.contains("list"));
    }

    #[test]
    fn test_root_leaf_yields_empty_key_path() {
        let doc = node(json!("just a string"));

        let keys = doc.key_set();

        assert_eq!(keys.len(), 1);
        assert!(keys.contains(""));
    }

    #[test]
    fn test_empty_mapping_has_no_keys() {
        let doc = node(json!({"empty": {}}));

        assert!(doc.key_set().is_empty());
        assert_eq!(doc.leaf_count(), 0);
    }

    #[test]
    fn test_flatten_with_prefix() {
        let doc = node(json!({"title": "X"}));

        let keys = flatten(&doc, "tools.t1");

        assert!(keys.contains("tools.t1.title"));
    }

    #[test]
    fn test_pretty_json_keeps_order_and_unicode() {
        let content = r#"{"zeta": {"title": "Größe"}, "alpha": "日本語"}"#;

        let doc = TranslationNode::from_json_str(content).unwrap();
        let rendered = doc.to_json_pretty().unwrap();

        assert_eq!(rendered, "{\n  \"zeta\": {\n    \"title\": \"Größe\"\n  },\n  \"alpha\": \"日本語\"\n}");
    }

    #[test]
    fn test_value_round_trip() {
        let value = json!({"a": {"b": [1, 2], "c": null}});

        let back = Value::from(TranslationNode::from(value.clone()));

        assert_eq!(back, value);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(TranslationNode::from_json_str("{\"a\": ").is_err());
    }
}
