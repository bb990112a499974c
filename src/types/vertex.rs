//! Vertices and the attribute bag they carry.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// A graph vertex: an ID plus arbitrary attributes.
///
/// Equality and hashing only look at the ID. A vertex referenced by an edge
/// but unknown to the datasource is represented by [`Vertex::missing`]; it
/// keeps the referenced ID, has no attributes and serializes as `null`.
#[derive(Debug, Clone, Deserialize)]
pub struct Vertex {
    /// Unique vertex ID.
    pub id: String,
    /// Attribute bag.
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(skip)]
    missing: bool,
}

impl Vertex {
    /// Create a vertex with no attributes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Map::new(),
            missing: false,
        }
    }

    /// Create a vertex with the given attributes.
    pub fn with_attributes(id: impl Into<String>, attributes: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            attributes,
            missing: false,
        }
    }

    /// Placeholder for a dangling reference to `id`.
    pub fn missing(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Map::new(),
            missing: true,
        }
    }

    /// Set a single attribute (builder style).
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// True if this vertex stands in for a reference the datasource could not resolve.
    pub fn is_missing(&self) -> bool {
        self.missing
    }

    /// Look up an attribute. Always `None` for a missing vertex.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        if self.missing {
            return None;
        }
        self.attributes.get(key)
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[derive(Serialize)]
struct VertexRepr<'a> {
    id: &'a str,
    attributes: &'a Map<String, Value>,
}

impl Serialize for Vertex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.missing {
            return serializer.serialize_none();
        }
        VertexRepr {
            id: &self.id,
            attributes: &self.attributes,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_attributes() {
        let a = Vertex::new("v/1").attr("name", "a");
        let b = Vertex::new("v/1").attr("name", "b");
        assert_eq!(a, b);
        assert_ne!(a, Vertex::new("v/2"));
    }

    #[test]
    fn missing_vertex_has_no_attributes_and_serializes_as_null() {
        let v = Vertex::missing("v/ghost");
        assert!(v.is_missing());
        assert!(v.attribute("name").is_none());
        assert_eq!(serde_json::to_value(&v).unwrap(), Value::Null);
    }

    #[test]
    fn deserializes_without_attributes() {
        let v: Vertex = serde_json::from_str(r#"{"id": "v/1"}"#).unwrap();
        assert_eq!(v.id, "v/1");
        assert!(v.attributes.is_empty());
        assert!(!v.is_missing());
    }
}
