//! Typed YAML AST nodes.

/// A leaf YAML value with its inferred primitive type.
///
/// Type inference is total: every scalar resolves to exactly one variant.
/// Plain scalars are classified as bool/int/float/null where they match the
/// YAML 1.1 forms; everything else (including all quoted, literal, and
/// folded scalars) is a `String`.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Null,
}

impl Scalar {
    /// The string content, if this scalar is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }
}

/// One key/value pair inside a map.
///
/// Keys are always scalars; the parser rejects documents with complex keys.
#[derive(Debug, Clone, PartialEq)]
pub struct MapEntry {
    pub key: Scalar,
    pub value: Node,
}

/// A parsed YAML document node.
///
/// `Include` comes from a scalar tagged `!include`; it carries the
/// referenced file path (relative to the including document) and resolves
/// to another document's root at emit time.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Scalar(Scalar),
    Map(Vec<MapEntry>),
    Seq(Vec<Node>),
    Include(String),
}

impl Node {
    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Node::Map(_))
    }

    pub fn is_seq(&self) -> bool {
        matches!(self, Node::Seq(_))
    }

    /// Look up a map value by string key. Returns `None` for non-maps.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Map(entries) => entries
                .iter()
                .find(|e| e.key.as_str() == Some(key))
                .map(|e| &e.value),
            _ => None,
        }
    }

    /// The items of a sequence node, if this is one.
    pub fn as_seq(&self) -> Option<&[Node]> {
        match self {
            Node::Seq(items) => Some(items),
            _ => None,
        }
    }
}
