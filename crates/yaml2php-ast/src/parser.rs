//! Event-stream parser that builds typed AST trees.

use crate::{Error, MapEntry, Node, Result, Scalar};
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::{Marker, TScalarStyle};

/// Parse a single YAML document into an AST node.
///
/// If the input contains multiple documents, only the first one is parsed.
/// Returns `Ok(None)` when the stream contains no document at all (empty
/// input), which callers map to their empty-document fallback.
///
/// # Example
///
/// ```rust
/// use yaml2php_ast::parse_document;
///
/// let doc = parse_document("title: My App").unwrap().unwrap();
/// assert!(doc.is_map());
/// ```
///
/// # Errors
///
/// Returns an error if the YAML is malformed or uses a structure this tool
/// cannot represent (e.g. a non-scalar mapping key).
pub fn parse_document(content: &str) -> Result<Option<Node>> {
    let mut parser = Parser::new_from_str(content);
    let mut builder = AstBuilder::new();

    parser
        .load(&mut builder, false) // false = single document only
        .map_err(Error::from)?;

    builder.finish()
}

/// Builder that implements MarkedEventReceiver to construct the AST.
struct AstBuilder {
    /// Stack of containers being constructed
    stack: Vec<BuildNode>,

    /// The completed root node
    root: Option<Node>,

    /// First structural violation encountered, reported by `finish`
    error: Option<Error>,
}

/// A container being constructed during parsing.
enum BuildNode {
    Seq(Vec<Node>),
    Map {
        entries: Vec<MapEntry>,
        pending_key: Option<Scalar>,
    },
}

impl AstBuilder {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            root: None,
            error: None,
        }
    }

    fn finish(self) -> Result<Option<Node>> {
        if let Some(error) = self.error {
            return Err(error);
        }
        Ok(self.root)
    }

    fn push_complete(&mut self, node: Node) {
        if self.error.is_some() {
            return;
        }

        match self.stack.last_mut() {
            None => {
                // This is the root
                self.root = Some(node);
            }
            Some(BuildNode::Seq(items)) => {
                items.push(node);
            }
            Some(BuildNode::Map {
                entries,
                pending_key,
            }) => {
                if let Some(key) = pending_key.take() {
                    entries.push(MapEntry { key, value: node });
                } else {
                    // Key position: only scalars are representable
                    match node {
                        Node::Scalar(key) => *pending_key = Some(key),
                        Node::Include(path) => {
                            self.error = Some(Error::InvalidStructure(format!(
                                "!include {path:?} cannot be used as a mapping key"
                            )));
                        }
                        Node::Map(_) | Node::Seq(_) => {
                            self.error = Some(Error::InvalidStructure(
                                "mapping keys must be scalars".into(),
                            ));
                        }
                    }
                }
            }
        }
    }
}

impl MarkedEventReceiver for AstBuilder {
    fn on_event(&mut self, ev: Event, _marker: Marker) {
        match ev {
            Event::Nothing => {}

            Event::StreamStart => {}
            Event::StreamEnd => {}
            Event::DocumentStart => {}
            Event::DocumentEnd => {}

            Event::Scalar(value, style, _anchor_id, tag) => {
                let is_include = tag.as_ref().is_some_and(|t| t.suffix == "include");
                let node = if is_include {
                    Node::Include(value)
                } else {
                    Node::Scalar(infer_scalar(&value, style))
                };
                self.push_complete(node);
            }

            Event::SequenceStart(_anchor_id, _tag) => {
                self.stack.push(BuildNode::Seq(Vec::new()));
            }

            Event::SequenceEnd => {
                let build_node = self.stack.pop().expect("SequenceEnd without SequenceStart");

                if let BuildNode::Seq(items) = build_node {
                    self.push_complete(Node::Seq(items));
                } else {
                    panic!("Expected Seq build node");
                }
            }

            Event::MappingStart(_anchor_id, _tag) => {
                self.stack.push(BuildNode::Map {
                    entries: Vec::new(),
                    pending_key: None,
                });
            }

            Event::MappingEnd => {
                let build_node = self.stack.pop().expect("MappingEnd without MappingStart");

                if let BuildNode::Map { entries, .. } = build_node {
                    self.push_complete(Node::Map(entries));
                } else {
                    panic!("Expected Map build node");
                }
            }

            Event::Alias(_anchor_id) => {
                // Aliases are not resolved; they degrade to null
                self.push_complete(Node::Scalar(Scalar::Null));
            }
        }
    }
}

/// Infer the primitive type of a scalar from its text and quoting style.
///
/// Only plain (unquoted) scalars undergo inference; quoted, literal, and
/// folded scalars are always strings.
fn infer_scalar(value: &str, style: TScalarStyle) -> Scalar {
    if style != TScalarStyle::Plain {
        return Scalar::String(value.to_string());
    }

    // YAML 1.1 boolean and null forms
    match value {
        "true" | "True" | "TRUE" | "yes" | "Yes" | "YES" | "on" | "On" | "ON" => {
            return Scalar::Bool(true);
        }
        "false" | "False" | "FALSE" | "no" | "No" | "NO" | "off" | "Off" | "OFF" => {
            return Scalar::Bool(false);
        }
        "null" | "Null" | "NULL" | "~" | "" => {
            return Scalar::Null;
        }
        _ => {}
    }

    if let Ok(i) = value.parse::<i64>() {
        return Scalar::Int(i);
    }

    // The digit guard keeps words Rust would accept as floats ("nan",
    // "inf") classified as strings.
    if looks_numeric(value) {
        if let Ok(f) = value.parse::<f64>() {
            return Scalar::Float(f);
        }
    }

    Scalar::String(value.to_string())
}

fn looks_numeric(value: &str) -> bool {
    value.bytes().any(|b| b.is_ascii_digit())
        && value
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
}
