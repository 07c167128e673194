//! The recursive AST-to-PHP renderer and its entry points.

use crate::error::{Error, Result};
use crate::format::format_scalar;
use std::fs;
use std::path::{Path, PathBuf};
use yaml2php_ast::{MapEntry, Node, Scalar, parse_document};

/// The YAML merge-key token. Map entries under this key are suppressed,
/// not merged.
const MERGE_KEY: &str = "<<";

/// Program text returned when the input parses to no document at all.
const EMPTY_PROGRAM: &str = "<?php\nreturn array();";

/// Formatting options for the emitted PHP literal.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Emit multi-line, indented output instead of a single dense line.
    pub pretty: bool,

    /// Spaces per nesting level when pretty mode is on.
    pub indent: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 4,
        }
    }
}

/// Convert a YAML file into a loadable PHP program text.
///
/// Relative `!include` paths anywhere in the document (at any include
/// depth) resolve against the directory of `path`.
///
/// # Errors
///
/// Returns an error if the file (or any file in its include chain) cannot
/// be read or parsed, or if the include chain forms a cycle.
pub fn from_file(path: impl AsRef<Path>, options: &EmitOptions) -> Result<String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let doc = parse_document(&content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let base_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut emitter = Emitter::new(options, Some(base_dir));
    // Seed the cycle guard with the root file so direct self-inclusion is
    // caught too.
    if let Ok(canonical) = path.canonicalize() {
        emitter.visited.push(canonical);
    }
    emitter.program(doc)
}

/// Convert raw YAML text into a loadable PHP program text.
///
/// String input has no base directory, so the document must not contain
/// `!include` directives; use [`from_string_with_base`] to enable them.
pub fn from_string(text: &str, options: &EmitOptions) -> Result<String> {
    let doc = parse_document(text).map_err(Error::ParseInput)?;
    Emitter::new(options, None).program(doc)
}

/// Convert raw YAML text, resolving `!include` paths against `base_dir`.
pub fn from_string_with_base(
    text: &str,
    base_dir: impl AsRef<Path>,
    options: &EmitOptions,
) -> Result<String> {
    let doc = parse_document(text).map_err(Error::ParseInput)?;
    Emitter::new(options, Some(base_dir.as_ref().to_path_buf())).program(doc)
}

/// Recursive visitor that renders AST nodes as PHP literal text.
///
/// Nesting depth is threaded through each call as an explicit parameter;
/// the only mutable state is the visited-path stack guarding against
/// include cycles.
struct Emitter<'a> {
    options: &'a EmitOptions,
    base_dir: Option<PathBuf>,

    /// Canonical paths of the include chain currently being rendered.
    visited: Vec<PathBuf>,
}

impl<'a> Emitter<'a> {
    fn new(options: &'a EmitOptions, base_dir: Option<PathBuf>) -> Self {
        Self {
            options,
            base_dir,
            visited: Vec::new(),
        }
    }

    /// Wrap a rendered document in the `<?php return ...;` program text.
    fn program(&mut self, doc: Option<Node>) -> Result<String> {
        match doc {
            Some(node) => Ok(format!("<?php\nreturn {};", self.render(&node, 0)?)),
            None => Ok(EMPTY_PROGRAM.to_string()),
        }
    }

    fn render(&mut self, node: &Node, depth: usize) -> Result<String> {
        match node {
            Node::Scalar(scalar) => Ok(format_scalar(scalar)),
            Node::Map(entries) => self.render_map(entries, depth),
            Node::Seq(items) => self.render_seq(items, depth),
            Node::Include(reference) => self.render_include(reference, depth),
        }
    }

    fn render_map(&mut self, entries: &[MapEntry], depth: usize) -> Result<String> {
        let inner = depth + 1;
        let mut parts = Vec::new();

        for entry in entries {
            if is_merge_key(&entry.key) {
                continue;
            }
            let pair = format!(
                "{} => {}",
                format_scalar(&entry.key),
                self.render(&entry.value, inner)?
            );
            parts.push(self.line(&pair, inner));
        }

        Ok(format!(
            "array({}{}",
            parts.join(", "),
            self.line(")", depth)
        ))
    }

    fn render_seq(&mut self, items: &[Node], depth: usize) -> Result<String> {
        let inner = depth + 1;
        let mut parts = Vec::new();

        for item in items {
            let rendered = self.render(item, inner)?;
            parts.push(self.line(&rendered, inner));
        }

        Ok(format!(
            "array({}{}",
            parts.join(", "),
            self.line(")", depth)
        ))
    }

    /// Splice another YAML file's rendered content at the inclusion point.
    ///
    /// The included root renders at the current depth with the same
    /// options and base directory, so its text nests correctly where it
    /// is spliced. It carries no pretty prefix of its own.
    fn render_include(&mut self, reference: &str, depth: usize) -> Result<String> {
        let Some(base_dir) = self.base_dir.clone() else {
            return Err(Error::NoIncludeBase {
                path: reference.to_string(),
            });
        };
        let target = base_dir.join(reference);

        tracing::debug!(path = %target.display(), "resolving include");

        let content = fs::read_to_string(&target).map_err(|source| Error::Load {
            path: target.clone(),
            source,
        })?;

        let canonical = target.canonicalize().map_err(|source| Error::Load {
            path: target.clone(),
            source,
        })?;
        if self.visited.contains(&canonical) {
            return Err(Error::IncludeCycle {
                chain: self.chain_description(&canonical),
                path: target,
            });
        }

        let doc = parse_document(&content).map_err(|source| Error::Parse {
            path: target.clone(),
            source,
        })?;

        // An empty included document splices in an empty array.
        let Some(root) = doc else {
            return Ok("array()".to_string());
        };

        self.visited.push(canonical);
        let rendered = self.render(&root, depth);
        self.visited.pop();
        rendered
    }

    fn chain_description(&self, target: &Path) -> String {
        let mut parts: Vec<String> = self
            .visited
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        parts.push(target.display().to_string());
        parts.join(" includes ")
    }

    /// Prefix `value` with a newline and depth-proportional indentation in
    /// pretty mode; pass it through unchanged otherwise.
    fn line(&self, value: &str, depth: usize) -> String {
        if self.options.pretty {
            format!(
                "\n{}{}",
                " ".repeat(self.options.indent * depth),
                value
            )
        } else {
            value.to_string()
        }
    }
}

fn is_merge_key(key: &Scalar) -> bool {
    key.as_str() == Some(MERGE_KEY)
}
