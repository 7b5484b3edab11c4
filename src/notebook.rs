#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Serde model for the notebook container format.
//!
//! Only the fields the extraction pipeline reads are modeled explicitly;
//! everything else is carried through untouched so that rewriting a
//! notebook preserves content this tool does not understand. Notebook
//! content is data here, never executed.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A parsed notebook document.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Notebook {
    /// Ordered cells of the notebook.
    #[serde(default)]
    pub cells:          Vec<Cell>,
    /// Notebook-level metadata, carried through unmodified.
    #[serde(default)]
    pub metadata:       Map<String, Value>,
    /// Major format version.
    #[serde(default = "default_nbformat")]
    pub nbformat:       u32,
    /// Minor format version.
    #[serde(default = "default_nbformat_minor")]
    pub nbformat_minor: u32,
}

/// Default major format version for notebooks built from scratch.
fn default_nbformat() -> u32 {
    4
}

/// Default minor format version for notebooks built from scratch.
fn default_nbformat_minor() -> u32 {
    5
}

impl Notebook {
    /// Reads and parses a notebook file.
    pub fn open(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read notebook {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Could not parse notebook {}", path.display()))
    }

    /// Writes the notebook to a file, pretty-printed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let rendered = serde_json::to_string_pretty(self)
            .context("Could not serialize notebook")?;
        std::fs::write(path, rendered + "\n")
            .with_context(|| format!("Could not write notebook {}", path.display()))
    }
}

/// The kind of a notebook cell.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CellType {
    /// An executable code cell.
    Code,
    /// A markdown prose cell.
    Markdown,
    /// A raw text cell.
    Raw,
}

/// A single notebook cell.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Cell {
    /// Cell kind; only code cells are candidates for test extraction.
    pub cell_type:       CellType,
    /// Stable cell identifier (format 4.5 and later).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id:              Option<String>,
    /// Cell metadata, including the editable/deletable lock flags.
    #[serde(default)]
    pub metadata:        Map<String, Value>,
    /// Cell source text.
    #[serde(default)]
    pub source:          SourceText,
    /// Recorded outputs; present only on code cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs:         Option<Vec<Output>>,
    /// Execution counter; present only on code cells, often null.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_count: Option<Value>,
    /// Any cell fields this tool does not model, carried through.
    #[serde(flatten)]
    pub extra:           Map<String, Value>,
}

impl Cell {
    /// Builds a fresh code cell around the given source, with a generated
    /// id, no outputs, and empty metadata.
    pub fn new_code(source: impl Into<String>) -> Self {
        Self {
            cell_type:       CellType::Code,
            id:              Some(Uuid::new_v4().to_string()),
            metadata:        Map::new(),
            source:          SourceText::Lines(vec![source.into()]),
            outputs:         Some(Vec::new()),
            execution_count: Some(Value::Null),
            extra:           Map::new(),
        }
    }

    /// Marks the cell as immutable to end-user edits in the notebook UI.
    pub fn lock(&mut self) {
        self.metadata.insert("editable".to_string(), Value::Bool(false));
        self.metadata.insert("deletable".to_string(), Value::Bool(false));
    }

    /// Returns the recorded outputs, empty for cells that carry none.
    pub fn outputs(&self) -> &[Output] {
        self.outputs.as_deref().unwrap_or_default()
    }
}

/// Multiline text as stored by the container format: either one joined
/// string or a list of line strings.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum SourceText {
    /// A single string with embedded newlines.
    Joined(String),
    /// A list of lines, each usually newline-terminated.
    Lines(Vec<String>),
}

impl Default for SourceText {
    fn default() -> Self {
        SourceText::Lines(Vec::new())
    }
}

impl SourceText {
    /// Returns the source as a list of lines with line terminators removed.
    pub fn lines(&self) -> Vec<String> {
        match self {
            SourceText::Joined(s) => s.split('\n').map(str::to_string).collect(),
            SourceText::Lines(lines) => {
                lines.iter().map(|l| l.trim_matches('\n').to_string()).collect()
            }
        }
    }

    /// Returns the raw text with embedded newlines preserved.
    pub fn text(&self) -> String {
        match self {
            SourceText::Joined(s) => s.clone(),
            SourceText::Lines(lines) => lines.concat(),
        }
    }
}

/// One recorded output of a code cell.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Output {
    /// Stream text, if this is a stream output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text:  Option<SourceText>,
    /// MIME-keyed payloads, if this is a rich output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data:  Option<Map<String, Value>>,
    /// Any output fields this tool does not model, carried through.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Output {
    /// Returns the `text/plain` rendering of this output, taking the first
    /// element when the payload is a list.
    pub fn text_plain(&self) -> Option<&str> {
        match self.data.as_ref()?.get("text/plain")? {
            Value::String(s) => Some(s.as_str()),
            Value::Array(items) => match items.first() {
                Some(Value::String(s)) => Some(s.as_str()),
                _ => None,
            },
            _ => None,
        }
    }
}
