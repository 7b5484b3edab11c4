#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Question metadata blocks in the authored notebook.
//!
//! A markdown or raw cell opens a question when its source contains a
//! `BEGIN QUESTION` line, optionally inside an HTML comment:
//!
//! ```text
//! <!-- BEGIN QUESTION
//! name: q1
//! points: 2
//! -->
//! ```
//!
//! The lines between the marker and the end of the block are parsed as
//! YAML key/value pairs.

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

use crate::notebook::{Cell, CellType};

/// Marker line opening a question metadata block.
const BEGIN_MARKER: &str = "BEGIN QUESTION";

/// Metadata for one question.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    /// Question name; becomes the descriptor's file stem.
    pub name:   String,
    /// Points awarded for the question; descriptors default to 1.
    #[serde(default)]
    pub points: Option<f64>,
}

/// Parses a question metadata block out of a cell, if it carries one.
///
/// Returns `Ok(None)` for code cells and for prose cells without a
/// `BEGIN QUESTION` marker. A marker followed by metadata that fails to
/// parse, or that lacks a usable name, is an authoring error.
pub fn parse_question(cell: &Cell) -> Result<Option<Question>> {
    if !matches!(cell.cell_type, CellType::Markdown | CellType::Raw) {
        return Ok(None);
    }

    let lines = cell.source.lines();
    let mut block: Vec<&str> = Vec::new();
    let mut in_block = false;

    for line in &lines {
        if !in_block {
            // The marker may share its line with the comment opener.
            let stripped = line.trim().trim_start_matches("<!--").trim();
            if stripped == BEGIN_MARKER {
                in_block = true;
            }
            continue;
        }
        if line.contains("-->") || line.trim() == "END QUESTION" {
            break;
        }
        block.push(line.as_str());
    }

    if !in_block {
        return Ok(None);
    }

    let question: Question = serde_yaml::from_str(&block.join("\n"))
        .context("Could not parse question metadata block")?;
    ensure!(!question.name.trim().is_empty(), "Question metadata has an empty name");
    ensure!(
        !question.name.contains(std::path::is_separator),
        "Question name {} is not usable as a file stem",
        question.name
    );

    Ok(Some(question))
}
