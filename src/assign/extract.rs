#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The notebook transformation pipeline.
//!
//! Walks a master notebook cell by cell: question blocks open a question,
//! test cells belonging to it are collected, and each question's run of
//! test cells is replaced in the output notebook by a single locked cell
//! that invokes the checker. Every other cell passes through unchanged.

use std::path::Path;

use anyhow::{Context, Result, bail};
use itertools::Itertools;
use tracing::info;

use super::{
    question::{self, Question},
    tests::{self, Test},
};
use crate::notebook::{Cell, Notebook};

/// Runs the extraction pipeline over one notebook.
///
/// Reads `notebook_path`, writes one descriptor per question into
/// `tests_dir` (created if missing), and writes the transformed notebook
/// to `output_path`. Descriptor writes happen as each question closes,
/// before the transformed notebook is written.
pub fn extract_notebook(notebook_path: &Path, output_path: &Path, tests_dir: &Path) -> Result<()> {
    let notebook = Notebook::open(notebook_path)?;
    std::fs::create_dir_all(tests_dir)
        .with_context(|| format!("Could not create tests directory {}", tests_dir.display()))?;

    let mut out_cells: Vec<Cell> = Vec::with_capacity(notebook.cells.len());
    let mut current: Option<Question> = None;
    let mut pending: Vec<Test> = Vec::new();
    let mut questions: Vec<String> = Vec::new();

    for (index, cell) in notebook.cells.iter().enumerate() {
        if let Some(next) = question::parse_question(cell)
            .with_context(|| format!("Invalid question block in cell {index}"))?
        {
            questions
                .extend(close_question(current.take(), &mut pending, tests_dir, &mut out_cells)?);
            current = Some(next);
            out_cells.push(cell.clone());
            continue;
        }

        if tests::is_test_cell(cell) {
            if current.is_none() {
                bail!("Test cell at index {index} is not inside a question block");
            }
            let test = tests::read_test(cell)
                .with_context(|| format!("Could not read test cell at index {index}"))?;
            pending.push(test);
            continue;
        }

        // Any other cell ends the question's test run, if one has started.
        if !pending.is_empty() {
            questions
                .extend(close_question(current.take(), &mut pending, tests_dir, &mut out_cells)?);
        }
        out_cells.push(cell.clone());
    }
    questions.extend(close_question(current.take(), &mut pending, tests_dir, &mut out_cells)?);

    let transformed = Notebook {
        cells: out_cells,
        ..notebook
    };
    transformed.save(output_path)?;

    info!(
        "Extracted {} question(s) [{}] from {} into {}",
        questions.len(),
        questions.iter().join(", "),
        notebook_path.display(),
        tests_dir.display()
    );

    Ok(())
}

/// Closes the open question, if any: synthesizes its descriptor, pushes
/// the companion checker cell, and returns the question name. A question
/// without test cells emits nothing.
fn close_question(
    question: Option<Question>,
    pending: &mut Vec<Test>,
    tests_dir: &Path,
    out_cells: &mut Vec<Cell>,
) -> Result<Option<String>> {
    let Some(question) = question else {
        return Ok(None);
    };
    if pending.is_empty() {
        return Ok(None);
    }

    let collected = std::mem::take(pending);
    let cell = tests::gen_test_cell(&question, &collected, tests_dir)?;
    out_cells.push(cell);
    Ok(Some(question.name))
}
