#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Overview tables for a directory of test descriptors.

use std::path::Path;

use anyhow::{Context, Result};
use tabled::{
    Table, Tabled,
    settings::{Panel, Style},
};
use tracing::warn;

use crate::{assign::load_test, config, util::find_files};

/// One table row summarizing a descriptor file.
#[derive(Tabled)]
struct DescriptorRow {
    /// Question name.
    #[tabled(rename = "Question")]
    name:   String,
    /// Points awarded for the question.
    #[tabled(rename = "Points")]
    points: f64,
    /// Number of suites in the descriptor.
    #[tabled(rename = "Suites")]
    suites: usize,
    /// Total number of cases.
    #[tabled(rename = "Cases")]
    cases:  usize,
    /// Number of hidden cases.
    #[tabled(rename = "Hidden")]
    hidden: usize,
}

/// Prints an overview table of every descriptor in a tests directory.
pub fn show_tests_dir(tests_dir: &Path) -> Result<()> {
    let mut files = find_files(config::DESCRIPTOR_EXT, 0, tests_dir)?;
    files.sort();

    let mut rows = Vec::with_capacity(files.len());
    for path in files {
        let descriptor = load_test(&path)
            .with_context(|| format!("Could not load descriptor {}", path.display()))?;
        rows.push(DescriptorRow {
            name:   descriptor.name.clone(),
            points: descriptor.points,
            suites: descriptor.suites.len(),
            cases:  descriptor.case_count(),
            hidden: descriptor.hidden_count(),
        });
    }

    if rows.is_empty() {
        warn!("No test descriptors found in {}", tests_dir.display());
        return Ok(());
    }

    eprintln!(
        "{}",
        Table::new(&rows)
            .with(Panel::header("Test Descriptors"))
            .with(Style::modern())
    );

    Ok(())
}
