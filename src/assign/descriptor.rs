#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The durable test artifact: one descriptor per question, serialized as
//! pretty-printed JSON and read back through a plain deserializer. The
//! file is data only; loading it never evaluates anything.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use typed_builder::TypedBuilder;

/// Why a descriptor file could not be loaded.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// The file could not be read at all.
    #[error("could not read descriptor file {}", path.display())]
    Io {
        /// Path of the offending file.
        path:   PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file's contents do not deserialize into a descriptor.
    #[error("descriptor file {} is malformed: {source}", path.display())]
    Malformed {
        /// Path of the offending file.
        path:   PathBuf,
        /// Underlying deserialization failure.
        #[source]
        source: serde_json::Error,
    },
}

/// A single executable test case derived from one test cell.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Case {
    /// Doctest-transcript code followed by the expected output line.
    pub code:   String,
    /// Whether the case is withheld from the released tests.
    pub hidden: bool,
    /// Whether the case is locked; always false at creation.
    pub locked: bool,
}

/// How a suite's cases are executed by the checker.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SuiteType {
    /// Interactive-transcript cases interleaving statements and output.
    Doctest,
}

/// An ordered group of cases; exactly one suite is emitted per question.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Suite {
    /// Cases in cell-traversal order.
    pub cases:      Vec<Case>,
    /// Whether the suite counts toward the score.
    pub scored:     bool,
    /// Setup code run before the cases.
    pub setup:      String,
    /// Teardown code run after the cases.
    pub teardown:   String,
    /// Execution style of the suite.
    #[serde(rename = "type")]
    pub suite_type: SuiteType,
}

/// The serialized unit persisted to one file per question.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TypedBuilder)]
#[serde(deny_unknown_fields)]
pub struct TestDescriptor {
    /// Question name; also the descriptor's file stem.
    #[builder(setter(into))]
    pub name:   String,
    /// Points awarded for the question.
    #[serde(default = "default_points")]
    #[builder(default = default_points())]
    pub points: f64,
    /// Ordered suites of cases.
    pub suites: Vec<Suite>,
}

/// Points awarded when the question metadata does not say otherwise.
fn default_points() -> f64 {
    1.0
}

impl TestDescriptor {
    /// Returns the total number of cases across all suites.
    pub fn case_count(&self) -> usize {
        self.suites.iter().map(|s| s.cases.len()).sum()
    }

    /// Returns the number of hidden cases across all suites.
    pub fn hidden_count(&self) -> usize {
        self.suites
            .iter()
            .flat_map(|s| &s.cases)
            .filter(|c| c.hidden)
            .count()
    }
}

/// Writes a test descriptor file, pretty-printed for diffability.
pub fn write_test(path: &Path, test: &TestDescriptor) -> Result<()> {
    let rendered = serde_json::to_string_pretty(test)
        .with_context(|| format!("Could not serialize descriptor {}", test.name))?;
    let mut file = fs::File::create(path)
        .with_context(|| format!("Could not create descriptor file {}", path.display()))?;
    file.write_all(rendered.as_bytes())
        .and_then(|_| file.write_all(b"\n"))
        .with_context(|| format!("Could not write descriptor file {}", path.display()))
}

/// Loads a test descriptor file written by [`write_test`].
pub fn load_test(path: &Path) -> Result<TestDescriptor, DescriptorError> {
    let raw = fs::read_to_string(path).map_err(|source| DescriptorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DescriptorError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}
