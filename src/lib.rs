//! # nbcheck
//!
//! A build-time tool for programming-course notebooks: it extracts test
//! cells from an authored notebook, synthesizes doctest-style test
//! descriptors (one file per question), and strips hidden cases from a
//! descriptor directory before release to students.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// For reading test cells and synthesizing test descriptors
pub mod assign;
/// Runtime configuration shared across the crate
pub mod config;
/// For rendering an overview of a tests directory
pub mod info;
/// Notebook container model and cell helpers
pub mod notebook;
/// Utility functions for convenience
pub mod util;
