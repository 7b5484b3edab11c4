#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # nbcheck
//!
//! Command-line entry point for the notebook test extraction toolkit:
//! `extract` turns an authored notebook into a student notebook plus a
//! directory of test descriptors, `strip` removes hidden cases from an
//! already-written descriptor directory, and `info` summarizes one.

use std::path::PathBuf;

use anyhow::Result;
use bpaf::*;
use dotenvy::dotenv;
use nbcheck::{assign, config, info};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Extract test cells from a notebook into descriptor files
    Extract {
        /// Directory the descriptors are written into.
        tests_dir: PathBuf,
        /// Path the transformed notebook is written to.
        output:    PathBuf,
        /// Path to the authored notebook.
        notebook:  PathBuf,
    },
    /// Remove hidden cases from a descriptor directory
    Strip(PathBuf),
    /// Summarize a descriptor directory
    Info(PathBuf),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses a tests directory path
    fn d() -> impl Parser<PathBuf> {
        positional("TESTS_DIR").help("Path to the test descriptor directory")
    }

    let extract = {
        let tests_dir = long("tests-dir")
            .short('t')
            .help("Directory to write test descriptors to")
            .argument::<PathBuf>("DIR")
            .fallback(PathBuf::from("tests"));
        let output = long("output")
            .short('o')
            .help("Path to write the transformed notebook to")
            .argument::<PathBuf>("NOTEBOOK");
        let notebook = positional::<PathBuf>("NOTEBOOK").help("Path to the authored notebook");

        construct!(Cmd::Extract {
            tests_dir,
            output,
            notebook
        })
        .to_options()
        .command("extract")
        .help("Extract test cells from a notebook into test descriptor files")
    };

    let strip = construct!(Cmd::Strip(d()))
        .to_options()
        .command("strip")
        .help("Remove hidden test cases from a descriptor directory");

    let info = construct!(Cmd::Info(d()))
        .to_options()
        .command("info")
        .help("Print an overview of a descriptor directory");

    let cmd = construct!([extract, strip, info]);

    cmd.to_options()
        .descr("Test extraction tool for course notebooks")
        .run()
}

fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    // Surface a bad NBCHECK_TEST_MARKER or NBCHECK_CHECKER before any work.
    config::ensure_initialized()?;

    match options() {
        Cmd::Extract {
            tests_dir,
            output,
            notebook,
        } => assign::extract_notebook(&notebook, &output, &tests_dir)?,
        Cmd::Strip(tests_dir) => assign::remove_hidden_tests(&tests_dir)?,
        Cmd::Info(tests_dir) => info::show_tests_dir(&tests_dir)?,
    };

    Ok(())
}
