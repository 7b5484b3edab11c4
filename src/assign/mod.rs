#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Test extraction and synthesis for assignment notebooks.

/// Serialized test descriptor model and file format.
pub mod descriptor;
/// Source-line to doctest-transcript conversion.
pub mod doctest;
/// Notebook transformation pipeline.
pub mod extract;
/// Question metadata blocks.
pub mod question;

pub use descriptor::{Case, DescriptorError, Suite, SuiteType, TestDescriptor, load_test, write_test};
pub use extract::extract_notebook;
pub use question::Question;
pub use tests::{
    Test, gen_case, gen_suite, gen_test_cell, is_test_cell, read_test, remove_hidden_tests,
};
