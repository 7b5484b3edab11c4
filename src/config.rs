#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Runtime configuration: the test-marker pattern, the checker invocation
//! template, and the on-disk descriptor conventions.

use std::sync::{Arc, Mutex, OnceLock};

use anyhow::{Context, Result, ensure};
use regex::{Regex, RegexBuilder};

/// File extension used for serialized test descriptors.
pub const DESCRIPTOR_EXT: &str = "json";

/// Package marker file name skipped when scanning a tests directory.
pub const INIT_FILE: &str = "__init__.py";

/// Default pattern recognizing test directive lines, anchored at the start
/// of the cell's first source line. Compiled case-insensitively.
const DEFAULT_TEST_MARKER: &str = r"^(##\s*(hidden\s*)?test\s*##\s*|#\s*(hidden\s*)?test\s*)";

/// Token whose presence in a directive line marks the test as hidden.
const HIDDEN_TOKEN: &str = "hidden";

/// Default checker invocation template; `{}` is replaced with the question
/// name.
const DEFAULT_CHECKER: &str = r#"grader.check("{}")"#;

/// Configuration shared across the crate.
pub struct ConfigState {
    /// Compiled test-marker pattern applied to a cell's first source line.
    test_marker:      Regex,
    /// Compiled pattern detecting the hidden token in a directive line.
    hidden_marker:    Regex,
    /// Template for the companion cell's checker invocation.
    checker_template: String,
}

impl ConfigState {
    /// Construct a new configuration instance from environment-provided
    /// values, falling back to the built-in defaults.
    fn new() -> Result<Self> {
        let marker = std::env::var("NBCHECK_TEST_MARKER")
            .unwrap_or_else(|_| DEFAULT_TEST_MARKER.to_string());
        let test_marker = RegexBuilder::new(&marker)
            .case_insensitive(true)
            .build()
            .with_context(|| format!("Invalid test marker pattern: {marker}"))?;

        let hidden_marker = RegexBuilder::new(HIDDEN_TOKEN)
            .case_insensitive(true)
            .build()
            .context("Failed to compile hidden-token pattern")?;

        let checker_template =
            std::env::var("NBCHECK_CHECKER").unwrap_or_else(|_| DEFAULT_CHECKER.to_string());
        ensure!(
            checker_template.contains("{}"),
            "Checker template must contain a {{}} placeholder for the question name: \
             {checker_template}"
        );

        Ok(Self {
            test_marker,
            hidden_marker,
            checker_template,
        })
    }

    /// Returns the compiled test-marker pattern.
    pub fn test_marker(&self) -> &Regex {
        &self.test_marker
    }

    /// Returns whether a directive line carries the hidden token.
    pub fn is_hidden(&self, line: &str) -> bool {
        self.hidden_marker.is_match(line)
    }

    /// Renders the checker invocation for a question name.
    pub fn checker_invocation(&self, name: &str) -> String {
        self.checker_template.replacen("{}", name, 1)
    }
}

/// Shared configuration handle used throughout the crate.
#[derive(Clone)]
pub struct ConfigHandle(Arc<ConfigState>);

impl std::ops::Deref for ConfigHandle {
    type Target = ConfigState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Global storage for the lazily constructed configuration state.
static CONFIG_SLOT: OnceLock<Mutex<Option<Arc<ConfigState>>>> = OnceLock::new();

/// Returns the mutex guarding the global configuration slot.
fn slot() -> &'static Mutex<Option<Arc<ConfigState>>> {
    CONFIG_SLOT.get_or_init(|| Mutex::new(None))
}

/// Ensure the global configuration has been initialized and return a handle.
pub fn ensure_initialized() -> Result<ConfigHandle> {
    let slot = slot();
    let mut guard = slot.lock().expect("config slot poisoned");
    if let Some(cfg) = guard.as_ref() {
        return Ok(ConfigHandle(Arc::clone(cfg)));
    }

    let cfg = ConfigState::new().map(Arc::new)?;
    *guard = Some(Arc::clone(&cfg));
    Ok(ConfigHandle(cfg))
}

/// Returns the active configuration, initializing it on demand.
pub fn get() -> ConfigHandle {
    ensure_initialized().expect("configuration initialization failed")
}
