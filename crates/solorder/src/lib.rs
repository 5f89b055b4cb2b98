//! Solorder - canonical member ordering for Solidity source files.
//!
//! Classification, reassembly, and the exercise/solution declaration check.
//! Lines are never rewritten; each one is assigned a category and the
//! categories are emitted in a fixed order.

pub mod config;
pub mod solutions;

mod error;
mod reassemble;

pub use solorder_core::{category, document, source};
pub use solorder_parser::{Classification, Span, declarations, error as diagnostic, scanner};

pub use error::SolorderError;
pub use reassemble::reassemble;

use std::{fs, path::Path};

use log::{debug, info, trace};

use solorder_parser::Classifier;

use config::AppConfig;
use document::ClassifiedDocument;

/// Builder for classifying and reordering Solidity sources.
///
/// # Examples
///
/// ```rust
/// use solorder::{Reorderer, config::AppConfig};
///
/// let source = "contract A {\n    event E();\n    uint256 x;\n}";
///
/// let reorderer = Reorderer::new(AppConfig::default());
/// let classification = reorderer.classify(source);
/// assert!(classification.diagnostics().is_empty());
///
/// let output = reorderer.render(classification.document());
/// assert_eq!(output, "contract A {\n\n    uint256 x;\n\n    event E();\n\n}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Reorderer {
    config: AppConfig,
}

impl Reorderer {
    /// Create a new reorderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Classify every line of `source`.
    ///
    /// Classification never fails. Structural problems such as an
    /// unterminated block are reported as warnings on the returned
    /// [`Classification`].
    pub fn classify<'a>(&self, source: &'a str) -> Classification<'a> {
        let brace_counting = self.config.classifier().brace_counting();
        info!(brace_counting:?; "Classifying source");

        let classification = Classifier::new(brace_counting).classify(source);

        debug!(
            lines = classification.document().len(),
            warnings = classification.diagnostics().len();
            "Source classified"
        );
        trace!(document:? = classification.document(); "Classified document");

        classification
    }

    /// Render a classified document in canonical order.
    pub fn render(&self, document: &ClassifiedDocument<'_>) -> String {
        info!("Reassembling document");
        reassemble(document)
    }

    /// Classify and render in one step, discarding warnings.
    pub fn reorder(&self, source: &str) -> String {
        let classification = self.classify(source);
        self.render(classification.document())
    }

    /// Read a Solidity file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`SolorderError::InputNotFound`] when `path` does not exist
    /// and [`SolorderError::Io`] when it cannot be read.
    pub fn read_source(&self, path: impl AsRef<Path>) -> Result<String, SolorderError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SolorderError::InputNotFound(path.to_path_buf()));
        }

        debug!(path:? = path; "Reading source file");
        Ok(fs::read_to_string(path)?)
    }
}

/// Reorder `source` with the default configuration.
///
/// ```
/// let output = solorder::reorder("contract A {\n    function f() external {}\n    uint256 x;\n}");
/// assert_eq!(output, "contract A {\n\n    uint256 x;\n\n    function f() external {}\n\n}");
/// ```
pub fn reorder(source: &str) -> String {
    Reorderer::default().reorder(source)
}
