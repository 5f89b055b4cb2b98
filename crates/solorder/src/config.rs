//! Configuration types for Solorder.
//!
//! All types implement [`serde::Deserialize`] and every field has a default,
//! so an empty configuration source is the same as [`AppConfig::default`].
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration.
//! - [`ClassifierConfig`] - How the classifier counts braces.
//! - [`CompareConfig`] - Where exercise projects live and which names the
//!   declaration comparison ignores.
//!
//! # Example
//!
//! ```
//! # use solorder::config::AppConfig;
//! # use solorder::scanner::BraceCounting;
//! let config = AppConfig::default();
//! assert_eq!(config.classifier().brace_counting(), BraceCounting::Raw);
//! assert_eq!(config.compare().project_root().to_str(), Some("foundry"));
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use solorder_parser::{declarations::DenyList, scanner::BraceCounting};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Classifier section.
    #[serde(default)]
    classifier: ClassifierConfig,

    /// Declaration comparison section.
    #[serde(default)]
    compare: CompareConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(classifier: ClassifierConfig, compare: CompareConfig) -> Self {
        Self {
            classifier,
            compare,
        }
    }

    /// Returns the classifier configuration.
    pub fn classifier(&self) -> &ClassifierConfig {
        &self.classifier
    }

    /// Returns the comparison configuration.
    pub fn compare(&self) -> &CompareConfig {
        &self.compare
    }

    /// Returns a copy of this configuration with another project root.
    pub fn with_project_root(mut self, project_root: impl Into<PathBuf>) -> Self {
        self.compare = self.compare.with_project_root(project_root);
        self
    }
}

/// Classifier configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ClassifierConfig {
    /// [`BraceCounting`] mode, `"raw"` or `"lexical"`.
    #[serde(default)]
    brace_counting: BraceCounting,
}

impl ClassifierConfig {
    /// Creates a new [`ClassifierConfig`].
    pub fn new(brace_counting: BraceCounting) -> Self {
        Self { brace_counting }
    }

    /// Returns the brace counting mode.
    pub fn brace_counting(&self) -> BraceCounting {
        self.brace_counting
    }
}

/// Declaration comparison configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Directory holding the numbered exercise projects.
    project_root: PathBuf,

    /// Function names never reported.
    function_deny_list: Vec<String>,

    /// Event names never reported.
    event_deny_list: Vec<String>,

    /// Struct names never reported.
    struct_deny_list: Vec<String>,
}

impl CompareConfig {
    /// Returns the default project root.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Returns a copy of this configuration with another project root.
    pub fn with_project_root(mut self, project_root: impl Into<PathBuf>) -> Self {
        self.project_root = project_root.into();
        self
    }

    /// Builds the [`DenyList`] used for declaration extraction.
    pub fn deny_list(&self) -> DenyList {
        DenyList::new(
            self.function_deny_list.iter().map(String::as_str),
            self.event_deny_list.iter().map(String::as_str),
            self.struct_deny_list.iter().map(String::as_str),
        )
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        let deny = DenyList::default();
        Self {
            project_root: PathBuf::from("foundry"),
            function_deny_list: deny.functions().iter().cloned().collect(),
            event_deny_list: deny.events().iter().cloned().collect(),
            struct_deny_list: deny.structs().iter().cloned().collect(),
        }
    }
}
