//! Declaration name extraction for exercise/solution comparison.
//!
//! This is deliberately shallow: comments are stripped, then function, event
//! and struct names are picked out with line-anchored regular expressions.
//! It shares nothing with the classifier's brace tracking.

use std::{collections::BTreeSet, sync::LazyLock};

use log::trace;
use regex::Regex;

static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)//.*$").expect("line comment pattern is valid"));

static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("block comment pattern is valid"));

static FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*function\s+(\w+)\s*\([^)]*\)\s*(public|external|internal|private)?")
        .expect("function pattern is valid")
});

static EVENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*event\s+(\w+)\s*\([^)]*\)").expect("event pattern is valid")
});

static STRUCT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*struct\s+(\w+)\s*\{").expect("struct pattern is valid")
});

/// Names ignored when they show up as declarations.
///
/// The defaults filter identifiers the patterns are known to pick up from
/// exercise scaffolding: `visibility`, `require` and `revert` for functions,
/// `data` and `revert` for events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenyList {
    functions: BTreeSet<String>,
    events: BTreeSet<String>,
    structs: BTreeSet<String>,
}

impl DenyList {
    /// Create a deny-list from explicit name lists.
    pub fn new<S: Into<String>>(
        functions: impl IntoIterator<Item = S>,
        events: impl IntoIterator<Item = S>,
        structs: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            functions: functions.into_iter().map(Into::into).collect(),
            events: events.into_iter().map(Into::into).collect(),
            structs: structs.into_iter().map(Into::into).collect(),
        }
    }

    /// Ignored function names.
    pub fn functions(&self) -> &BTreeSet<String> {
        &self.functions
    }

    /// Ignored event names.
    pub fn events(&self) -> &BTreeSet<String> {
        &self.events
    }

    /// Ignored struct names.
    pub fn structs(&self) -> &BTreeSet<String> {
        &self.structs
    }
}

impl Default for DenyList {
    fn default() -> Self {
        Self::new(
            ["visibility", "require", "revert"],
            ["data", "revert"],
            [],
        )
    }
}

/// Function, event and struct names declared in a source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    functions: BTreeSet<String>,
    events: BTreeSet<String>,
    structs: BTreeSet<String>,
}

impl Declarations {
    /// Declared function names.
    pub fn functions(&self) -> &BTreeSet<String> {
        &self.functions
    }

    /// Declared event names.
    pub fn events(&self) -> &BTreeSet<String> {
        &self.events
    }

    /// Declared struct names.
    pub fn structs(&self) -> &BTreeSet<String> {
        &self.structs
    }

    /// Names declared here but not in `other`.
    pub fn missing_from(&self, other: &Declarations) -> DeclarationDiff {
        DeclarationDiff {
            missing_events: self.events.difference(&other.events).cloned().collect(),
            missing_funcs: self
                .functions
                .difference(&other.functions)
                .cloned()
                .collect(),
            missing_structs: self.structs.difference(&other.structs).cloned().collect(),
        }
    }
}

/// Declarations present in a user file and absent from its solution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationDiff {
    pub missing_events: BTreeSet<String>,
    pub missing_funcs: BTreeSet<String>,
    pub missing_structs: BTreeSet<String>,
}

impl DeclarationDiff {
    /// Returns `true` when nothing is missing.
    pub fn is_empty(&self) -> bool {
        self.missing_events.is_empty()
            && self.missing_funcs.is_empty()
            && self.missing_structs.is_empty()
    }
}

/// Remove `//` comments, then `/* ... */` comments.
///
/// Line comments go first, so a `/*` hidden behind `//` never opens a block.
pub fn strip_comments(source: &str) -> String {
    let without_lines = LINE_COMMENT.replace_all(source, "");
    BLOCK_COMMENT.replace_all(&without_lines, "").into_owned()
}

/// Collect declared function, event and struct names from a source file.
///
/// # Example
///
/// ```
/// # use solorder_parser::declarations::{extract_declarations, DenyList};
/// let source = "contract A {\n    event Deposit(uint256 amount);\n    // function hidden() {}\n    function withdraw() external {}\n}";
/// let declarations = extract_declarations(source, &DenyList::default());
///
/// assert!(declarations.events().contains("Deposit"));
/// assert!(declarations.functions().contains("withdraw"));
/// assert!(!declarations.functions().contains("hidden"));
/// ```
pub fn extract_declarations(source: &str, deny: &DenyList) -> Declarations {
    let code = strip_comments(source);

    let declarations = Declarations {
        functions: captured_names(&FUNCTION, &code, deny.functions()),
        events: captured_names(&EVENT, &code, deny.events()),
        structs: captured_names(&STRUCT, &code, deny.structs()),
    };

    trace!(
        functions = declarations.functions.len(),
        events = declarations.events.len(),
        structs = declarations.structs.len();
        "Extracted declarations"
    );

    declarations
}

fn captured_names(pattern: &Regex, code: &str, deny: &BTreeSet<String>) -> BTreeSet<String> {
    pattern
        .captures_iter(code)
        .filter_map(|captures| captures.get(1))
        .map(|name| name.as_str())
        .filter(|name| !deny.contains(*name))
        .map(str::to_string)
        .collect()
}
