//! Exercise/solution declaration check.
//!
//! An exercise project tree looks like:
//!
//! ```text
//! <root>/
//!   01-basics/
//!     src/
//!       Vault.sol
//!       solution/
//!         VaultSolution.sol
//! ```
//!
//! For every user file the matching solution file is located and the
//! functions, events, and structs declared by the user file but absent from
//! the solution are reported.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use solorder_parser::declarations::{
    DeclarationDiff, Declarations, DenyList, extract_declarations,
};

use crate::{SolorderError, config::CompareConfig};

/// A user file whose solution declares names the user file lacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionMismatch {
    file: PathBuf,
    diff: DeclarationDiff,
}

impl SolutionMismatch {
    /// Path of the user file, relative to the project root.
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// The missing declarations.
    pub fn diff(&self) -> &DeclarationDiff {
        &self.diff
    }
}

/// Outcome of [`check_project_tree`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionReport {
    mismatches: Vec<SolutionMismatch>,
}

impl SolutionReport {
    /// Mismatches in the order they were found.
    pub fn mismatches(&self) -> &[SolutionMismatch] {
        &self.mismatches
    }

    /// Whether every user file matches its solution.
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

impl fmt::Display for SolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mismatches.is_empty() {
            return write!(f, "All solution files match their user files!");
        }

        writeln!(
            f,
            "Found {} file(s) with mismatches:",
            self.mismatches.len()
        )?;
        for mismatch in &self.mismatches {
            writeln!(f)?;
            writeln!(f, "  {}", mismatch.file.display())?;
            write_names(f, "events", &mismatch.diff.missing_events)?;
            write_names(f, "functions", &mismatch.diff.missing_funcs)?;
            write_names(f, "structs", &mismatch.diff.missing_structs)?;
        }
        Ok(())
    }
}

fn write_names<'a>(
    f: &mut fmt::Formatter<'_>,
    kind: &str,
    names: impl IntoIterator<Item = &'a String>,
) -> fmt::Result {
    let names: Vec<&str> = names.into_iter().map(String::as_str).collect();
    if names.is_empty() {
        return Ok(());
    }
    writeln!(f, "    Missing {kind}: {}", names.join(", "))
}

/// Locate the solution file for `user_file` inside `solution_dir`.
///
/// For a user file `Vault.sol` the candidates are `VaultSolution.sol`, the
/// same name with any `Solution` already in the stem dropped first, and the
/// file name with `.sol` replaced by `Solution.sol`. The first that exists
/// wins.
pub fn find_solution_file(user_file: &Path, solution_dir: &Path) -> Option<PathBuf> {
    let stem = user_file.file_stem()?.to_string_lossy();
    let name = user_file.file_name()?.to_string_lossy();

    [
        format!("{stem}Solution.sol"),
        format!("{}Solution.sol", stem.replace("Solution", "")),
        name.replace(".sol", "Solution.sol"),
    ]
    .into_iter()
    .map(|candidate| solution_dir.join(candidate))
    .find(|candidate| candidate.exists())
}

/// Compare a user file with its solution.
///
/// A file that does not exist contributes no declarations.
///
/// # Errors
///
/// Returns [`SolorderError::Io`] if an existing file cannot be read.
pub fn compare_files(
    user_file: &Path,
    solution_file: &Path,
    deny: &DenyList,
) -> Result<DeclarationDiff, SolorderError> {
    let user = read_declarations(user_file, deny)?;
    let solution = read_declarations(solution_file, deny)?;

    Ok(user.missing_from(&solution))
}

fn read_declarations(path: &Path, deny: &DenyList) -> Result<Declarations, SolorderError> {
    if !path.exists() {
        debug!(path:? = path; "File missing, no declarations");
        return Ok(Declarations::default());
    }
    Ok(extract_declarations(&fs::read_to_string(path)?, deny))
}

/// Check every numbered project below `root`.
///
/// Projects are subdirectories whose name starts with a digit and that
/// contain both `src/` and `src/solution/`. User files are the `*.sol` files
/// directly in `src/` whose name does not contain `solution` in any case.
/// User files without a solution are skipped.
///
/// # Errors
///
/// Returns [`SolorderError::ProjectRootNotFound`] when `root` does not exist
/// and [`SolorderError::Io`] on read failures.
pub fn check_project_tree(
    root: &Path,
    config: &CompareConfig,
) -> Result<SolutionReport, SolorderError> {
    if !root.exists() {
        return Err(SolorderError::ProjectRootNotFound(root.to_path_buf()));
    }

    info!(root:? = root; "Checking project tree");
    let deny = config.deny_list();
    let mut report = SolutionReport::default();

    for project in numbered_projects(root)? {
        let src_dir = project.join("src");
        let solution_dir = src_dir.join("solution");
        if !src_dir.is_dir() || !solution_dir.is_dir() {
            debug!(project:? = project; "Skipping project without solutions");
            continue;
        }

        for user_file in user_files(&src_dir)? {
            let Some(solution_file) = find_solution_file(&user_file, &solution_dir) else {
                debug!(file:? = user_file; "No solution file found");
                continue;
            };

            let diff = compare_files(&user_file, &solution_file, &deny)?;
            if diff.is_empty() {
                continue;
            }

            let file = user_file
                .strip_prefix(root)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| user_file.clone());
            warn!(file:? = file; "User file declares names missing from its solution");
            report.mismatches.push(SolutionMismatch { file, diff });
        }
    }

    info!(mismatches = report.mismatches.len(); "Project tree checked");
    Ok(report)
}

fn numbered_projects(root: &Path) -> Result<Vec<PathBuf>, SolorderError> {
    let mut projects = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        let numbered = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.chars().next())
            .is_some_and(|c| c.is_ascii_digit());
        if path.is_dir() && numbered {
            projects.push(path);
        }
    }
    projects.sort();
    Ok(projects)
}

fn user_files(src_dir: &Path) -> Result<Vec<PathBuf>, SolorderError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(src_dir)? {
        let path = entry?.path();
        let is_sol = path.extension().is_some_and(|ext| ext == "sol");
        let is_solution = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().to_lowercase().contains("solution"));
        if path.is_file() && is_sol && !is_solution {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn names(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_find_solution_file_appends_suffix() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("VaultSolution.sol"), "").unwrap();
        fs::write(dir.path().join("Vault.sol"), "").unwrap();

        let found = find_solution_file(Path::new("src/Vault.sol"), dir.path());

        assert_eq!(found, Some(dir.path().join("VaultSolution.sol")));
    }

    #[test]
    fn test_find_solution_file_drops_existing_suffix() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("VaultSolution.sol"), "").unwrap();

        let found = find_solution_file(Path::new("src/VaultSolution.sol"), dir.path());

        assert_eq!(found, Some(dir.path().join("VaultSolution.sol")));
    }

    #[test]
    fn test_find_solution_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Vault.sol"), "").unwrap();

        assert_eq!(find_solution_file(Path::new("Vault.sol"), dir.path()), None);
    }

    #[test]
    fn test_compare_missing_solution_reports_everything() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("Vault.sol");
        fs::write(&user, "struct Slot {\n}\nevent Ping();\n").unwrap();

        let diff = compare_files(&user, &dir.path().join("Nope.sol"), &DenyList::default())
            .unwrap();

        assert_eq!(diff.missing_structs, names(&["Slot"]));
        assert_eq!(diff.missing_events, names(&["Ping"]));
    }

    #[test]
    fn test_report_display_clean() {
        let report = SolutionReport::default();

        assert!(report.is_clean());
        assert_eq!(
            report.to_string(),
            "All solution files match their user files!"
        );
    }

    #[test]
    fn test_report_display_lists_only_non_empty_kinds() {
        let report = SolutionReport {
            mismatches: vec![SolutionMismatch {
                file: PathBuf::from("01-vault/src/Vault.sol"),
                diff: DeclarationDiff {
                    missing_events: names(&["Deposit"]),
                    missing_funcs: names(&["withdraw", "deposit"]),
                    missing_structs: BTreeSet::new(),
                },
            }],
        };

        assert_eq!(
            report.to_string(),
            "Found 1 file(s) with mismatches:\n\
             \n\
             \x20 01-vault/src/Vault.sol\n\
             \x20   Missing events: Deposit\n\
             \x20   Missing functions: deposit, withdraw\n"
        );
    }
}
