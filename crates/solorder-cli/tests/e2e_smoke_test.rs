use std::{fs, path::PathBuf};

use tempfile::tempdir;

use solorder::SolorderError;
use solorder_cli::{Args, CheckArgs, run, run_check};

/// Demos are at workspace root, relative to workspace not the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Collects all .sol files from a directory
fn collect_sol_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("sol")
            })
            .collect()
    } else {
        Vec::new()
    };

    files.sort();
    files
}

fn args_for(input: &PathBuf) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

fn sorted_non_blank(text: &str) -> Vec<&str> {
    let mut lines: Vec<_> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    lines.sort_unstable();
    lines
}

#[test]
fn e2e_smoke_test_demos() {
    let mut demos = collect_sol_files(demos_path());
    demos.extend(collect_sol_files(demos_path().join("warnings")));

    assert!(!demos.is_empty(), "No demos found in demos/");

    let mut failed = Vec::new();

    for demo in &demos {
        let source = fs::read_to_string(demo).unwrap();
        let mut out = Vec::new();

        match run(&args_for(demo), &mut out) {
            Ok(()) => {
                let output = String::from_utf8(out).unwrap();
                assert_eq!(
                    sorted_non_blank(&output),
                    sorted_non_blank(&source),
                    "{} lost or duplicated lines",
                    demo.display()
                );
            }
            Err(e) => failed.push((demo.clone(), e)),
        }
    }

    if !failed.is_empty() {
        eprintln!("\nDemos that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_vault_demo_layout() {
    let mut out = Vec::new();
    run(&args_for(&demos_path().join("Vault.sol")), &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    let position = |needle: &str| {
        output
            .find(needle)
            .unwrap_or_else(|| panic!("`{needle}` missing from output"))
    };

    let ordered = [
        "pragma solidity",
        "import {IERC20}",
        "contract Vault {",
        "enum Status",
        "struct Position",
        "MAX_DEPOSIT",
        "immutable token",
        "public balances",
        "public paused",
        "error ZeroAmount",
        "event Deposited",
        "event Withdrawn(",
        "modifier whenNotPaused",
        "constructor(",
        "receive()",
        "function deposit(",
        "function withdraw(",
        "function balanceOf(",
        "function _debit(",
    ];
    for pair in ordered.windows(2) {
        assert!(
            position(pair[0]) < position(pair[1]),
            "`{}` should precede `{}`",
            pair[0],
            pair[1]
        );
    }
    assert!(output.trim_end().ends_with('}'));
}

#[test]
fn e2e_missing_input() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("Missing.sol");
    let mut out = Vec::new();

    let err = run(&args_for(&missing), &mut out).unwrap_err();

    assert!(matches!(err, SolorderError::InputNotFound(_)));
    assert!(err.to_string().starts_with("input file not found: "));
    assert!(out.is_empty());
}

#[test]
fn e2e_lexical_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "[classifier]\nbrace_counting = \"lexical\"\n").unwrap();
    let input = temp_dir.path().join("Strings.sol");
    fs::write(
        &input,
        "contract S {\n    function f() external {\n        s = \"}\";\n    }\n    uint256 x;\n}\n",
    )
    .unwrap();

    let mut out = Vec::new();
    let args = Args {
        config: Some(config.to_string_lossy().to_string()),
        ..args_for(&input)
    };
    run(&args, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "contract S {\n\n    uint256 x;\n\n    function f() external {\n        s = \"}\";\n    }\n\n}\n\n"
    );
}

#[test]
fn e2e_check_demo_tree() {
    let args = CheckArgs {
        root: Some(demos_path().join("foundry").to_string_lossy().to_string()),
        config: None,
        log_level: "off".to_string(),
    };
    let mut out = Vec::new();

    let report = run_check(&args, &mut out).unwrap();

    assert_eq!(report.mismatches().len(), 1);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Found 1 file(s) with mismatches:\n\
         \n\
         \x20 02-token/src/Token.sol\n\
         \x20   Missing events: Transfer\n\
         \x20   Missing functions: approve\n\
         \x20   Missing structs: Allowance\n\
         \n"
    );
}

#[test]
fn e2e_check_missing_root() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = CheckArgs {
        root: Some(temp_dir.path().join("foundry").to_string_lossy().to_string()),
        config: None,
        log_level: "off".to_string(),
    };

    let err = run_check(&args, &mut Vec::new()).unwrap_err();

    assert!(matches!(err, SolorderError::ProjectRootNotFound(_)));
}

#[test]
fn e2e_check_root_from_config_and_argument() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = temp_dir.path().join("config.toml");
    let demo_tree = demos_path().join("foundry");
    fs::write(
        &config,
        format!(
            "[compare]\nproject_root = {:?}\n",
            demo_tree.to_string_lossy()
        ),
    )
    .unwrap();

    let from_config = CheckArgs {
        root: None,
        config: Some(config.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };
    let report = run_check(&from_config, &mut Vec::new()).unwrap();
    assert_eq!(report.mismatches().len(), 1);

    let empty_root = temp_dir.path().join("empty");
    fs::create_dir(&empty_root).unwrap();
    let overridden = CheckArgs {
        root: Some(empty_root.to_string_lossy().to_string()),
        ..from_config
    };
    let report = run_check(&overridden, &mut Vec::new()).unwrap();
    assert!(report.is_clean());
}
