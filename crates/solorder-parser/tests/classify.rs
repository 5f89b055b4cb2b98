use proptest::prelude::*;

use solorder_core::category::Category;
use solorder_parser::{Classifier, classify, scanner::BraceCounting};

/// Source lines drawn from the constructs the classifier knows about, plus
/// noise it has to tolerate.
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("// SPDX-License-Identifier: MIT".to_string()),
        Just("pragma solidity ^0.8.0;".to_string()),
        Just("import \"./Lib.sol\";".to_string()),
        Just("contract Foo {".to_string()),
        Just("    enum Kind { A, B }".to_string()),
        Just("    struct Point {".to_string()),
        Just("    event Moved(".to_string()),
        Just("    error Failed();".to_string()),
        Just("    modifier guarded() {".to_string()),
        Just("    function run() external {".to_string()),
        Just("    function view_() internal view returns (uint256);".to_string()),
        Just("    uint256 public constant LIMIT = 3;".to_string()),
        Just("    address public immutable owner;".to_string()),
        Just("    mapping(address => uint256) balances;".to_string()),
        Just("        x = \"{\";".to_string()),
        Just("    }".to_string()),
        Just("}".to_string()),
        Just("    /* note {".to_string()),
        Just(String::new()),
        "[ a-z;{}()]{0,24}",
    ]
}

fn source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(line_strategy(), 0..40).prop_map(|lines| lines.join("\n"))
}

fn check_every_line_exactly_once(source: &str, mode: BraceCounting) -> Result<(), TestCaseError> {
    let classification = Classifier::new(mode).classify(source);
    let doc = classification.document();

    let mut indices: Vec<_> = Category::CANONICAL_ORDER
        .iter()
        .flat_map(|category| doc.lines(*category).iter().map(|line| line.index()))
        .collect();
    indices.sort_unstable();

    let expected: Vec<_> = (0..source.split('\n').count()).collect();
    prop_assert_eq!(indices, expected);
    Ok(())
}

fn check_category_keeps_source_order(source: &str) -> Result<(), TestCaseError> {
    let doc = classify(source);

    for category in Category::CANONICAL_ORDER {
        let indices: Vec<_> = doc.lines(category).iter().map(|line| line.index()).collect();
        prop_assert!(
            indices.windows(2).all(|pair| pair[0] < pair[1]),
            "{} lines out of order: {:?}",
            category,
            indices
        );
    }
    Ok(())
}

fn check_line_text_is_untouched(source: &str) -> Result<(), TestCaseError> {
    let doc = classify(source);
    let originals: Vec<_> = source.split('\n').collect();

    for category in Category::CANONICAL_ORDER {
        for line in doc.lines(category) {
            prop_assert_eq!(line.text(), originals[line.index()]);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn raw_classification_conserves_lines(source in source_strategy()) {
        check_every_line_exactly_once(&source, BraceCounting::Raw)?;
    }

    #[test]
    fn lexical_classification_conserves_lines(source in source_strategy()) {
        check_every_line_exactly_once(&source, BraceCounting::Lexical)?;
    }

    #[test]
    fn categories_keep_source_order(source in source_strategy()) {
        check_category_keeps_source_order(&source)?;
    }

    #[test]
    fn line_text_is_untouched(source in source_strategy()) {
        check_line_text_is_untouched(&source)?;
    }
}

#[test]
fn test_interface_file() {
    let source = r#"// SPDX-License-Identifier: MIT
pragma solidity ^0.8.20;

interface IToken {
    event Transfer(address indexed from, address indexed to, uint256 value);

    function totalSupply() external view returns (uint256);
    function transfer(address to, uint256 value) external returns (bool);
}
"#;
    let doc = classify(source);

    assert_eq!(doc.lines(Category::ContractDeclaration).len(), 1);
    assert_eq!(doc.lines(Category::Event).len(), 1);
    assert_eq!(doc.lines(Category::ExternalFunction).len(), 2);
    assert!(doc.lines(Category::PublicFunction).is_empty());
}

#[test]
fn test_library_file() {
    let source = "library Math {\n    function max(uint256 a, uint256 b) internal pure returns (uint256) {\n        return a >= b ? a : b;\n    }\n}";
    let doc = classify(source);

    assert_eq!(doc.lines(Category::InternalFunction).len(), 3);
    assert_eq!(
        doc.lines(Category::ContractDeclaration)[0].text(),
        "library Math {"
    );
}
