//! The canonical reassembler.

use log::debug;

use solorder_core::{category::Category, document::ClassifiedDocument};

/// Concatenate a document's categories in canonical order.
///
/// Every non-empty category is emitted verbatim and followed by one blank
/// line, except [`Category::Uncategorized`], which comes last and gets no
/// separator. Empty categories emit nothing. Lines are joined with `\n`.
///
/// # Example
///
/// ```
/// # use solorder::reassemble;
/// # use solorder_parser::classify;
/// let doc = classify("contract A {\n    function f() external {}\n    uint256 x;\n}");
/// assert_eq!(
///     reassemble(&doc),
///     "contract A {\n\n    uint256 x;\n\n    function f() external {}\n\n}"
/// );
/// ```
pub fn reassemble(doc: &ClassifiedDocument<'_>) -> String {
    let mut output = Vec::with_capacity(doc.len() + Category::COUNT);

    for (category, lines) in doc.iter_canonical() {
        debug!(category:% = category, lines = lines.len(); "Emitting section");
        output.extend(lines.iter().map(|line| line.text()));
        if category != Category::Uncategorized {
            output.push("");
        }
    }

    output.join("\n")
}
