//! The section classifier.
//!
//! A single left-to-right pass over the file's lines. The scan keeps a
//! running brace depth and a flag telling whether the contract body has been
//! entered. Each line is matched against the [`Rule`] table; a match on a
//! multi-line construct makes the scan consume the following lines into the
//! same category until the construct ends:
//!
//! - block constructs end when the depth returns to its value before the
//!   opening line, or on a `;` if no brace was opened (bodiless functions);
//! - statement constructs end on the first line ending with `;`.
//!
//! The public entry points are [`classify`] and [`Classifier::classify`].

use log::{debug, trace};

use solorder_core::{
    category::Category,
    document::ClassifiedDocument,
    source::{SourceLine, split_lines},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    rules::{self, Extent, Rule},
    scanner::{BraceCounting, LineScan, LineScanner},
    span::Span,
};

/// The outcome of classifying one file: the document and any warnings
/// raised while scanning it.
#[derive(Debug)]
pub struct Classification<'a> {
    document: ClassifiedDocument<'a>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Classification<'a> {
    /// The classified lines.
    pub fn document(&self) -> &ClassifiedDocument<'a> {
        &self.document
    }

    /// Warnings raised while scanning, in source order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Discard the diagnostics and keep the document.
    pub fn into_document(self) -> ClassifiedDocument<'a> {
        self.document
    }

    /// Split into the document and the diagnostics.
    pub fn into_parts(self) -> (ClassifiedDocument<'a>, Vec<Diagnostic>) {
        (self.document, self.diagnostics)
    }
}

/// Classifies source files with a fixed brace counting mode.
///
/// # Example
///
/// ```
/// # use solorder_parser::{Classifier, scanner::BraceCounting};
/// # use solorder_core::category::Category;
/// let source = "contract A {\n    uint256 public x;\n}";
/// let classification = Classifier::new(BraceCounting::Lexical).classify(source);
///
/// let vars = classification.document().lines(Category::StateVariable);
/// assert_eq!(vars.len(), 1);
/// assert!(classification.diagnostics().is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    brace_counting: BraceCounting,
}

impl Classifier {
    /// Create a classifier using the given brace counting mode.
    pub fn new(brace_counting: BraceCounting) -> Self {
        Self { brace_counting }
    }

    /// The brace counting mode in use.
    pub fn brace_counting(&self) -> BraceCounting {
        self.brace_counting
    }

    /// Partition the lines of `source` by category.
    ///
    /// Never fails. Lines no rule claims are kept in
    /// [`Category::Uncategorized`]; constructs left open at end of input are
    /// kept as they are and reported with [`ErrorCode::W001`].
    pub fn classify<'a>(&self, source: &'a str) -> Classification<'a> {
        let mut scan = Scan::new(source, self.brace_counting);
        scan.run();
        scan.finish()
    }
}

/// Partition the lines of `source` by category using raw brace counting.
///
/// # Example
///
/// ```
/// # use solorder_parser::classify;
/// # use solorder_core::category::Category;
/// let doc = classify("contract A {\n    function f() external {}\n}");
/// assert_eq!(doc.lines(Category::ExternalFunction).len(), 1);
/// ```
pub fn classify(source: &str) -> ClassifiedDocument<'_> {
    Classifier::default().classify(source).into_document()
}

/// Mutable state of one classification pass.
struct Scan<'a> {
    lines: Vec<SourceLine<'a>>,
    position: usize,
    scanner: LineScanner,
    depth: isize,
    inside_body: bool,
    first_declaration: Option<SourceLine<'a>>,
    reported_unterminated: bool,
    document: ClassifiedDocument<'a>,
    diagnostics: DiagnosticCollector,
}

impl<'a> Scan<'a> {
    fn new(source: &'a str, brace_counting: BraceCounting) -> Self {
        Self {
            lines: split_lines(source).collect(),
            position: 0,
            scanner: LineScanner::new(brace_counting),
            depth: 0,
            inside_body: false,
            first_declaration: None,
            reported_unterminated: false,
            document: ClassifiedDocument::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    fn next_line(&mut self) -> Option<SourceLine<'a>> {
        let line = self.lines.get(self.position).copied();
        if line.is_some() {
            self.position += 1;
        }
        line
    }

    fn run(&mut self) {
        while let Some(line) = self.next_line() {
            let scan = self.scanner.scan(line.text());
            let rule = rules::first_match(line.stripped(), self.inside_body);
            let baseline = self.depth;

            // Before the body only the declaration line moves the depth.
            if self.inside_body || rule == Some(Rule::ContractDeclaration) {
                self.track_depth(line, scan);
            }

            trace!(
                line = line.index(),
                depth = self.depth,
                rule:? = rule;
                "Scanned line"
            );

            let Some(rule) = rule else {
                self.document.push(Category::Uncategorized, line);
                continue;
            };

            match rule.extent() {
                Extent::Line => {
                    if rule == Rule::ContractDeclaration {
                        self.enter_body(line);
                    }
                    if let Some(category) = rule.category() {
                        self.document.push(category, line);
                    }
                }
                Extent::Block => {
                    let block = self.consume_block(rule, line, scan, baseline);
                    let category = rule
                        .category()
                        .unwrap_or_else(|| rules::function_visibility(&block));
                    debug!(
                        start = line.index(),
                        lines = block.len(),
                        category:% = category;
                        "Consumed block"
                    );
                    self.document.extend(category, block);
                }
                Extent::Statement => {
                    let statement = self.consume_statement(rule, line, scan);
                    if let Some(category) = rule.category() {
                        self.document.extend(category, statement);
                    }
                }
            }
        }

        if self.inside_body && self.depth > 0 && !self.reported_unterminated {
            if let Some(declaration) = self.first_declaration {
                self.diagnostics.emit(
                    Diagnostic::warning("contract body is never closed")
                        .with_code(ErrorCode::W001)
                        .with_label(line_span(declaration), "body opened here")
                        .with_help("check for a missing `}` at the end of the file"),
                );
            }
        }
    }

    /// Consume lines until the braces opened since `baseline` are closed,
    /// or until a `;` if the construct never opens a brace.
    fn consume_block(
        &mut self,
        rule: Rule,
        opener: SourceLine<'a>,
        opener_scan: LineScan,
        baseline: isize,
    ) -> Vec<SourceLine<'a>> {
        let mut block = vec![opener];
        let mut opened = opener_scan.opens() > 0;
        let mut terminated = opener_scan.terminated();

        loop {
            if opened && self.depth <= baseline {
                break;
            }
            if !opened && terminated {
                break;
            }

            let Some(line) = self.next_line() else {
                self.unterminated(rule, opener, "block");
                break;
            };
            let scan = self.scanner.scan(line.text());
            self.track_depth(line, scan);
            opened |= scan.opens() > 0;
            terminated = scan.terminated();
            block.push(line);
        }

        block
    }

    /// Consume lines until one ends with `;`, the opening line included.
    fn consume_statement(
        &mut self,
        rule: Rule,
        opener: SourceLine<'a>,
        opener_scan: LineScan,
    ) -> Vec<SourceLine<'a>> {
        let mut statement = vec![opener];
        let mut terminated = opener_scan.terminated();

        while !terminated {
            let Some(line) = self.next_line() else {
                self.unterminated(rule, opener, "declaration");
                break;
            };
            let scan = self.scanner.scan(line.text());
            self.track_depth(line, scan);
            terminated = scan.terminated();
            statement.push(line);
        }

        statement
    }

    fn track_depth(&mut self, line: SourceLine<'a>, scan: LineScan) {
        let before = self.depth;
        self.depth += scan.delta();

        if before >= 0 && self.depth < 0 {
            self.diagnostics.emit(
                Diagnostic::warning("closing brace without a matching opening brace")
                    .with_code(ErrorCode::W002)
                    .with_label(line_span(line), "depth drops below zero here")
                    .with_help(
                        "braces inside string literals or comments are counted; \
                         try lexical brace counting",
                    ),
            );
        }
    }

    fn enter_body(&mut self, line: SourceLine<'a>) {
        match self.first_declaration {
            Some(first) => self.diagnostics.emit(
                Diagnostic::warning("more than one top-level declaration in this file")
                    .with_code(ErrorCode::W003)
                    .with_label(line_span(line), "additional declaration")
                    .with_secondary_label(line_span(first), "first declared here")
                    .with_help("members of every body are ordered together; split the file to keep them apart"),
            ),
            None => self.first_declaration = Some(line),
        }
        self.inside_body = true;
    }

    fn unterminated(&mut self, rule: Rule, opener: SourceLine<'a>, what: &str) {
        self.reported_unterminated = true;
        self.diagnostics.emit(
            Diagnostic::warning(format!("unterminated `{}` {what}", rule.keyword()))
                .with_code(ErrorCode::W001)
                .with_label(line_span(opener), "starts here")
                .with_help("end of input was reached first; the remaining lines were kept with it"),
        );
    }

    fn finish(self) -> Classification<'a> {
        let diagnostics = self.diagnostics.finish();
        debug!(
            lines = self.document.len(),
            diagnostics = diagnostics.len();
            "Classification finished"
        );

        Classification {
            document: self.document,
            diagnostics,
        }
    }
}

fn line_span(line: SourceLine<'_>) -> Span {
    Span::new(line.byte_range())
}
