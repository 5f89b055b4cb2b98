//! Per-line brace and terminator scanning.
//!
//! The classifier delimits multi-line constructs by watching a running
//! brace depth and by looking for a trailing `;`. [`LineScanner`] produces
//! those two facts for one line at a time in one of two modes:
//!
//! - [`BraceCounting::Raw`] counts every `{` and `}` character and checks
//!   whether the trimmed line ends with `;`. Braces or semicolons inside
//!   string literals and comments are counted like structural ones, so an
//!   adversarial literal can desynchronize the depth. This is the default.
//! - [`BraceCounting::Lexical`] skips string literals, `//` comments and
//!   `/* ... */` comments (including ones spanning several lines) before
//!   counting, and ignores trailing comments when looking for `;`.

use serde::Deserialize;
use winnow::{
    Parser as _,
    combinator::{alt, opt, preceded, repeat, terminated},
    error::{ContextError, ErrMode},
    token::{any, none_of, rest, take_until, take_while},
};

type Input<'src> = &'src str;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// How braces and terminators are recognized on a line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BraceCounting {
    /// Count raw characters.
    #[default]
    Raw,
    /// Skip string literals and comments.
    Lexical,
}

/// Structural facts about a single line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineScan {
    opens: usize,
    closes: usize,
    terminated: bool,
}

impl LineScan {
    /// Number of opening braces counted on the line.
    pub fn opens(&self) -> usize {
        self.opens
    }

    /// Number of closing braces counted on the line.
    pub fn closes(&self) -> usize {
        self.closes
    }

    /// Opening minus closing braces.
    pub fn delta(&self) -> isize {
        self.opens as isize - self.closes as isize
    }

    /// Whether the line ends with a `;` terminator.
    pub fn terminated(&self) -> bool {
        self.terminated
    }
}

/// Scans lines in order, carrying block-comment state across lines in
/// lexical mode.
#[derive(Debug, Clone, Default)]
pub struct LineScanner {
    mode: BraceCounting,
    in_block_comment: bool,
}

impl LineScanner {
    /// Create a scanner for the given mode.
    pub fn new(mode: BraceCounting) -> Self {
        Self {
            mode,
            in_block_comment: false,
        }
    }

    /// The counting mode of this scanner.
    pub fn mode(&self) -> BraceCounting {
        self.mode
    }

    /// Scan the next line of the file.
    ///
    /// Lines must be fed in file order: in lexical mode an unclosed `/*`
    /// affects the lines that follow it.
    pub fn scan(&mut self, text: &str) -> LineScan {
        match self.mode {
            BraceCounting::Raw => scan_raw(text),
            BraceCounting::Lexical => self.scan_lexical(text),
        }
    }

    fn scan_lexical(&mut self, text: &str) -> LineScan {
        let mut input = text;
        let mut scan = LineScan::default();
        let mut last_significant = None;

        if self.in_block_comment {
            if let Ok(Piece::BlockComment { closed }) = block_comment_tail(&mut input) {
                self.in_block_comment = !closed;
            }
        }

        while !input.is_empty() {
            let Ok(piece) = next_piece(&mut input) else {
                break;
            };
            match piece {
                Piece::OpenBrace => {
                    scan.opens += 1;
                    last_significant = Some('{');
                }
                Piece::CloseBrace => {
                    scan.closes += 1;
                    last_significant = Some('}');
                }
                Piece::Literal => last_significant = Some('"'),
                Piece::Code(Some(c)) => last_significant = Some(c),
                Piece::Code(None) | Piece::LineComment => {}
                Piece::BlockComment { closed } => self.in_block_comment = !closed,
            }
        }

        scan.terminated = last_significant == Some(';');
        scan
    }
}

fn scan_raw(text: &str) -> LineScan {
    LineScan {
        opens: text.matches('{').count(),
        closes: text.matches('}').count(),
        terminated: text.trim().ends_with(';'),
    }
}

/// A lexical piece of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    OpenBrace,
    CloseBrace,
    Literal,
    /// Plain code, with its last non-whitespace character.
    Code(Option<char>),
    LineComment,
    BlockComment { closed: bool },
}

/// Parse a `//` comment running to the end of the line.
fn line_comment(input: &mut Input<'_>) -> IResult<Piece> {
    preceded("//", rest).value(Piece::LineComment).parse_next(input)
}

/// Parse a `/*` comment, closed on this line or not.
fn block_comment(input: &mut Input<'_>) -> IResult<Piece> {
    "/*".parse_next(input)?;
    block_comment_tail(input)
}

/// Parse the remainder of a block comment up to and including `*/`, or the
/// whole input when the comment continues on the next line.
fn block_comment_tail(input: &mut Input<'_>) -> IResult<Piece> {
    let closed = opt(terminated(take_until(0.., "*/"), "*/"))
        .parse_next(input)?
        .is_some();
    if !closed {
        rest.parse_next(input)?;
    }
    Ok(Piece::BlockComment { closed })
}

/// Parse a single- or double-quoted string literal with backslash escapes.
///
/// A literal left open at the end of the line swallows the rest of it.
fn string_literal(input: &mut Input<'_>) -> IResult<Piece> {
    let quote = alt(('"', '\'')).parse_next(input)?;
    let _: () = repeat(
        0..,
        alt((preceded('\\', any).void(), none_of([quote, '\\']).void())),
    )
    .parse_next(input)?;
    opt(quote).parse_next(input)?;
    Ok(Piece::Literal)
}

/// Parse a run of code that cannot start a brace, literal or comment.
fn code(input: &mut Input<'_>) -> IResult<Piece> {
    take_while(1.., |c: char| !matches!(c, '{' | '}' | '"' | '\'' | '/'))
        .map(|text: &str| Piece::Code(text.trim_end().chars().last()))
        .parse_next(input)
}

fn next_piece(input: &mut Input<'_>) -> IResult<Piece> {
    alt((
        line_comment,  // Must come before the lone slash
        block_comment, // Must come before the lone slash
        string_literal,
        '{'.value(Piece::OpenBrace),
        '}'.value(Piece::CloseBrace),
        code,
        '/'.value(Piece::Code(Some('/'))),
    ))
    .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(text: &str) -> LineScan {
        LineScanner::new(BraceCounting::Raw).scan(text)
    }

    fn lexical(text: &str) -> LineScan {
        LineScanner::new(BraceCounting::Lexical).scan(text)
    }

    #[test]
    fn test_raw_counts_every_brace() {
        let scan = raw(r#"    string s = "{{"; // }"#);

        assert_eq!(scan.opens(), 2);
        assert_eq!(scan.closes(), 1);
        assert_eq!(scan.delta(), 1);
        assert!(!scan.terminated());
    }

    #[test]
    fn test_raw_terminator() {
        assert!(raw("    event Deposit(uint256 amount);  ").terminated());
        assert!(!raw("    event Deposit(").terminated());
        assert!(raw("uint x; // counter;").terminated());
    }

    #[test]
    fn test_lexical_skips_string_literals() {
        let scan = lexical(r#"    string s = "{{\"}"; bytes1 c = '{';"#);

        assert_eq!(scan.opens(), 0);
        assert_eq!(scan.closes(), 0);
        assert!(scan.terminated());
    }

    #[test]
    fn test_lexical_skips_line_comment() {
        let scan = lexical("    function f() external { // }}}");

        assert_eq!(scan.delta(), 1);
        assert!(!scan.terminated());
    }

    #[test]
    fn test_lexical_terminator_ignores_trailing_comment() {
        assert!(lexical("    event Deposit(uint256 amount); // emitted on deposit").terminated());
        assert!(lexical("    error Unauthorized(); /* see docs */").terminated());
        assert!(!lexical("    // event Deposit(uint256 amount);").terminated());
    }

    #[test]
    fn test_lexical_block_comment_across_lines() {
        let mut scanner = LineScanner::new(BraceCounting::Lexical);

        let first = scanner.scan("    /* opening { here");
        let middle = scanner.scan("       still } inside");
        let last = scanner.scan("    */ function f() public {");

        assert_eq!(first.delta(), 0);
        assert_eq!(middle.delta(), 0);
        assert_eq!(last.delta(), 1);
    }

    #[test]
    fn test_lexical_division_is_code() {
        let scan = lexical("        uint half = total / 2;");

        assert_eq!(scan.delta(), 0);
        assert!(scan.terminated());
    }

    #[test]
    fn test_lexical_unterminated_literal_runs_to_end() {
        let scan = lexical(r#"    string s = "abc { ;"#);

        assert_eq!(scan.opens(), 0);
        assert!(!scan.terminated());
    }

    #[test]
    fn test_modes_agree_on_plain_code() {
        for line in [
            "contract Vault is Ownable {",
            "    mapping(address => uint256) public balances;",
            "    }",
            "        if (x) { y(); } else {",
            "",
        ] {
            assert_eq!(raw(line), lexical(line), "modes disagree on {line:?}");
        }
    }
}
