//! Diagnostics reported by the section classifier.
//!
//! Classification never fails: every line lands in some category. What the
//! scanner can do is notice that its structural assumptions did not hold
//! (a block that never closes, a stray closing brace, a second contract in
//! the same file) and report that as a warning next to its result.
//!
//! # Example
//!
//! ```
//! # use solorder_parser::error::{Diagnostic, ErrorCode};
//! # use solorder_parser::Span;
//!
//! let diag = Diagnostic::warning("unterminated `function` block")
//!     .with_code(ErrorCode::W001)
//!     .with_label(Span::new(40..62), "block opened here")
//!     .with_help("the remaining lines were kept in this block");
//! assert_eq!(diag.to_string(), "warning[W001]: unterminated `function` block");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
