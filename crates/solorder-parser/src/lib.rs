//! # Solorder Parser
//!
//! Structural classification of Solidity source files. This is not a
//! grammar: lines are matched against an ordered table of
//! [`rules::Rule`]s and multi-line constructs are delimited by brace depth
//! or a trailing `;` (see [`scanner`]).
//!
//! ## Usage
//!
//! ```
//! # use solorder_parser::classify;
//! # use solorder_core::category::Category;
//! let source = r#"// SPDX-License-Identifier: MIT
//! pragma solidity ^0.8.0;
//!
//! contract Foo {
//!     function bar() external {}
//!     uint256 public x;
//! }"#;
//!
//! let doc = classify(source);
//! assert_eq!(doc.lines(Category::Header).len(), 2);
//! assert_eq!(doc.lines(Category::StateVariable)[0].text(), "    uint256 public x;");
//! ```
//!
//! The [`declarations`] module holds the unrelated, regex-based name
//! extraction used to compare exercise files with their solutions.

mod classifier;
pub mod declarations;
pub mod error;
pub mod rules;
pub mod scanner;
mod span;

pub use classifier::{Classification, Classifier, classify};
pub use span::Span;
