//! Member categories and the canonical emission order.
//!
//! [`Category`] is the single source of truth for ordering: the classifier
//! uses it to tag lines and the reassembler walks
//! [`Category::CANONICAL_ORDER`] to emit them.

use std::fmt;

/// A classification tag for a run of source lines.
///
/// The variant declaration order is the canonical emission order, so
/// `Ord` on this type agrees with [`Category::CANONICAL_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// SPDX license marker and version pragma.
    Header,
    /// Import statements.
    Imports,
    /// The `contract`, `interface`, `library` or `abstract contract` line.
    ContractDeclaration,
    Enum,
    Struct,
    /// State variables declared `constant`.
    Constant,
    /// State variables declared `immutable`.
    Immutable,
    /// Regular storage variables.
    StateVariable,
    CustomError,
    Event,
    Modifier,
    Constructor,
    /// `receive()` and `fallback()` functions.
    ReceiveOrFallback,
    ExternalFunction,
    PublicFunction,
    InternalFunction,
    PrivateFunction,
    /// Anything no rule claims: blank lines, comments, closing braces.
    Uncategorized,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 18;

    /// Every category, in the order the reassembler emits them.
    pub const CANONICAL_ORDER: [Category; Self::COUNT] = [
        Category::Header,
        Category::Imports,
        Category::ContractDeclaration,
        Category::Enum,
        Category::Struct,
        Category::Constant,
        Category::Immutable,
        Category::StateVariable,
        Category::CustomError,
        Category::Event,
        Category::Modifier,
        Category::Constructor,
        Category::ReceiveOrFallback,
        Category::ExternalFunction,
        Category::PublicFunction,
        Category::InternalFunction,
        Category::PrivateFunction,
        Category::Uncategorized,
    ];

    /// Position of this category in [`Category::CANONICAL_ORDER`].
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Returns the kebab-case name of this category (e.g. "state-variable").
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Header => "header",
            Category::Imports => "imports",
            Category::ContractDeclaration => "contract-declaration",
            Category::Enum => "enum",
            Category::Struct => "struct",
            Category::Constant => "constant",
            Category::Immutable => "immutable",
            Category::StateVariable => "state-variable",
            Category::CustomError => "custom-error",
            Category::Event => "event",
            Category::Modifier => "modifier",
            Category::Constructor => "constructor",
            Category::ReceiveOrFallback => "receive-or-fallback",
            Category::ExternalFunction => "external-function",
            Category::PublicFunction => "public-function",
            Category::InternalFunction => "internal-function",
            Category::PrivateFunction => "private-function",
            Category::Uncategorized => "uncategorized",
        }
    }

    /// Returns `true` for the four function visibility buckets.
    pub fn is_function(self) -> bool {
        matches!(
            self,
            Category::ExternalFunction
                | Category::PublicFunction
                | Category::InternalFunction
                | Category::PrivateFunction
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_matches_rank() {
        for (position, category) in Category::CANONICAL_ORDER.iter().enumerate() {
            assert_eq!(category.rank(), position, "{category} is out of place");
        }
    }

    #[test]
    fn test_canonical_order_is_sorted() {
        let mut sorted = Category::CANONICAL_ORDER;
        sorted.sort();
        assert_eq!(sorted, Category::CANONICAL_ORDER);
    }

    #[test]
    fn test_state_variables_precede_functions() {
        assert!(Category::Constant < Category::Immutable);
        assert!(Category::Immutable < Category::StateVariable);
        assert!(Category::StateVariable < Category::ExternalFunction);
        assert!(Category::Modifier < Category::Constructor);
        assert!(Category::PrivateFunction < Category::Uncategorized);
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::ContractDeclaration.to_string(), "contract-declaration");
        assert_eq!(Category::ReceiveOrFallback.to_string(), "receive-or-fallback");
        assert_eq!(Category::Uncategorized.to_string(), "uncategorized");
    }

    #[test]
    fn test_is_function() {
        assert!(Category::ExternalFunction.is_function());
        assert!(Category::PrivateFunction.is_function());
        assert!(!Category::Constructor.is_function());
        assert!(!Category::ReceiveOrFallback.is_function());
    }
}
