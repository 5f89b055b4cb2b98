//! Line classification rules in priority order.
//!
//! Each [`Rule`] recognizes the first line of one construct kind from the
//! line's trimmed text. [`Rule::PRIORITY`] is the dispatch table: the first
//! rule that matches a line wins, so more specific shapes are listed before
//! the generic state-variable shape.

use winnow::{
    Parser as _,
    combinator::alt,
    error::{ContextError, ErrMode},
    token::{one_of, take_while},
};

use solorder_core::{category::Category, source::SourceLine};

type Input<'src> = &'src str;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// A recognizer for the opening line of a construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `// SPDX-...` or `pragma solidity ...`
    Header,
    /// `import ...`
    Import,
    /// `contract`, `interface`, `library`, `abstract contract`
    ContractDeclaration,
    Enum,
    Struct,
    /// `error Name(...)`
    CustomError,
    Event,
    Modifier,
    Constructor,
    ReceiveOrFallback,
    Function,
    /// Any non-comment line mentioning `constant`.
    Constant,
    /// Any non-comment line mentioning `immutable`.
    Immutable,
    /// A leading elementary type keyword or a `<word> <visibility>` shape.
    StateVariable,
}

/// How far a construct extends from its opening line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    /// The opening line only.
    Line,
    /// Until the braces opened by the construct are closed again, or until a
    /// `;` if the construct has no body.
    Block,
    /// Until a line ending with `;`, the opening line included.
    Statement,
}

impl Rule {
    /// All rules, highest priority first.
    pub const PRIORITY: [Rule; 14] = [
        Rule::Header,
        Rule::Import,
        Rule::ContractDeclaration,
        Rule::Enum,
        Rule::Struct,
        Rule::CustomError,
        Rule::Event,
        Rule::Modifier,
        Rule::Constructor,
        Rule::ReceiveOrFallback,
        Rule::Function,
        Rule::Constant,
        Rule::Immutable,
        Rule::StateVariable,
    ];

    /// Test whether a trimmed line opens a construct of this kind.
    pub fn matches(self, stripped: &str) -> bool {
        let mut input = stripped;
        let result = match self {
            Rule::Header => header(&mut input),
            Rule::Import => import(&mut input),
            Rule::ContractDeclaration => contract_declaration(&mut input),
            Rule::Enum => named_declaration(&mut input, "enum"),
            Rule::Struct => named_declaration(&mut input, "struct"),
            Rule::CustomError => named_declaration(&mut input, "error"),
            Rule::Event => named_declaration(&mut input, "event"),
            Rule::Modifier => named_declaration(&mut input, "modifier"),
            Rule::Constructor => special_function(&mut input, "constructor"),
            Rule::ReceiveOrFallback => receive_or_fallback(&mut input),
            Rule::Function => named_declaration(&mut input, "function"),
            Rule::Constant => return mentions(stripped, "constant"),
            Rule::Immutable => return mentions(stripped, "immutable"),
            Rule::StateVariable => state_variable(&mut input),
        };
        result.is_ok()
    }

    /// How many lines the construct takes.
    pub fn extent(self) -> Extent {
        match self {
            Rule::Enum
            | Rule::Struct
            | Rule::Modifier
            | Rule::Constructor
            | Rule::ReceiveOrFallback
            | Rule::Function => Extent::Block,
            Rule::CustomError | Rule::Event => Extent::Statement,
            Rule::Header
            | Rule::Import
            | Rule::ContractDeclaration
            | Rule::Constant
            | Rule::Immutable
            | Rule::StateVariable => Extent::Line,
        }
    }

    /// The category lines matched by this rule go to.
    ///
    /// Returns `None` for [`Rule::Function`], whose category depends on the
    /// visibility found in the whole block (see [`function_visibility`]).
    pub fn category(self) -> Option<Category> {
        let category = match self {
            Rule::Header => Category::Header,
            Rule::Import => Category::Imports,
            Rule::ContractDeclaration => Category::ContractDeclaration,
            Rule::Enum => Category::Enum,
            Rule::Struct => Category::Struct,
            Rule::CustomError => Category::CustomError,
            Rule::Event => Category::Event,
            Rule::Modifier => Category::Modifier,
            Rule::Constructor => Category::Constructor,
            Rule::ReceiveOrFallback => Category::ReceiveOrFallback,
            Rule::Function => return None,
            Rule::Constant => Category::Constant,
            Rule::Immutable => Category::Immutable,
            Rule::StateVariable => Category::StateVariable,
        };
        Some(category)
    }

    /// Whether the rule is consulted before the contract body is entered.
    pub fn applies_outside_body(self) -> bool {
        matches!(
            self,
            Rule::Header | Rule::Import | Rule::ContractDeclaration
        )
    }

    /// Keyword naming the construct in diagnostics.
    pub fn keyword(self) -> &'static str {
        match self {
            Rule::Header => "header",
            Rule::Import => "import",
            Rule::ContractDeclaration => "contract",
            Rule::Enum => "enum",
            Rule::Struct => "struct",
            Rule::CustomError => "error",
            Rule::Event => "event",
            Rule::Modifier => "modifier",
            Rule::Constructor => "constructor",
            Rule::ReceiveOrFallback => "receive/fallback",
            Rule::Function => "function",
            Rule::Constant => "constant",
            Rule::Immutable => "immutable",
            Rule::StateVariable => "state variable",
        }
    }
}

/// Find the highest-priority rule matching a trimmed line.
///
/// Outside the contract body only the header, import and declaration rules
/// are consulted.
pub fn first_match(stripped: &str, inside_body: bool) -> Option<Rule> {
    Rule::PRIORITY
        .into_iter()
        .filter(|rule| inside_body || rule.applies_outside_body())
        .find(|rule| rule.matches(stripped))
}

/// Visibility keywords in the order they are looked for.
const VISIBILITY: [(&str, Category); 4] = [
    ("external", Category::ExternalFunction),
    ("public", Category::PublicFunction),
    ("internal", Category::InternalFunction),
    ("private", Category::PrivateFunction),
];

/// Pick the function category for a whole function block.
///
/// The block text is searched for `external`, `public`, `internal` and
/// `private` as plain substrings, in that order, anywhere in the signature
/// or body. A block mentioning none of them is public, which is the
/// language default.
pub fn function_visibility(block: &[SourceLine<'_>]) -> Category {
    VISIBILITY
        .into_iter()
        .find(|(keyword, _)| block.iter().any(|line| line.text().contains(*keyword)))
        .map_or(Category::PublicFunction, |(_, category)| category)
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn whitespace0<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    take_while(0.., |c: char| c.is_whitespace()).parse_next(input)
}

fn whitespace1<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    take_while(1.., |c: char| c.is_whitespace()).parse_next(input)
}

fn header(input: &mut Input<'_>) -> IResult<()> {
    alt(("// SPDX", "pragma solidity")).void().parse_next(input)
}

fn import(input: &mut Input<'_>) -> IResult<()> {
    "import ".void().parse_next(input)
}

/// Prefix match only: `contract`, `interface`, `library` need no word
/// boundary after them.
fn contract_declaration(input: &mut Input<'_>) -> IResult<()> {
    alt(("contract", "interface", "library", "abstract contract"))
        .void()
        .parse_next(input)
}

/// `<keyword>` followed by whitespace and the start of a name.
fn named_declaration(input: &mut Input<'_>, keyword: &'static str) -> IResult<()> {
    (keyword, whitespace1, one_of(is_identifier_char))
        .void()
        .parse_next(input)
}

/// `<keyword>` followed by optional whitespace and `(`.
fn special_function(input: &mut Input<'_>, keyword: &'static str) -> IResult<()> {
    (keyword, whitespace0, '(').void().parse_next(input)
}

fn receive_or_fallback(input: &mut Input<'_>) -> IResult<()> {
    (alt(("receive", "fallback")), whitespace0, '(')
        .void()
        .parse_next(input)
}

fn state_variable(input: &mut Input<'_>) -> IResult<()> {
    alt((
        alt((
            "mapping", "uint", "int", "bool", "address", "string", "bytes", "array",
        ))
        .void(),
        (
            take_while(1.., is_identifier_char),
            whitespace1,
            alt(("public", "private", "internal")),
        )
            .void(),
    ))
    .parse_next(input)
}

fn mentions(stripped: &str, word: &str) -> bool {
    !stripped.starts_with("//") && stripped.contains(word)
}
