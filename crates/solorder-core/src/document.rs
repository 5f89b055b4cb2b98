//! Lines partitioned by category.

use indexmap::IndexMap;

use crate::{category::Category, source::SourceLine};

/// A source file's lines grouped by [`Category`].
///
/// Categories are stored in first-seen order; the canonical order is
/// applied only when the document is read back through
/// [`ClassifiedDocument::iter_canonical`]. Within a category, lines keep the
/// order in which they were pushed.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedDocument<'a> {
    sections: IndexMap<Category, Vec<SourceLine<'a>>>,
}

impl<'a> ClassifiedDocument<'a> {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line to a category.
    pub fn push(&mut self, category: Category, line: SourceLine<'a>) {
        self.sections.entry(category).or_default().push(line);
    }

    /// Append several lines to a category, keeping their order.
    pub fn extend(&mut self, category: Category, lines: impl IntoIterator<Item = SourceLine<'a>>) {
        self.sections.entry(category).or_default().extend(lines);
    }

    /// Lines recorded for a category, empty if none.
    pub fn lines(&self, category: Category) -> &[SourceLine<'a>] {
        self.sections
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Categories with at least one line, in canonical order, with their lines.
    pub fn iter_canonical(&self) -> impl Iterator<Item = (Category, &[SourceLine<'a>])> {
        Category::CANONICAL_ORDER
            .into_iter()
            .map(|category| (category, self.lines(category)))
            .filter(|(_, lines)| !lines.is_empty())
    }

    /// Categories in the order they were first seen during classification.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.sections
            .iter()
            .filter(|(_, lines)| !lines.is_empty())
            .map(|(category, _)| *category)
    }

    /// Total number of lines across all categories.
    pub fn len(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    /// Returns `true` if no line has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The category holding the line with the given source index, if any.
    pub fn category_of(&self, index: usize) -> Option<Category> {
        self.sections
            .iter()
            .find(|(_, lines)| lines.iter().any(|line| line.index() == index))
            .map(|(category, _)| *category)
    }
}
