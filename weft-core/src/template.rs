use std::ops::Add;

use crate::ParseState;

/// An ordered sequence of literal text fragments.
///
/// A `Template` is the textual shape of a grammar: each part is either a
/// literal fragment or the rendered text of a placeholder. Parts carry no
/// marker distinguishing the two; once rendered, a placeholder is
/// indistinguishable from literal text.
///
/// Templates form a monoid: [`Template::new`] is the identity and
/// concatenation (via [`ParseState::combine`] or `+`) appends parts in
/// order. Sequencing combinators rely on these laws to compose grammars
/// independently of grouping.
///
/// # Examples
///
/// ```
/// use weft_core::Template;
///
/// let greeting = Template::single("Hello, ") + Template::single("world");
/// assert_eq!(greeting.parts(), ["Hello, ", "world"]);
/// assert_eq!(greeting.concatenated(), "Hello, world");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Template {
    parts: Vec<String>,
}

impl Template {
    /// Creates the empty template, the monoid identity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a template from an ordered list of parts.
    #[must_use]
    pub fn from_parts(parts: Vec<String>) -> Self {
        Self { parts }
    }

    /// Creates a template holding exactly one part.
    #[must_use]
    pub fn single(part: impl Into<String>) -> Self {
        Self {
            parts: vec![part.into()],
        }
    }

    /// Returns the parts in order.
    #[must_use]
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Returns the number of parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns `true` if the template holds no parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Splits off the first part, returning it together with the remainder.
    ///
    /// Returns `None` on an empty template.
    #[must_use]
    pub fn split_first(mut self) -> Option<(String, Template)> {
        if self.parts.is_empty() {
            return None;
        }
        let head = self.parts.remove(0);
        Some((head, self))
    }

    /// Pushes a part back onto the front of the template.
    ///
    /// Used by literal matchers to return the unconsumed remainder of a
    /// partially matched part.
    #[must_use]
    pub fn push_front(mut self, part: impl Into<String>) -> Self {
        self.parts.insert(0, part.into());
        self
    }

    /// Concatenates all parts into the final text, with no separators.
    #[must_use]
    pub fn concatenated(&self) -> String {
        self.parts.concat()
    }
}

impl ParseState for Template {
    fn empty() -> Self {
        Self::new()
    }

    fn is_empty(&self) -> bool {
        Template::is_empty(self)
    }

    fn combine(mut self, other: Self) -> Self {
        self.parts.extend(other.parts);
        self
    }
}

impl Add for Template {
    type Output = Template;

    fn add(self, rhs: Template) -> Template {
        self.combine(rhs)
    }
}
