use std::ops::Add;

use weft_core::{ParseState, Template};

use crate::{substitute, FormatArg, FormatOptions};

/// A [`Template`] paired with its ordered argument list.
///
/// `StringTemplate` extends the template monoid: concatenation appends both
/// the parts and the arguments, keeping the two index-aligned: at any
/// point, the argument count matches the number of placeholder parts
/// contributed so far. Parts carry no placeholder marker, so that alignment
/// is maintained by the leaf parsers, not checked here.
///
/// # Examples
///
/// ```
/// use weft_format::{FormatArg, StringTemplate};
///
/// let greeting = StringTemplate::literal("Hello, ")
///     + StringTemplate::placeholder("%@", FormatArg::Text("world".into()));
///
/// assert_eq!(greeting.render(), "Hello, world");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StringTemplate {
    template: Template,
    args: Vec<FormatArg>,
}

impl StringTemplate {
    /// Creates the empty string template, the monoid identity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps raw input text as a single-part template with no arguments.
    ///
    /// This is the entry point for matching: the grammar's literal parsers
    /// split the part up as they consume prefixes of it.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            template: Template::single(text),
            args: Vec::new(),
        }
    }

    /// Creates a single literal part carrying no argument.
    #[must_use]
    pub fn literal(part: impl Into<String>) -> Self {
        Self {
            template: Template::single(part),
            args: Vec::new(),
        }
    }

    /// Creates a single placeholder part with its aligned argument.
    #[must_use]
    pub fn placeholder(part: impl Into<String>, arg: FormatArg) -> Self {
        Self {
            template: Template::single(part),
            args: vec![arg],
        }
    }

    /// Returns the underlying template.
    #[must_use]
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Returns the arguments in order.
    #[must_use]
    pub fn args(&self) -> &[FormatArg] {
        &self.args
    }

    /// Splits off the first part, leaving the arguments untouched.
    #[must_use]
    pub fn split_first(self) -> Option<(String, StringTemplate)> {
        let Self { template, args } = self;
        let (head, rest) = template.split_first()?;
        Some((
            head,
            Self {
                template: rest,
                args,
            },
        ))
    }

    /// Pushes an unconsumed literal remainder back onto the front.
    #[must_use]
    pub fn push_front(self, part: impl Into<String>) -> Self {
        Self {
            template: self.template.push_front(part),
            args: self.args,
        }
    }

    /// Drops the leading argument, if any.
    ///
    /// Called when a placeholder part is consumed, so that parsing a printed
    /// template keeps parts and arguments aligned.
    #[must_use]
    pub fn drop_first_argument(mut self) -> Self {
        if !self.args.is_empty() {
            self.args.remove(0);
        }
        self
    }

    /// Renders the final text with default options.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(&FormatOptions::default())
    }

    /// Concatenates the parts and substitutes any format specifiers using
    /// the argument list.
    #[must_use]
    pub fn render_with(&self, options: &FormatOptions) -> String {
        substitute(&self.template.concatenated(), &self.args, options)
    }
}

impl ParseState for StringTemplate {
    fn empty() -> Self {
        Self::new()
    }

    fn is_empty(&self) -> bool {
        self.template.is_empty() && self.args.is_empty()
    }

    fn combine(mut self, other: Self) -> Self {
        Self {
            template: self.template.combine(other.template),
            args: {
                self.args.extend(other.args);
                self.args
            },
        }
    }
}

impl Add for StringTemplate {
    type Output = StringTemplate;

    fn add(self, rhs: StringTemplate) -> StringTemplate {
        self.combine(rhs)
    }
}
