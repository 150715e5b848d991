use weft_core::{end, ParseError, Parser, PartialIso, PrintError};

use crate::{iso::formatted, FormatValue, StringTemplate};

/// Matches a literal text fragment.
///
/// Parsing requires the first remaining part to equal the literal exactly,
/// or to start with it; in the latter case the unconsumed remainder is
/// pushed back as the new first part, which is what lets a grammar walk
/// through raw, unsplit input text. Matching is case-sensitive. Printing
/// and templating always succeed with a single literal part.
pub fn slit(text: impl Into<String>) -> SLit {
    SLit { text: text.into() }
}

/// Matches a typed placeholder through a [`PartialIso`].
///
/// Parsing takes the whole first part, applies the iso's forward direction,
/// and fails the composite on rejection with nothing consumed. Printing
/// renders the value through the iso's backward direction and appends the
/// argument to the template's list; templating emits the type's format
/// specifier instead (see [`FormatValue`]).
pub fn sparam<A>(iso: PartialIso<String, A>) -> SParam<A>
where
    A: FormatValue + 'static,
{
    SParam::new(iso, None)
}

/// Like [`sparam`], but the template direction renders the indexed
/// specifier form `%N$…` with the given 1-based position.
pub fn sparam_at<A>(iso: PartialIso<String, A>, position: usize) -> SParam<A>
where
    A: FormatValue + 'static,
{
    SParam::new(iso, Some(position))
}

/// The literal-fragment parser. Created by [`slit()`].
pub struct SLit {
    text: String,
}

impl Parser for SLit {
    type State = StringTemplate;
    type Value = ();

    fn parse(&self, state: Self::State) -> Result<(Self::State, Self::Value), ParseError> {
        let (head, rest) = state.split_first().ok_or(ParseError::UnexpectedEnd {
            expected: self.text.clone(),
        })?;
        match head.strip_prefix(&self.text) {
            Some("") => Ok((rest, ())),
            Some(remainder) => {
                let remainder = remainder.to_string();
                Ok((rest.push_front(remainder), ()))
            }
            None => Err(ParseError::LiteralMismatch {
                expected: self.text.clone(),
                found: head,
            }),
        }
    }

    fn print(&self, _value: &Self::Value) -> Result<Self::State, PrintError> {
        Ok(StringTemplate::literal(&self.text))
    }

    fn template(&self, value: &Self::Value) -> Result<Self::State, PrintError> {
        self.print(value)
    }
}

/// The typed-placeholder parser. Created by [`sparam()`] and [`sparam_at()`].
pub struct SParam<A> {
    iso: PartialIso<String, A>,
    formatted: PartialIso<String, A>,
}

impl<A: FormatValue + 'static> SParam<A> {
    fn new(iso: PartialIso<String, A>, position: Option<usize>) -> Self {
        let formatted = formatted(&iso, A::SPECIFIER.render(position));
        Self { iso, formatted }
    }
}

impl<A: FormatValue + 'static> Parser for SParam<A> {
    type State = StringTemplate;
    type Value = A;

    fn parse(&self, state: Self::State) -> Result<(Self::State, Self::Value), ParseError> {
        let (head, rest) = state.split_first().ok_or(ParseError::UnexpectedEnd {
            expected: A::SPECIFIER.render(None),
        })?;
        match self.iso.apply(&head) {
            Some(value) => Ok((rest.drop_first_argument(), value)),
            None => Err(ParseError::Conversion { input: head }),
        }
    }

    fn print(&self, value: &Self::Value) -> Result<Self::State, PrintError> {
        let part = self.iso.unapply(value).ok_or(PrintError::Conversion)?;
        Ok(StringTemplate::placeholder(part, value.argument()))
    }

    fn template(&self, value: &Self::Value) -> Result<Self::State, PrintError> {
        let part = self.formatted.unapply(value).ok_or(PrintError::Conversion)?;
        Ok(StringTemplate::placeholder(part, value.argument()))
    }
}

/// The front door of the string-format algebra.
///
/// Wraps a grammar over [`StringTemplate`] state and exposes the three
/// user-facing operations: [`render()`](StringFormat::render) (value to
/// final text), [`match_text()`](StringFormat::match_text) (text back to
/// value, strict about trailing input), and
/// [`template_for()`](StringFormat::template_for) (the specifier-annotated
/// preview a localization layer hooks into).
///
/// # Examples
///
/// ```
/// use weft_format::{iso, slit, sparam, Parser, StringFormat};
///
/// let format = StringFormat::new(slit("Count: ").ignore_then(sparam(iso::parsed::<i32>())));
///
/// assert_eq!(format.render(&5).unwrap(), "Count: 5");
/// assert_eq!(format.match_text("Count: 5").unwrap(), 5);
/// assert!(format.match_text("Count: abc").is_err());
///
/// let preview = format.template_for(&5).unwrap();
/// assert_eq!(preview.template().parts(), ["Count: ", "%d"]);
/// assert_eq!(preview.render(), "Count: 5");
/// ```
#[derive(Debug, Clone)]
pub struct StringFormat<P> {
    parser: P,
}

impl<P> StringFormat<P>
where
    P: Parser<State = StringTemplate>,
{
    /// Wraps a grammar over [`StringTemplate`] state.
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Renders a value to its final text.
    ///
    /// Runs the print direction and joins the parts as-is. The printed parts
    /// already carry the value's own text, which may itself contain `%`
    /// sequences; specifier substitution only runs on the template path,
    /// where the `%` parts are genuine placeholders.
    ///
    /// # Errors
    ///
    /// Fails if the grammar cannot represent the value: no alternation
    /// branch accepts it, or a placeholder's conversion rejects it.
    pub fn render(&self, value: &P::Value) -> Result<String, PrintError> {
        Ok(self.parser.print(value)?.template().concatenated())
    }

    /// Parses a value back out of rendered text.
    ///
    /// The text is wrapped as a single-part template, parsed, and then
    /// required to be fully consumed.
    ///
    /// Placeholder parsers consume whole parts, so two placeholders with no
    /// separating literal between them cannot be told apart in raw text;
    /// grammars intended for matching should keep a literal between
    /// adjacent placeholders.
    ///
    /// # Errors
    ///
    /// Fails on a literal mismatch, a placeholder conversion the iso
    /// rejects, or trailing input left over after the grammar was satisfied.
    pub fn match_text(&self, text: &str) -> Result<P::Value, ParseError> {
        let (rest, value) = self.parser.parse(StringTemplate::from_text(text))?;
        let (_, ()) = end::<StringTemplate>().parse(rest)?;
        Ok(value)
    }

    /// Produces the specifier-annotated preview of a value's rendering.
    ///
    /// The returned template carries the value's arguments, so rendering it
    /// yields the same text as [`render()`](StringFormat::render). This is
    /// the seam where a localization layer can swap the template text for a
    /// locale-specific variant before final substitution.
    ///
    /// # Errors
    ///
    /// Same conditions as [`render()`](StringFormat::render).
    pub fn template_for(&self, value: &P::Value) -> Result<StringTemplate, PrintError> {
        self.parser.template(value)
    }
}
