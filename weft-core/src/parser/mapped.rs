use crate::{ParseError, Parser, PartialIso, PrintError};

/// Converts a parser's value type through a [`PartialIso`].
///
/// Created by [`Parser::map()`]. The iso runs after the inner parse on the
/// way in and before the inner print on the way out; a rejection in either
/// direction fails the composite.
pub struct Mapped<P, B>
where
    P: Parser,
{
    pub(crate) inner: P,
    pub(crate) iso: PartialIso<P::Value, B>,
}

impl<P, B> Parser for Mapped<P, B>
where
    P: Parser,
{
    type State = P::State;
    type Value = B;

    fn parse(&self, state: Self::State) -> Result<(Self::State, Self::Value), ParseError> {
        let (rest, inner) = self.inner.parse(state)?;
        let value = self.iso.apply(&inner).ok_or(ParseError::Mapping)?;
        Ok((rest, value))
    }

    fn print(&self, value: &Self::Value) -> Result<Self::State, PrintError> {
        let inner = self.iso.unapply(value).ok_or(PrintError::Conversion)?;
        self.inner.print(&inner)
    }

    fn template(&self, value: &Self::Value) -> Result<Self::State, PrintError> {
        let inner = self.iso.unapply(value).ok_or(PrintError::Conversion)?;
        self.inner.template(&inner)
    }
}
