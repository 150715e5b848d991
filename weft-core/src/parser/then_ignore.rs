use crate::{ParseError, ParseState, Parser, PrintError};

/// Sequences a parser with a unit-valued one, keeping the first value.
///
/// Created by [`Parser::then_ignore()`].
pub struct ThenIgnore<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> Parser for ThenIgnore<A, B>
where
    A: Parser,
    B: Parser<State = A::State, Value = ()>,
{
    type State = A::State;
    type Value = A::Value;

    fn parse(&self, state: Self::State) -> Result<(Self::State, Self::Value), ParseError> {
        let (rest, value) = self.first.parse(state)?;
        let (rest, ()) = self.second.parse(rest)?;
        Ok((rest, value))
    }

    fn print(&self, value: &Self::Value) -> Result<Self::State, PrintError> {
        let left = self.first.print(value)?;
        let right = self.second.print(&())?;
        Ok(left.combine(right))
    }

    fn template(&self, value: &Self::Value) -> Result<Self::State, PrintError> {
        let left = self.first.template(value)?;
        let right = self.second.template(&())?;
        Ok(left.combine(right))
    }
}
