use crate::{ParseError, ParseState, Parser, PrintError};

/// Sequences a unit-valued parser with another, keeping the second value.
///
/// Created by [`Parser::ignore_then()`]. The discarded left side still
/// consumes input when parsing and still emits its fragment when printing.
pub struct IgnoreThen<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> Parser for IgnoreThen<A, B>
where
    A: Parser<Value = ()>,
    B: Parser<State = A::State>,
{
    type State = A::State;
    type Value = B::Value;

    fn parse(&self, state: Self::State) -> Result<(Self::State, Self::Value), ParseError> {
        let (rest, ()) = self.first.parse(state)?;
        self.second.parse(rest)
    }

    fn print(&self, value: &Self::Value) -> Result<Self::State, PrintError> {
        let left = self.first.print(&())?;
        let right = self.second.print(value)?;
        Ok(left.combine(right))
    }

    fn template(&self, value: &Self::Value) -> Result<Self::State, PrintError> {
        let left = self.first.template(&())?;
        let right = self.second.template(value)?;
        Ok(left.combine(right))
    }
}
