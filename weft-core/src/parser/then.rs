use crate::{ParseError, ParseState, Parser, PrintError};

/// Sequences two parsers, pairing their values.
///
/// Created by [`Parser::then()`]. Parsing is strict left-to-right: the
/// second parser only runs on the first one's leftover state, and either
/// failure fails the composite. Printing concatenates the two fragments in
/// order, relying on the state monoid's associativity.
pub struct Then<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> Parser for Then<A, B>
where
    A: Parser,
    B: Parser<State = A::State>,
{
    type State = A::State;
    type Value = (A::Value, B::Value);

    fn parse(&self, state: Self::State) -> Result<(Self::State, Self::Value), ParseError> {
        let (rest, left) = self.first.parse(state)?;
        let (rest, right) = self.second.parse(rest)?;
        Ok((rest, (left, right)))
    }

    fn print(&self, value: &Self::Value) -> Result<Self::State, PrintError> {
        let left = self.first.print(&value.0)?;
        let right = self.second.print(&value.1)?;
        Ok(left.combine(right))
    }

    fn template(&self, value: &Self::Value) -> Result<Self::State, PrintError> {
        let left = self.first.template(&value.0)?;
        let right = self.second.template(&value.1)?;
        Ok(left.combine(right))
    }
}
