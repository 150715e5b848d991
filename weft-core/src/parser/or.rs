use crate::{ParseError, Parser, PrintError};

/// Ordered choice between two parsers of the same value type.
///
/// Created by [`Parser::or()`]. Parsing clones the incoming state so the
/// second branch can retry from the exact point the first branch started;
/// a failed first branch therefore consumes nothing. Printing is driven by
/// the value, not the state: the first branch whose print succeeds wins.
pub struct Or<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> Parser for Or<A, B>
where
    A: Parser,
    B: Parser<State = A::State, Value = A::Value>,
{
    type State = A::State;
    type Value = A::Value;

    fn parse(&self, state: Self::State) -> Result<(Self::State, Self::Value), ParseError> {
        match self.first.parse(state.clone()) {
            Ok(hit) => Ok(hit),
            Err(_) => self.second.parse(state),
        }
    }

    fn print(&self, value: &Self::Value) -> Result<Self::State, PrintError> {
        self.first
            .print(value)
            .or_else(|_| self.second.print(value))
    }

    fn template(&self, value: &Self::Value) -> Result<Self::State, PrintError> {
        self.first
            .template(value)
            .or_else(|_| self.second.template(value))
    }
}
