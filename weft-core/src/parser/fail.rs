use std::marker::PhantomData;

use crate::{ParseError, ParseState, Parser, PrintError};

/// The never-matching parser: every direction fails.
///
/// This is the identity element for [`Parser::or()`], which makes it the
/// natural seed when folding a list of grammar alternatives into a single
/// parser.
pub fn fail<S: ParseState, A>() -> Fail<S, A> {
    Fail {
        _marker: PhantomData,
    }
}

/// The never-matching parser. Created by [`fail()`].
pub struct Fail<S, A> {
    _marker: PhantomData<fn() -> (S, A)>,
}

impl<S: ParseState, A> Parser for Fail<S, A> {
    type State = S;
    type Value = A;

    fn parse(&self, _state: Self::State) -> Result<(Self::State, Self::Value), ParseError> {
        Err(ParseError::Unmatched)
    }

    fn print(&self, _value: &Self::Value) -> Result<Self::State, PrintError> {
        Err(PrintError::Unrepresentable)
    }

    fn template(&self, _value: &Self::Value) -> Result<Self::State, PrintError> {
        Err(PrintError::Unrepresentable)
    }
}
