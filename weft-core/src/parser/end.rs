use std::marker::PhantomData;

use crate::{ParseError, ParseState, Parser, PrintError};

/// Succeeds only when no input remains.
///
/// Append with [`Parser::then_ignore()`] to make a grammar strict: any
/// unconsumed input becomes [`ParseError::TrailingInput`]. Printing and
/// templating trivially succeed with the empty state.
pub fn end<S: ParseState>() -> End<S> {
    End {
        _state: PhantomData,
    }
}

/// The end-of-input marker parser. Created by [`end()`].
pub struct End<S> {
    _state: PhantomData<fn() -> S>,
}

impl<S: ParseState> Parser for End<S> {
    type State = S;
    type Value = ();

    fn parse(&self, state: Self::State) -> Result<(Self::State, Self::Value), ParseError> {
        if state.is_empty() {
            Ok((state, ()))
        } else {
            Err(ParseError::TrailingInput)
        }
    }

    fn print(&self, _value: &Self::Value) -> Result<Self::State, PrintError> {
        Ok(S::empty())
    }

    fn template(&self, _value: &Self::Value) -> Result<Self::State, PrintError> {
        Ok(S::empty())
    }
}
