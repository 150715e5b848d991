use std::sync::Arc;

use crate::{ParseError, ParseState, Parser, PrintError};

/// A type-erased, cheaply clonable parser.
///
/// Created by [`Parser::boxed()`]. Concrete combinator types grow with the
/// shape of the grammar; erasing them lets heterogeneous branches live in
/// the same collection or struct field. The inner parser sits behind an
/// [`Arc`], so clones share it and the whole value stays safe to send
/// across threads.
pub struct BoxedParser<S, A> {
    inner: Arc<dyn Parser<State = S, Value = A> + Send + Sync>,
}

impl<S: ParseState, A> BoxedParser<S, A> {
    pub(crate) fn new<P>(parser: P) -> Self
    where
        P: Parser<State = S, Value = A> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(parser),
        }
    }
}

impl<S, A> Clone for BoxedParser<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: ParseState, A> Parser for BoxedParser<S, A> {
    type State = S;
    type Value = A;

    fn parse(&self, state: Self::State) -> Result<(Self::State, Self::Value), ParseError> {
        self.inner.parse(state)
    }

    fn print(&self, value: &Self::Value) -> Result<Self::State, PrintError> {
        self.inner.print(value)
    }

    fn template(&self, value: &Self::Value) -> Result<Self::State, PrintError> {
        self.inner.template(value)
    }
}
