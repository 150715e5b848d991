//! Invertible parser-printer combinators.
//!
//! One declarative grammar both parses a typed value out of a template and
//! prints a template back from a value, with a round-trip guarantee. See
//! [`Parser`] for the three-fold contract and the combinator surface, and
//! the `weft-format` crate for the string-format specialization.

mod error;
mod parser;
mod partial_iso;
mod state;
mod template;

pub use error::{ParseError, PrintError};
pub use parser::{
    end, fail, BoxedParser, End, Fail, IgnoreThen, Mapped, Or, Parser, Then, ThenIgnore,
};
pub use partial_iso::PartialIso;
pub use state::ParseState;
pub use template::Template;
