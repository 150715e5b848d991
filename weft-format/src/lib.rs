//! Format-string specialization of the `weft-core` combinators.
//!
//! Grammars here operate over [`StringTemplate`] state: literal parts plus a
//! parallel list of typed arguments. Build them from [`slit`] and [`sparam`]
//! leaves with the combinators of [`Parser`], then wrap the result in a
//! [`StringFormat`] to render values, match text, and preview templates.

mod arg;
mod format;
pub mod iso;
mod specifier;
mod string_template;

pub use arg::{FormatArg, FormatOptions};
pub use format::{slit, sparam, sparam_at, SLit, SParam, StringFormat};
pub use specifier::{substitute, FormatValue, Specifier};
pub use string_template::StringTemplate;

// The pieces of the core algebra needed to use this crate on its own.
pub use weft_core::{
    end, fail, BoxedParser, ParseError, ParseState, Parser, PartialIso, PrintError, Template,
};
