//! Shared grammars for the cross-crate tests.

use weft_core::PartialIso;
use weft_format::{iso, slit, sparam, BoxedParser, Parser, StringFormat, StringTemplate};

/// `"hello" <> <string> <> "year" <> <int>`, the worked four-part grammar.
pub fn hello_year() -> impl Parser<State = StringTemplate, Value = (String, i32)> {
    slit("hello")
        .ignore_then(sparam(iso::text()))
        .then_ignore(slit("year"))
        .then(sparam(iso::parsed::<i32>()))
}

/// `"Count: " <> <int>` wrapped as a ready-to-use format.
pub fn count_format() -> StringFormat<BoxedParser<StringTemplate, i32>> {
    StringFormat::new(slit("Count: ").ignore_then(sparam(iso::parsed::<i32>())).boxed())
}

/// An alternation grammar mapping `"yes"`/`"no"` to a boolean.
///
/// Each branch prints only its own variant, so print direction falls
/// through cleanly.
pub fn yes_no() -> impl Parser<State = StringTemplate, Value = bool> {
    let yes = slit("yes").map(PartialIso::new(
        |(): &()| Some(true),
        |flag: &bool| flag.then_some(()),
    ));
    let no = slit("no").map(PartialIso::new(
        |(): &()| Some(false),
        |flag: &bool| (!flag).then_some(()),
    ));
    yes.or(no)
}
