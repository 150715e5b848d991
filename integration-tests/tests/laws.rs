//! Algebraic laws: the template monoids, alternation policy, and
//! sequencing strictness.

use std::cell::Cell;

use integration_tests::yes_no;
use weft_core::{ParseError, ParseState, Parser, PrintError, Template};
use weft_format::{iso, slit, sparam, FormatArg, StringTemplate};

#[test]
fn template_monoid_laws() {
    let x = Template::single("x");
    let y = Template::single("y");
    let z = Template::single("z");

    assert_eq!(
        x.clone().combine(y.clone()).combine(z.clone()),
        x.clone().combine(y.clone().combine(z.clone())),
    );
    assert_eq!(Template::empty().combine(x.clone()), x);
    assert_eq!(x.clone().combine(Template::empty()), x);
}

#[test]
fn string_template_monoid_laws() {
    let x = StringTemplate::literal("x");
    let y = StringTemplate::placeholder("%d", FormatArg::Int32(1));
    let z = StringTemplate::placeholder("%@", FormatArg::Text("z".into()));

    assert_eq!(
        x.clone().combine(y.clone()).combine(z.clone()),
        x.clone().combine(y.clone().combine(z.clone())),
    );
    assert_eq!(StringTemplate::empty().combine(x.clone()), x);
    assert_eq!(x.clone().combine(StringTemplate::empty()), x);
}

#[test]
fn alternation_takes_the_first_matching_branch() {
    // Both branches accept any single part; the left one must win.
    let left = sparam(iso::text()).map(weft_core::PartialIso::new(
        |text: &String| Some(format!("left:{text}")),
        |tagged: &String| tagged.strip_prefix("left:").map(str::to_string),
    ));
    let right = sparam(iso::text());
    let grammar = left.or(right);

    let (_, value) = grammar
        .parse(StringTemplate::from_text("input"))
        .expect("parses");
    assert_eq!(value, "left:input");
}

#[test]
fn alternation_print_is_value_driven() {
    let grammar = yes_no();

    let yes = grammar.print(&true).expect("prints");
    assert_eq!(yes.template().parts(), ["yes"]);
    let no = grammar.print(&false).expect("prints");
    assert_eq!(no.template().parts(), ["no"]);
}

#[test]
fn alternation_with_no_accepting_branch_is_unrepresentable() {
    // Both branches only print `true`.
    let only_yes = slit("yes").map(weft_core::PartialIso::new(
        |(): &()| Some(true),
        |flag: &bool| flag.then_some(()),
    ));
    let also_yes = slit("YES").map(weft_core::PartialIso::new(
        |(): &()| Some(true),
        |flag: &bool| flag.then_some(()),
    ));
    let grammar = only_yes.or(also_yes);

    assert_eq!(grammar.print(&false), Err(PrintError::Unrepresentable));
}

/// A parser that records whether it was invoked.
struct Probe<'a>(&'a Cell<bool>);

impl Parser for Probe<'_> {
    type State = StringTemplate;
    type Value = ();

    fn parse(&self, state: StringTemplate) -> Result<(StringTemplate, ()), ParseError> {
        self.0.set(true);
        Ok((state, ()))
    }

    fn print(&self, _value: &()) -> Result<StringTemplate, PrintError> {
        self.0.set(true);
        Ok(StringTemplate::new())
    }

    fn template(&self, value: &()) -> Result<StringTemplate, PrintError> {
        self.print(value)
    }
}

#[test]
fn failed_sequencing_never_invokes_the_right_side() {
    let invoked = Cell::new(false);
    let grammar = slit("expected").ignore_then(Probe(&invoked));

    let result = grammar.parse(StringTemplate::from_text("other"));
    assert!(result.is_err());
    assert!(!invoked.get());
}

#[test]
fn failed_alternation_branch_leaves_the_state_untouched() {
    // The failing left branch partially consumes a cloned state; the right
    // branch must still see both original parts.
    let left = slit("a").ignore_then(slit("never")).ignore_then(sparam(iso::text()));
    let right = slit("a").ignore_then(sparam(iso::text()));
    let grammar = left.or(right);

    let input = StringTemplate::literal("a") + StringTemplate::literal("bc");
    let (rest, value) = grammar.parse(input).expect("right branch matches");
    assert!(rest.is_empty());
    assert_eq!(value, "bc");
}
