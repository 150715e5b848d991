mod boxed;
mod end;
mod fail;
mod ignore_then;
mod mapped;
mod or;
mod then;
mod then_ignore;

pub use boxed::BoxedParser;
pub use end::{end, End};
pub use fail::{fail, Fail};
pub use ignore_then::IgnoreThen;
pub use mapped::Mapped;
pub use or::Or;
pub use then::Then;
pub use then_ignore::ThenIgnore;

use crate::{ParseError, ParseState, PartialIso, PrintError};

/// The core trait for invertible parser-printers.
///
/// A `Parser` is one grammar node read in three directions:
///
/// - [`parse()`](Parser::parse) consumes a prefix of the state and produces
///   a typed value plus the leftover state.
/// - [`print()`](Parser::print) produces a complete state fragment from a
///   value, or fails if the value cannot be represented by this node.
/// - [`template()`](Parser::template) is like `print`, but placeholders
///   render as their format-specifier text instead of the bound value.
///
/// Parsers are stateless after construction: they hold no mutable fields,
/// perform no I/O, and may be shared and invoked concurrently.
///
/// # The round-trip law
///
/// Whenever `print(a)` succeeds with state `s`, `parse(s)` must succeed and
/// return the empty leftover state together with `a`. This is the central
/// correctness contract; every combinator below preserves it as long as the
/// [`PartialIso`]s involved are honest inverses.
///
/// # Composing parsers
///
/// Grammars are assembled with [`then()`](Parser::then) (sequencing),
/// [`ignore_then()`](Parser::ignore_then) / [`then_ignore()`](Parser::then_ignore)
/// (sequencing that drops a unit-valued side), [`or()`](Parser::or) (ordered
/// choice), and [`map()`](Parser::map) (result conversion through a
/// [`PartialIso`]). The leaves [`end()`] and [`fail()`] mark strict
/// end-of-input and the never-matching grammar.
///
/// # Example
///
/// ```
/// use weft_core::{ParseError, Parser, PrintError, Template};
///
/// /// Matches one template part exactly.
/// struct Lit(&'static str);
///
/// impl Parser for Lit {
///     type State = Template;
///     type Value = ();
///
///     fn parse(&self, state: Template) -> Result<(Template, ()), ParseError> {
///         let (head, rest) = state.split_first().ok_or(ParseError::UnexpectedEnd {
///             expected: self.0.to_string(),
///         })?;
///         if head == self.0 {
///             Ok((rest, ()))
///         } else {
///             Err(ParseError::LiteralMismatch {
///                 expected: self.0.to_string(),
///                 found: head,
///             })
///         }
///     }
///
///     fn print(&self, _value: &()) -> Result<Template, PrintError> {
///         Ok(Template::single(self.0))
///     }
///
///     fn template(&self, value: &()) -> Result<Template, PrintError> {
///         self.print(value)
///     }
/// }
///
/// let grammar = Lit("hello").then(Lit("world"));
///
/// let input = Template::from_parts(vec!["hello".into(), "world".into()]);
/// let (rest, value) = grammar.parse(input).unwrap();
/// assert!(rest.is_empty());
/// assert_eq!(value, ((), ()));
///
/// let printed = grammar.print(&((), ())).unwrap();
/// assert_eq!(printed.parts(), ["hello", "world"]);
/// ```
pub trait Parser {
    type State: ParseState;
    type Value;

    /// Consumes a prefix of `state`, returning the leftover state and the
    /// parsed value.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the state does not match this grammar
    /// node. A failed parse consumes nothing; callers that want to retry
    /// (such as alternation) clone the state beforehand.
    fn parse(&self, state: Self::State) -> Result<(Self::State, Self::Value), ParseError>;

    /// Produces the state fragment representing `value`.
    ///
    /// # Errors
    ///
    /// Returns a [`PrintError`] if this grammar node cannot represent the
    /// value (for example, an alternation where no branch accepts it).
    fn print(&self, value: &Self::Value) -> Result<Self::State, PrintError>;

    /// Like [`print()`](Parser::print), but placeholder nodes render their
    /// format specifier instead of the value's text.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as `print`.
    fn template(&self, value: &Self::Value) -> Result<Self::State, PrintError>;

    /// Sequences this parser with another, pairing their values.
    ///
    /// Parsing runs `self` first and `next` on the leftover state; either
    /// side failing fails the composite without invoking what follows.
    /// Printing concatenates the two fragments in order.
    fn then<P>(self, next: P) -> Then<Self, P>
    where
        Self: Sized,
        P: Parser<State = Self::State>,
    {
        Then {
            first: self,
            second: next,
        }
    }

    /// Sequences this unit-valued parser with another, keeping only the
    /// second value.
    ///
    /// The discarded side still consumes input when parsing and still emits
    /// its fragment when printing.
    fn ignore_then<P>(self, next: P) -> IgnoreThen<Self, P>
    where
        Self: Sized + Parser<Value = ()>,
        P: Parser<State = Self::State>,
    {
        IgnoreThen {
            first: self,
            second: next,
        }
    }

    /// Sequences this parser with a unit-valued one, keeping only the first
    /// value.
    fn then_ignore<P>(self, next: P) -> ThenIgnore<Self, P>
    where
        Self: Sized,
        P: Parser<State = Self::State, Value = ()>,
    {
        ThenIgnore {
            first: self,
            second: next,
        }
    }

    /// Ordered choice between this parser and an alternative.
    ///
    /// Parsing tries `self` first; if it fails, `alt` is retried from the
    /// original, unconsumed state. The first success wins; there are no
    /// combined or ambiguous results. Printing and templating likewise use
    /// the first branch that can represent the value, so branches should
    /// accept disjoint subsets of the value space; the engine does not
    /// detect overlap, and an overlapping earlier branch wins silently.
    fn or<P>(self, alt: P) -> Or<Self, P>
    where
        Self: Sized,
        P: Parser<State = Self::State, Value = Self::Value>,
    {
        Or {
            first: self,
            second: alt,
        }
    }

    /// Converts this parser's value type through a [`PartialIso`].
    ///
    /// Parsing applies `iso.apply` to the inner match, failing the composite
    /// if the iso rejects it. Printing and templating apply `iso.unapply`
    /// to recover the inner value before delegating.
    fn map<B>(self, iso: PartialIso<Self::Value, B>) -> Mapped<Self, B>
    where
        Self: Sized,
    {
        Mapped { inner: self, iso }
    }

    /// Erases this parser's concrete type behind a shared pointer.
    ///
    /// Useful for storing heterogeneous grammar branches uniformly, e.g.
    /// folding a list of alternatives with [`fail()`] as the identity.
    fn boxed(self) -> BoxedParser<Self::State, Self::Value>
    where
        Self: Sized + Send + Sync + 'static,
    {
        BoxedParser::new(self)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::Template;

    /// Matches one template part exactly.
    struct Lit(&'static str);

    impl Parser for Lit {
        type State = Template;
        type Value = ();

        fn parse(&self, state: Template) -> Result<(Template, ()), ParseError> {
            let (head, rest) = state.split_first().ok_or(ParseError::UnexpectedEnd {
                expected: self.0.to_string(),
            })?;
            if head == self.0 {
                Ok((rest, ()))
            } else {
                Err(ParseError::LiteralMismatch {
                    expected: self.0.to_string(),
                    found: head,
                })
            }
        }

        fn print(&self, _value: &()) -> Result<Template, PrintError> {
            Ok(Template::single(self.0))
        }

        fn template(&self, value: &()) -> Result<Template, PrintError> {
            self.print(value)
        }
    }

    /// Consumes one part and parses it as an integer.
    struct IntParam;

    impl Parser for IntParam {
        type State = Template;
        type Value = i32;

        fn parse(&self, state: Template) -> Result<(Template, i32), ParseError> {
            let (head, rest) = state.split_first().ok_or(ParseError::UnexpectedEnd {
                expected: "integer".to_string(),
            })?;
            match head.parse() {
                Ok(value) => Ok((rest, value)),
                Err(_) => Err(ParseError::Conversion { input: head }),
            }
        }

        fn print(&self, value: &i32) -> Result<Template, PrintError> {
            Ok(Template::single(value.to_string()))
        }

        fn template(&self, _value: &i32) -> Result<Template, PrintError> {
            Ok(Template::single("%d"))
        }
    }

    /// Records whether it was invoked; used to assert short-circuiting.
    struct Probe<'a>(&'a Cell<bool>);

    impl Parser for Probe<'_> {
        type State = Template;
        type Value = ();

        fn parse(&self, state: Template) -> Result<(Template, ()), ParseError> {
            self.0.set(true);
            Ok((state, ()))
        }

        fn print(&self, _value: &()) -> Result<Template, PrintError> {
            self.0.set(true);
            Ok(Template::new())
        }

        fn template(&self, value: &()) -> Result<Template, PrintError> {
            self.print(value)
        }
    }

    fn shareable<T: Send + Sync>(parser: T) -> T {
        parser
    }

    fn int_iso() -> PartialIso<i32, i32> {
        // Accepts only even numbers, halving them; doubles on the way back.
        PartialIso::new(
            |n: &i32| (n % 2 == 0).then_some(n / 2),
            |n: &i32| n.checked_mul(2),
        )
    }

    #[test]
    fn then_pairs_values_in_order() {
        let grammar = Lit("year").ignore_then(IntParam);
        let input = Template::from_parts(vec!["year".into(), "2019".into()]);

        let (rest, value) = grammar.parse(input).expect("parses");
        assert!(rest.is_empty());
        assert_eq!(value, 2019);
    }

    #[test]
    fn then_print_concatenates_fragments() {
        let grammar = IntParam.then(IntParam);

        let printed = grammar.print(&(1, 2)).expect("prints");
        assert_eq!(printed.parts(), ["1", "2"]);
    }

    #[test]
    fn sequencing_is_strict_left_to_right() {
        let invoked = Cell::new(false);
        let grammar = Lit("missing").ignore_then(Probe(&invoked));

        let result = grammar.parse(Template::single("other"));
        assert!(result.is_err());
        assert!(!invoked.get(), "right side must not run after a left failure");
    }

    #[test]
    fn then_ignore_consumes_but_drops_the_right_value() {
        let grammar = IntParam.then_ignore(Lit("!"));
        let input = Template::from_parts(vec!["7".into(), "!".into()]);

        let (rest, value) = grammar.parse(input).expect("parses");
        assert!(rest.is_empty());
        assert_eq!(value, 7);

        let printed = grammar.print(&7).expect("prints");
        assert_eq!(printed.parts(), ["7", "!"]);
    }

    #[test]
    fn or_retries_from_the_original_state() {
        let grammar = Lit("a").ignore_then(IntParam).or(Lit("b").ignore_then(IntParam));
        let input = Template::from_parts(vec!["b".into(), "3".into()]);

        let (rest, value) = grammar.parse(input).expect("second branch matches");
        assert!(rest.is_empty());
        assert_eq!(value, 3);
    }

    #[test]
    fn or_first_match_wins() {
        // Both branches parse the same input; the left result must win.
        let grammar = IntParam.map(int_iso()).or(IntParam);

        let (_, value) = grammar.parse(Template::single("8")).expect("parses");
        assert_eq!(value, 4, "left branch (halving iso) must win the tie");
    }

    #[test]
    fn or_print_falls_through_to_a_representable_branch() {
        // The left branch only prints even values.
        let grammar = IntParam.map(int_iso().invert()).or(IntParam);

        assert_eq!(grammar.print(&3).expect("right branch").parts(), ["3"]);
    }

    #[test]
    fn map_applies_the_iso_in_both_directions() {
        let grammar = IntParam.map(int_iso());

        let (_, value) = grammar.parse(Template::single("10")).expect("even parses");
        assert_eq!(value, 5);
        assert_eq!(
            grammar.parse(Template::single("9")),
            Err(ParseError::Mapping),
        );

        assert_eq!(grammar.print(&5).expect("prints").parts(), ["10"]);
    }

    #[test]
    fn end_rejects_trailing_input() {
        let strict = IntParam.then_ignore(end());

        let (rest, value) = strict.parse(Template::single("4")).expect("parses");
        assert!(rest.is_empty());
        assert_eq!(value, 4);

        let trailing = Template::from_parts(vec!["4".into(), "extra".into()]);
        assert_eq!(strict.parse(trailing), Err(ParseError::TrailingInput));
    }

    #[test]
    fn fail_never_matches_and_never_prints() {
        let never = fail::<Template, i32>();

        assert_eq!(never.parse(Template::single("1")), Err(ParseError::Unmatched));
        assert_eq!(never.print(&1), Err(PrintError::Unrepresentable));

        // `fail` is the identity for or-folds.
        let grammar = fail::<Template, i32>().or(IntParam);
        let (_, value) = grammar.parse(Template::single("12")).expect("parses");
        assert_eq!(value, 12);
    }

    #[test]
    fn round_trip_through_a_composite_grammar() {
        let grammar = Lit("hello")
            .ignore_then(IntParam)
            .then_ignore(Lit("year"))
            .then(IntParam);

        let printed = grammar.print(&(1, 2019)).expect("prints");
        assert_eq!(printed.parts(), ["hello", "1", "year", "2019"]);

        let (rest, value) = grammar.parse(printed).expect("parses its own output");
        assert!(rest.is_empty());
        assert_eq!(value, (1, 2019));
    }

    #[test]
    fn combinator_stacks_stay_send_and_sync() {
        // The adapters return concrete types, so a stack built from thread-safe
        // leaves can be shared across threads and erased with `boxed()`.
        let grammar = shareable(Lit("n").ignore_then(IntParam).or(fail()).then_ignore(end()));

        let input = Template::from_parts(vec!["n".into(), "6".into()]);
        let (rest, value) = grammar.parse(input).expect("parses");
        assert!(rest.is_empty());
        assert_eq!(value, 6);

        let erased = shareable(grammar.boxed());
        assert_eq!(erased.print(&6).expect("prints").parts(), ["n", "6"]);
    }

    #[test]
    fn boxed_parser_delegates_all_three_directions() {
        let grammar = Lit("n").ignore_then(IntParam).boxed();

        let input = Template::from_parts(vec!["n".into(), "6".into()]);
        let (_, value) = grammar.parse(input).expect("parses");
        assert_eq!(value, 6);

        assert_eq!(grammar.print(&6).expect("prints").parts(), ["n", "6"]);
        assert_eq!(grammar.template(&6).expect("templates").parts(), ["n", "%d"]);

        let alias = grammar.clone();
        assert_eq!(alias.print(&6).expect("prints").parts(), ["n", "6"]);
    }
}
