/// The state a [`Parser`](crate::Parser) consumes and produces.
///
/// A parse state is a monoid with a notion of emptiness:
///
/// - [`empty()`](ParseState::empty) is the identity element,
/// - [`combine()`](ParseState::combine) is an associative, ordered merge,
/// - [`is_empty()`](ParseState::is_empty) reports whether anything is left
///   to consume.
///
/// Sequencing combinators lean on associativity so that grammars compose the
/// same way regardless of how they are grouped, and alternation relies on
/// `Clone` to retry a second branch from the untouched starting state.
///
/// # Laws
///
/// For all states `x`, `y`, and `z`:
///
/// - `x.combine(y).combine(z) == x.combine(y.combine(z))`
/// - `Self::empty().combine(x) == x == x.combine(Self::empty())`
/// - `Self::empty().is_empty()` is `true`
pub trait ParseState: Clone {
    /// Returns the identity state, containing nothing to consume.
    fn empty() -> Self;

    /// Returns `true` if nothing remains to be consumed.
    fn is_empty(&self) -> bool;

    /// Appends `other` after `self`, preserving order.
    #[must_use]
    fn combine(self, other: Self) -> Self;
}
