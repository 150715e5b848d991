use std::{fmt, sync::Arc};

/// A two-way, possibly-failing conversion between two types.
///
/// A `PartialIso<A, B>` pairs a forward conversion (`apply: &A -> Option<B>`)
/// with a backward one (`unapply: &B -> Option<A>`). It is the leaf every
/// invertible grammar is built from: the parse direction runs `apply`, the
/// print direction runs `unapply`.
///
/// The two directions are expected to be mutual inverses on their success
/// domains: `unapply(apply(a)) == Some(a)` whenever `apply(a)` succeeds, and
/// symmetrically. This is a best-effort law the type cannot enforce; an iso
/// that violates it desynchronizes parsing and printing.
///
/// Both closures are stored behind `Arc`, so an iso is cheap to clone and
/// safe to share across threads.
///
/// # Examples
///
/// ```
/// use weft_core::PartialIso;
///
/// let int: PartialIso<String, i32> = PartialIso::new(
///     |text: &String| text.parse().ok(),
///     |value: &i32| Some(value.to_string()),
/// );
///
/// assert_eq!(int.apply(&"42".to_string()), Some(42));
/// assert_eq!(int.apply(&"forty-two".to_string()), None);
/// assert_eq!(int.unapply(&42), Some("42".to_string()));
/// ```
pub struct PartialIso<A, B> {
    apply: Arc<dyn Fn(&A) -> Option<B> + Send + Sync>,
    unapply: Arc<dyn Fn(&B) -> Option<A> + Send + Sync>,
}

impl<A, B> PartialIso<A, B> {
    /// Creates a partial iso from a forward and a backward conversion.
    pub fn new<F, G>(apply: F, unapply: G) -> Self
    where
        F: Fn(&A) -> Option<B> + Send + Sync + 'static,
        G: Fn(&B) -> Option<A> + Send + Sync + 'static,
    {
        Self {
            apply: Arc::new(apply),
            unapply: Arc::new(unapply),
        }
    }

    /// Runs the forward conversion.
    pub fn apply(&self, a: &A) -> Option<B> {
        (self.apply)(a)
    }

    /// Runs the backward conversion.
    pub fn unapply(&self, b: &B) -> Option<A> {
        (self.unapply)(b)
    }

    /// Swaps the two directions, turning an `A -> B` iso into a `B -> A` one.
    #[must_use]
    pub fn invert(self) -> PartialIso<B, A> {
        PartialIso {
            apply: self.unapply,
            unapply: self.apply,
        }
    }

    /// Chains this iso with another, composing both directions.
    ///
    /// The forward direction applies `self` then `next`; the backward
    /// direction unapplies `next` then `self`. Either side failing fails the
    /// whole conversion.
    #[must_use]
    pub fn compose<C>(self, next: PartialIso<B, C>) -> PartialIso<A, C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
    {
        let forward_first = Arc::clone(&self.apply);
        let forward_second = Arc::clone(&next.apply);
        let backward_first = Arc::clone(&next.unapply);
        let backward_second = Arc::clone(&self.unapply);

        PartialIso {
            apply: Arc::new(move |a| forward_first(a).and_then(|b| forward_second(&b))),
            unapply: Arc::new(move |c| backward_first(c).and_then(|b| backward_second(&b))),
        }
    }
}

impl<A: Clone + Send + Sync + 'static> PartialIso<A, A> {
    /// The identity iso: both directions succeed with a clone of the input.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(|a: &A| Some(a.clone()), |a: &A| Some(a.clone()))
    }
}

impl<A, B> Clone for PartialIso<A, B> {
    fn clone(&self) -> Self {
        Self {
            apply: Arc::clone(&self.apply),
            unapply: Arc::clone(&self.unapply),
        }
    }
}

impl<A, B> fmt::Debug for PartialIso<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialIso").finish_non_exhaustive()
    }
}
