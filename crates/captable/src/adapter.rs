//! First-class adapter values for pullbacks.
//!
//! A pullback pre-composes a witness's operations with a mapping
//! `&B -> A`. For a single-operation [`Witness`](crate::Witness) a plain
//! closure is enough, but a multi-operation table needs to run the *same*
//! mapping in front of every field. [`Adapter`] packages the mapping behind
//! a shared pointer so it clones cheaply into each derived operation, and
//! gives composition a concrete home: [`Adapter::then`] chains two stages
//! into one, which is exactly the composed-adapter side of the
//! associativity law.

use alloc::sync::Arc;
use core::any::type_name;
use core::fmt;

/// A total, pure mapping from `&B` to an owned `A`.
///
/// Adapters must be total over every `B` they are applied to. If some `B`
/// values have no corresponding `A`, a total adapter is the wrong tool:
/// use [`Witness::try_pullback`](crate::Witness::try_pullback) so the
/// gap surfaces as an explicit failure instead of a crash or a default.
///
/// # Examples
///
/// ```
/// use captable::Adapter;
///
/// struct Celsius(f64);
/// struct Fahrenheit(f64);
///
/// let to_celsius = Adapter::new(|f: &Fahrenheit| Celsius((f.0 - 32.0) * 5.0 / 9.0));
/// assert_eq!(to_celsius.adapt(&Fahrenheit(212.0)).0, 100.0);
/// ```
pub struct Adapter<B, A> {
    map: Arc<dyn Fn(&B) -> A + Send + Sync>,
}

impl<B, A> Adapter<B, A> {
    /// Wrap a mapping function into an adapter.
    #[must_use]
    pub fn new<F>(map: F) -> Self
    where
        F: Fn(&B) -> A + Send + Sync + 'static,
    {
        Self { map: Arc::new(map) }
    }

    /// Apply the mapping to a borrowed input.
    #[inline]
    pub fn adapt(&self, input: &B) -> A {
        (*self.map)(input)
    }
}

impl<B: 'static, A: 'static> Adapter<B, A> {
    /// Chain a second stage after this one: data flows `B -> A -> Z`.
    ///
    /// Chaining is how the associativity law reads as code: for a witness
    /// `w` over `A` and adapters `f: Adapter<B, A>`, `g: Adapter<C, B>`,
    ///
    /// ```text
    /// w.pullback_with(&f).pullback_with(&g)  ≡  w.pullback_with(&g.then(&f))
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use captable::Adapter;
    ///
    /// let digits = Adapter::new(|n: &u32| n.to_string());
    /// let length = Adapter::new(|s: &String| s.len());
    /// let digit_count = digits.then(&length);
    ///
    /// assert_eq!(digit_count.adapt(&1234), 4);
    /// ```
    #[must_use]
    pub fn then<Z: 'static>(&self, next: &Adapter<A, Z>) -> Adapter<B, Z> {
        let first = self.clone();
        let next = next.clone();
        Adapter::new(move |b: &B| next.adapt(&first.adapt(b)))
    }
}

impl<A: Clone + 'static> Adapter<A, A> {
    /// The identity adapter: clones the input unchanged.
    ///
    /// Pulling a witness back along the identity adapter yields a table
    /// that behaves identically to the original.
    ///
    /// # Examples
    ///
    /// ```
    /// use captable::Adapter;
    ///
    /// let id = Adapter::<u32, u32>::identity();
    /// assert_eq!(id.adapt(&7), 7);
    /// ```
    #[must_use]
    pub fn identity() -> Self {
        Adapter::new(|a: &A| a.clone())
    }
}

impl<B, A> Clone for Adapter<B, A> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            map: Arc::clone(&self.map),
        }
    }
}

impl<B, A> fmt::Debug for Adapter<B, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Adapter<{}, {}>", type_name::<B>(), type_name::<A>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};

    #[test]
    fn test_adapt() {
        let halve = Adapter::new(|x: &i64| x / 2);
        assert_eq!(halve.adapt(&10), 5);
        assert_eq!(halve.adapt(&-7), -3);
    }

    #[test]
    fn test_then_runs_stages_in_order() {
        let stringify = Adapter::new(|n: &u32| n.to_string());
        let first_char = Adapter::new(|s: &String| s.chars().next());
        let chained = stringify.then(&first_char);
        assert_eq!(chained.adapt(&901), Some('9'));
    }

    #[test]
    fn test_then_is_associative() {
        let a = Adapter::new(|x: &u32| x + 1);
        let b = Adapter::new(|x: &u32| x * 3);
        let c = Adapter::new(|x: &u32| x - 2);

        let left = a.then(&b).then(&c);
        let right = a.then(&b.then(&c));
        for i in [2u32, 10, 100, 1000] {
            assert_eq!(left.adapt(&i), right.adapt(&i));
        }
    }

    #[test]
    fn test_identity() {
        let id = Adapter::<String, String>::identity();
        assert_eq!(id.adapt(&"unchanged".to_string()), "unchanged");
    }

    #[test]
    fn test_clone_shares_mapping() {
        let upper = Adapter::new(|s: &String| s.to_uppercase());
        let c = upper.clone();
        assert_eq!(upper.adapt(&"ab".to_string()), c.adapt(&"ab".to_string()));
    }
}
