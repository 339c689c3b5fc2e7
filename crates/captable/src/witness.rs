//! Witness values: one operation over a payload type, stored as data.
//!
//! A [`Witness<A, R>`] wraps a single pure function `&A -> R` behind a
//! shared pointer. Construction wraps the supplied function verbatim and
//! cannot fail; cloning shares the operation rather than copying it.
//! Witnesses are write-once values: once built they are never mutated, and
//! they carry no identity beyond their behavior, so they are never compared
//! for equality.
//!
//! Operations must be `Send + Sync` so a table can be handed to any number
//! of concurrent callers without coordination. Nothing here blocks, spawns,
//! or holds mutable state: a witness reads its input argument and whatever
//! immutable configuration its closure captured, and returns.

use alloc::sync::Arc;
use core::any::type_name;
use core::fmt;

/// Shared, thread-safe operation over `A`.
pub(crate) type Op<A, R> = Arc<dyn Fn(&A) -> R + Send + Sync>;

/// A single-operation capability table over payload type `A`.
///
/// The payload is borrowed for the duration of one call; the witness never
/// takes ownership of it.
///
/// # Examples
///
/// ```
/// use captable::Witness;
///
/// let area = Witness::new(|r: &(f64, f64)| r.0 * r.1);
/// assert_eq!(area.apply(&(3.0, 4.0)), 12.0);
///
/// // Cloning shares the operation.
/// let same = area.clone();
/// assert_eq!(same.apply(&(2.0, 2.0)), 4.0);
/// ```
pub struct Witness<A, R> {
    op: Op<A, R>,
}

impl<A, R> Witness<A, R> {
    /// Wrap an operation into a witness.
    ///
    /// The function is stored verbatim; there is no validation and no
    /// failure mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use captable::Witness;
    ///
    /// let double = Witness::new(|x: &i32| x * 2);
    /// assert_eq!(double.apply(&21), 42);
    /// ```
    #[must_use]
    pub fn new<F>(op: F) -> Self
    where
        F: Fn(&A) -> R + Send + Sync + 'static,
    {
        Self { op: Arc::new(op) }
    }

    /// A witness that ignores its input and returns a fixed result.
    ///
    /// # Examples
    ///
    /// ```
    /// use captable::Witness;
    ///
    /// let nothing = Witness::constant("n/a");
    /// assert_eq!(nothing.apply(&123), "n/a");
    /// assert_eq!(nothing.apply(&456), "n/a");
    /// ```
    #[must_use]
    pub fn constant(result: R) -> Self
    where
        R: Clone + Send + Sync + 'static,
    {
        Self::new(move |_| result.clone())
    }

    /// Run the operation against a borrowed payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use captable::Witness;
    ///
    /// let len = Witness::new(|s: &String| s.len());
    /// assert_eq!(len.apply(&"blob".to_string()), 4);
    /// ```
    #[inline]
    pub fn apply(&self, value: &A) -> R {
        (*self.op)(value)
    }
}

impl<A: 'static, R: 'static> Witness<A, R> {
    /// Derive a witness for payload type `B` by pre-composing the operation
    /// with a total adapter `&B -> A`.
    ///
    /// The derived table is independently owned; the original is untouched.
    /// If the adapter cannot be total over `B`, use
    /// [`try_pullback`](Self::try_pullback) or
    /// [`pullback_opt`](Self::pullback_opt) instead — a pullback must never
    /// paper over a partial mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use captable::Witness;
    ///
    /// struct Meters(f64);
    /// struct Feet(f64);
    ///
    /// let describe = Witness::new(|m: &Meters| format!("{:.1}m", m.0));
    /// let imperial = describe.pullback(|ft: &Feet| Meters(ft.0 * 0.3048));
    ///
    /// assert_eq!(imperial.apply(&Feet(10.0)), "3.0m");
    /// ```
    #[must_use]
    pub fn pullback<B, F>(&self, adapt: F) -> Witness<B, R>
    where
        F: Fn(&B) -> A + Send + Sync + 'static,
    {
        let op = Arc::clone(&self.op);
        Witness::new(move |b: &B| (*op)(&adapt(b)))
    }
}

impl<A, R> Clone for Witness<A, R> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            op: Arc::clone(&self.op),
        }
    }
}

impl<A, R> fmt::Debug for Witness<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Witness<{}, {}>",
            type_name::<A>(),
            type_name::<R>()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::{String, ToString};

    #[test]
    fn test_new_wraps_verbatim() {
        let negate = Witness::new(|x: &i32| -x);
        assert_eq!(negate.apply(&5), -5);
        assert_eq!(negate.apply(&-5), 5);
    }

    #[test]
    fn test_constant_ignores_input() {
        let w: Witness<i32, &str> = Witness::constant("fixed");
        for i in [i32::MIN, -1, 0, 1, i32::MAX] {
            assert_eq!(w.apply(&i), "fixed");
        }
    }

    #[test]
    fn test_apply_borrows_payload() {
        let first = Witness::new(|s: &String| s.chars().next());
        let owned = "blob".to_string();
        assert_eq!(first.apply(&owned), Some('b'));
        // Still usable after the call.
        assert_eq!(owned.len(), 4);
    }

    #[test]
    fn test_pullback_precomposes() {
        let describe = Witness::new(|x: &u32| format!("value {x}"));
        let from_str = describe.pullback(|s: &String| s.len() as u32);
        assert_eq!(from_str.apply(&"four".to_string()), "value 4");
    }

    #[test]
    fn test_pullback_leaves_original_intact() {
        let describe = Witness::new(|x: &u32| x + 1);
        let derived = describe.pullback(|x: &u32| x * 10);
        assert_eq!(describe.apply(&5), 6);
        assert_eq!(derived.apply(&5), 51);
    }

    #[test]
    fn test_clone_shares_operation() {
        let w = Witness::new(|x: &u8| x.wrapping_add(1));
        let c = w.clone();
        for i in 0..=255u8 {
            assert_eq!(w.apply(&i), c.apply(&i));
        }
    }

    #[test]
    fn test_captured_config_is_immutable() {
        let suffix = "!".to_string();
        let shout = Witness::new(move |s: &String| {
            let mut out = s.clone();
            out.push_str(&suffix);
            out
        });
        assert_eq!(shout.apply(&"hi".to_string()), "hi!");
        assert_eq!(shout.apply(&"hi".to_string()), "hi!");
    }

    #[test]
    fn test_debug_names_types() {
        let w = Witness::new(|x: &u8| *x as u16);
        let rendered = format!("{w:?}");
        assert!(rendered.contains("u8"));
        assert!(rendered.contains("u16"));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Witness<String, usize>>();
    }
}
