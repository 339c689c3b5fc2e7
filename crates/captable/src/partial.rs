//! Partial adapters: pullbacks whose mapping can fail.
//!
//! A total adapter promises an `A` for every `B`. When the promise cannot
//! be kept — parsing a raw string into a structured endpoint, narrowing a
//! wide enum — the gap must reach the caller as an explicit outcome at call
//! time. Substituting a default would silently change results; aborting
//! would make the derived table unusable in composition. So a fallible
//! pullback derives a witness whose result type is `Result`: the adapter's
//! error rides through unchanged, and the wrapped operation only runs when
//! adaptation succeeds.
//!
//! [`AdapterError`] is the one error kind intrinsic to this crate. Errors
//! from composed external capabilities (fetch failures, decode failures,
//! storage failures) are the host's to define; witnesses propagate them
//! untouched.

use alloc::format;
use alloc::string::String;

use core::fmt;

use crate::witness::Witness;

/// Error when a partial adapter cannot produce an upstream value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// No upstream value exists for the given downstream input.
    Unrepresentable {
        /// Debug rendering of the rejected input.
        input: String,
    },
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrepresentable { input } => {
                write!(f, "no upstream value exists for input {input}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AdapterError {}

impl<A: 'static, R: 'static> Witness<A, R> {
    /// Derive a witness along a fallible adapter `&B -> Result<A, E>`.
    ///
    /// The derived operation returns `Err` for exactly the inputs the
    /// adapter rejects, carrying the adapter's own error type; the wrapped
    /// operation never observes a rejected input. The error is propagated
    /// unchanged — nothing is caught, masked, or defaulted.
    ///
    /// # Examples
    ///
    /// ```
    /// use captable::Witness;
    ///
    /// let describe = Witness::new(|n: &u8| format!("{n} items"));
    /// let from_text = describe.try_pullback(|s: &String| s.parse::<u8>());
    ///
    /// assert_eq!(from_text.apply(&"3".to_string()), Ok("3 items".to_string()));
    /// assert!(from_text.apply(&"many".to_string()).is_err());
    /// ```
    #[must_use]
    pub fn try_pullback<B, E, F>(&self, adapt: F) -> Witness<B, Result<R, E>>
    where
        F: Fn(&B) -> Result<A, E> + Send + Sync + 'static,
    {
        let base = self.clone();
        Witness::new(move |b: &B| adapt(b).map(|a| base.apply(&a)))
    }

    /// Derive a witness along an `Option`-returning adapter.
    ///
    /// `None` becomes [`AdapterError::Unrepresentable`] carrying a debug
    /// rendering of the rejected input.
    ///
    /// # Examples
    ///
    /// ```
    /// use captable::{AdapterError, Witness};
    ///
    /// let first = Witness::new(|v: &Vec<u8>| v[0]);
    /// let nonempty = first.pullback_opt(|v: &Vec<u8>| {
    ///     if v.is_empty() { None } else { Some(v.clone()) }
    /// });
    ///
    /// assert_eq!(nonempty.apply(&vec![7, 8]), Ok(7));
    /// assert_eq!(
    ///     nonempty.apply(&vec![]),
    ///     Err(AdapterError::Unrepresentable { input: "[]".into() }),
    /// );
    /// ```
    #[must_use]
    pub fn pullback_opt<B, F>(&self, adapt: F) -> Witness<B, Result<R, AdapterError>>
    where
        B: fmt::Debug,
        F: Fn(&B) -> Option<A> + Send + Sync + 'static,
    {
        self.try_pullback(move |b: &B| {
            adapt(b).ok_or_else(|| AdapterError::Unrepresentable {
                input: format!("{b:?}"),
            })
        })
    }
}
