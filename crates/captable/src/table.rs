//! Multi-operation capability tables.
//!
//! A table with several operations is an ordinary struct whose fields are
//! each a [`Witness<A, R>`] over the same payload type. Pulling such a
//! table back means running one shared adapter in front of *every* field —
//! the same per-field transform at any arity, with no field-count special
//! cases. The [`Pullback`] trait names that transform, and
//! [`impl_pullback!`](crate::impl_pullback) derives it mechanically from a
//! field list.

use crate::adapter::Adapter;
use crate::witness::Witness;

/// Types that can be pulled back along an [`Adapter`].
///
/// `Pulled<B>` is the same table shape re-indexed by the new payload type.
/// For a single [`Witness`] that is just `Witness<B, R>`; for a
/// multi-operation struct it is the struct with every field pulled back
/// through the shared adapter.
///
/// # Examples
///
/// ```
/// use captable::{impl_pullback, Adapter, Pullback, Witness};
///
/// struct Discounting<A> {
///     percent_off: Witness<A, u8>,
///     total_cents: Witness<A, i64>,
/// }
///
/// impl_pullback!(Discounting { percent_off, total_cents });
///
/// struct Purchase {
///     subtotal_cents: i64,
/// }
///
/// struct Cart {
///     items: Vec<i64>,
/// }
///
/// let seasonal = Discounting {
///     percent_off: Witness::new(|_: &Purchase| 10),
///     total_cents: Witness::new(|p: &Purchase| p.subtotal_cents * 90 / 100),
/// };
///
/// // One adapter, applied uniformly in front of both fields.
/// let for_cart = seasonal.pullback_with(&Adapter::new(|c: &Cart| Purchase {
///     subtotal_cents: c.items.iter().sum(),
/// }));
///
/// let cart = Cart { items: vec![400, 600] };
/// assert_eq!(for_cart.percent_off.apply(&cart), 10);
/// assert_eq!(for_cart.total_cents.apply(&cart), 900);
/// ```
pub trait Pullback<A> {
    /// The table shape re-indexed by payload type `B`.
    type Pulled<B: 'static>;

    /// Derive a table for payload type `B` by pre-composing every
    /// operation with the shared adapter.
    #[must_use]
    fn pullback_with<B: 'static>(&self, adapt: &Adapter<B, A>) -> Self::Pulled<B>;
}

impl<A: 'static, R: 'static> Pullback<A> for Witness<A, R> {
    type Pulled<B: 'static> = Witness<B, R>;

    fn pullback_with<B: 'static>(&self, adapt: &Adapter<B, A>) -> Witness<B, R> {
        let base = self.clone();
        let adapt = adapt.clone();
        Witness::new(move |b: &B| base.apply(&adapt.adapt(b)))
    }
}

/// Implement [`Pullback`] for a struct whose fields are all
/// `Witness<A, _>` over the same payload parameter `A`.
///
/// The expansion applies the shared adapter independently in front of each
/// listed field; arity is whatever the field list says.
///
/// # Examples
///
/// ```
/// use captable::{impl_pullback, Adapter, Pullback, Witness};
///
/// struct Describing<A> {
///     short: Witness<A, String>,
///     pretty: Witness<A, String>,
/// }
///
/// impl_pullback!(Describing { short, pretty });
///
/// let numbers = Describing {
///     short: Witness::new(|n: &u32| format!("{n}")),
///     pretty: Witness::new(|n: &u32| format!("the number {n}")),
/// };
///
/// let by_length = numbers.pullback_with(&Adapter::new(|s: &String| s.len() as u32));
/// assert_eq!(by_length.short.apply(&"four".to_string()), "4");
/// assert_eq!(by_length.pretty.apply(&"four".to_string()), "the number 4");
/// ```
#[macro_export]
macro_rules! impl_pullback {
    ($table:ident { $($field:ident),+ $(,)? }) => {
        impl<A: 'static> $crate::Pullback<A> for $table<A> {
            type Pulled<B: 'static> = $table<B>;

            fn pullback_with<B: 'static>(
                &self,
                adapt: &$crate::Adapter<B, A>,
            ) -> $table<B> {
                $table {
                    $($field: $crate::Pullback::pullback_with(&self.$field, adapt),)+
                }
            }
        }
    };
}
