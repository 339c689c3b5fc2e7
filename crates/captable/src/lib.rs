//! Capability tables: protocol witnesses as plain values.
//!
//! Interface-based polymorphism ties behavior to a type: the type declares
//! conformance, and the language's dispatch machinery selects the single
//! implementation registered for it. This crate turns that relationship
//! inside out. Behavior is a **value** — a [`Witness<A, R>`] bundling a pure
//! operation `&A -> R` — passed alongside the payload it operates on. The
//! payload type declares nothing, and any number of witnesses can coexist
//! for the same type.
//!
//! # Execution Model
//!
//! ```text
//! Witness<A, R>  = one pure operation &A -> R, stored as data
//! Pullback       = pre-compose every operation with an adapter &B -> A
//! Consumer       = fn(value: &A, witness: &Witness<A, R>) -> R
//! ```
//!
//! Pullback is the only combinator. Adapting a witness to a related payload
//! type, narrowing its applicability, or redacting a field are all the same
//! move: derive a new table whose operations run behind an adapter.
//!
//! # Example: Two Styles, One Consumer
//!
//! ```
//! use captable::Witness;
//!
//! struct Person {
//!     name: String,
//!     id: u32,
//! }
//!
//! // Two witnesses for the same payload type. No conformance declaration,
//! // no orphan-rule workaround: they are just values with different names.
//! let short = Witness::new(|p: &Person| p.name.clone());
//! let pretty = Witness::new(|p: &Person| format!("{} (#{})", p.name, p.id));
//!
//! // A consumer takes the payload and the witness as independent parameters.
//! fn caption(p: &Person, describe: &Witness<Person, String>) -> String {
//!     format!("[{}]", describe.apply(p))
//! }
//!
//! let blob = Person { name: "Blob".into(), id: 42 };
//! assert_eq!(caption(&blob, &short), "[Blob]");
//! assert_eq!(caption(&blob, &pretty), "[Blob (#42)]");
//! ```
//!
//! # Example: Pullback
//!
//! ```
//! use captable::Witness;
//!
//! struct Person {
//!     name: String,
//!     id: u32,
//! }
//!
//! let pretty = Witness::new(|p: &Person| format!("{} (#{})", p.name, p.id));
//!
//! // Redaction is a pullback along Person -> Person that masks the id.
//! let redacted = pretty.pullback(|p: &Person| Person {
//!     name: p.name.clone(),
//!     id: 0,
//! });
//!
//! let blob = Person { name: "Blob".into(), id: 8_675_309 };
//! assert_eq!(redacted.apply(&blob), "Blob (#0)");
//! ```
//!
//! # Pullback Laws
//!
//! For a witness `w` over `A`, total adapters `f: &B -> A`, `g: &C -> B`,
//! and all inputs:
//!
//! | Law | Statement |
//! |---------------|------------------------------------------------------|
//! | Associativity | `w.pullback(f).pullback(g)` ≡ `w.pullback(f ∘ g)` |
//! | Identity | `w.pullback(identity)` ≡ `w` |
//!
//! [`Adapter`] makes the composed form expressible directly: `g.then(&f)`
//! builds `f ∘ g` as a value, and the property suite in
//! `tests/pullback_laws.rs` checks both laws over sampled inputs.
//!
//! # Partial Adapters
//!
//! An adapter that cannot produce an upstream value for every downstream
//! input (a malformed URL string, say) must not crash and must not silently
//! substitute a default. [`Witness::try_pullback`] and
//! [`Witness::pullback_opt`] derive witnesses that surface the failure as a
//! `Result` at call time; [`AdapterError`] is the one error kind intrinsic
//! to this crate.
//!
//! # Named Instances
//!
//! There is no runtime registry and no reflection. Witness instances for a
//! payload type are ordinary named constructors in a module, keyed by a
//! style tag in the function name:
//!
//! ```
//! struct Invoice {
//!     total_cents: i64,
//! }
//!
//! mod describing {
//!     use super::Invoice;
//!     use captable::Witness;
//!
//!     pub fn short() -> Witness<Invoice, String> {
//!         Witness::new(|i: &Invoice| format!("{}c", i.total_cents))
//!     }
//!
//!     pub fn pretty() -> Witness<Invoice, String> {
//!         Witness::new(|i: &Invoice| {
//!             format!("${}.{:02}", i.total_cents / 100, i.total_cents % 100)
//!         })
//!     }
//! }
//!
//! fn main() {
//!     let invoice = Invoice { total_cents: 1099 };
//!     assert_eq!(describing::short().apply(&invoice), "1099c");
//!     assert_eq!(describing::pretty().apply(&invoice), "$10.99");
//! }
//! ```
//!
//! # Design Principles
//!
//! - **Behavior as data**: operations travel next to payloads, never bolted
//!   onto their types
//! - **One combinator**: every adaptation is a pullback
//! - **Explicit failure**: partial adapters return `Result`, never panic
//! - **Zero dependencies**: pure abstractions over `core` + `alloc`

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Witness values and total pullback
pub mod witness;

// First-class adapter values (composition, identity)
pub mod adapter;

// Partial adapters and the intrinsic error kind
pub mod partial;

// Multi-operation tables: the Pullback trait and impl_pullback!
pub mod table;

// Re-export core types at crate root
pub use adapter::Adapter;
pub use partial::AdapterError;
pub use table::Pullback;
pub use witness::Witness;
