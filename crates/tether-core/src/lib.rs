//! # Tethered state
//!
//! A widget that edits a value the owner ultimately owns — a text field bound
//! to a form, a volume slider bound to app settings — needs local state that
//! can do three things: accept local edits, report them upward, and follow
//! the owner's value when *that* side changes. `SyncedState<T>` is that unit,
//! with the two directions kept strictly apart.
//!
//! ## Local edits: the commit path
//!
//! `set` replaces the value; `update` applies a recipe to a draft copy and
//! commits the result. Both notify commit observers, every time:
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tether_core::{SyncOptions, SyncedState};
//!
//! let reported = Rc::new(Cell::new(0));
//! let count = SyncedState::with_options(
//!     0,
//!     SyncOptions::new().on_commit({
//!         let reported = reported.clone();
//!         move |v: &i32| reported.set(*v)
//!     }),
//! );
//!
//! count.update(|c| *c += 1);
//! assert_eq!(count.get(), 1);
//! assert_eq!(reported.get(), 1); // the owner heard about it
//! ```
//!
//! ## Following the owner: the sync path
//!
//! When mirroring is on, feed the owner's value through `source_changed`
//! whenever it may have moved. Changed values land locally — optionally
//! reshaped, optionally gated — and commit observers hear *nothing*, because
//! nothing was locally decided:
//!
//! ```rust
//! use tether_core::{SyncOptions, SyncedState};
//!
//! let price = SyncedState::with_options(
//!     10.0,
//!     SyncOptions::new()
//!         .mirror_with(|p: &mut f64| *p *= 1.2) // tax on the way in
//!         .sync_if(|p: &f64| *p >= 0.0),
//! );
//! assert_eq!(price.get(), 12.0); // the initial value is reshaped too
//!
//! price.source_changed(&20.0);
//! assert_eq!(price.get(), 24.0);
//!
//! price.source_changed(&-1.0); // rejected by the condition
//! assert_eq!(price.get(), 24.0);
//! ```
//!
//! ## Recipes
//!
//! `update` and the sync transforms use the same primitive: [`revise`] clones
//! the current value, lets a closure edit the clone, and returns it. The old
//! value is never touched, so anything still holding it keeps a consistent
//! snapshot, and a panicking recipe leaves the state exactly as it was. See
//! the [`recipe`] module for the sharing behavior of `Rc`-backed values.
//!
//! ## Driving it from a host loop
//!
//! There is no scheduler in this crate. The owner calls `source_changed`
//! whenever its side may have moved (the call is cheap and edge-detected),
//! or `resync` if it already knows the value changed. Everything runs
//! synchronously on the calling thread; `SyncedState` is single-threaded by
//! construction, like the rest of the `Rc`-based state family it belongs to.

pub mod cell;
pub mod options;
pub mod prelude;
pub mod recipe;
pub mod state;

pub use cell::*;
pub use options::*;
pub use recipe::*;
pub use state::*;
