//! # Recipes
//!
//! A recipe is a closure that edits a *draft* of a value. Applying one never
//! touches the value it started from: `revise` clones the current value,
//! hands the clone to the recipe, and returns the edited clone.
//!
//! ```rust
//! use tether_core::revise;
//!
//! let before = vec![1, 2, 3];
//! let after = revise(&before, |draft| draft.push(4));
//!
//! assert_eq!(before, [1, 2, 3]);
//! assert_eq!(after, [1, 2, 3, 4]);
//! ```
//!
//! Values built on shared substructure (`Rc`, `Arc`, persistent collections)
//! keep sharing whatever the recipe does not touch — the clone is shallow for
//! those parts, and editing one side never leaks into the other:
//!
//! ```rust
//! use std::rc::Rc;
//! use tether_core::revise;
//!
//! #[derive(Clone)]
//! struct Doc {
//!     title: String,
//!     body: Rc<String>,
//! }
//!
//! let a = Doc { title: "v1".into(), body: Rc::new("long text".into()) };
//! let b = revise(&a, |d| d.title = "v2".into());
//!
//! assert!(Rc::ptr_eq(&a.body, &b.body)); // untouched part is shared
//! ```
//!
//! A recipe that panics unwinds before anything is stored, so the caller's
//! value is exactly what it was.

use std::rc::Rc;

/// Shared, reapplicable recipe, the stored form used by
/// [`SyncOptions`](crate::SyncOptions) for transforms that run on every
/// accepted sync cycle.
pub type SharedRecipe<T> = Rc<dyn Fn(&mut T)>;

/// Apply `recipe` to a draft copy of `value` and return the edited copy.
pub fn revise<T: Clone>(value: &T, recipe: impl FnOnce(&mut T)) -> T {
    let mut draft = value.clone();
    recipe(&mut draft);
    draft
}

/// Fallible [`revise`]: on `Err` the draft is discarded and the error comes
/// back to the caller.
pub fn try_revise<T: Clone, E>(
    value: &T,
    recipe: impl FnOnce(&mut T) -> Result<(), E>,
) -> Result<T, E> {
    let mut draft = value.clone();
    recipe(&mut draft)?;
    Ok(draft)
}
