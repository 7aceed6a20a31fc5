use std::fmt;
use std::rc::Rc;

use crate::recipe::SharedRecipe;

pub type SharedCondition<T> = Rc<dyn Fn(&T) -> bool>;
pub type SharedObserver<T> = Rc<dyn Fn(&T)>;

/// What a sync cycle does with an accepted source value.
pub enum SyncMode<T> {
    /// Source changes are ignored.
    Off,
    /// Accepted source values replace the local value as-is.
    Mirror,
    /// Accepted source values are copied through the recipe first.
    Transform(SharedRecipe<T>),
}

impl<T> Clone for SyncMode<T> {
    fn clone(&self) -> Self {
        match self {
            SyncMode::Off => SyncMode::Off,
            SyncMode::Mirror => SyncMode::Mirror,
            SyncMode::Transform(recipe) => SyncMode::Transform(recipe.clone()),
        }
    }
}

impl<T> fmt::Debug for SyncMode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncMode::Off => f.write_str("Off"),
            SyncMode::Mirror => f.write_str("Mirror"),
            SyncMode::Transform(_) => f.write_str("Transform(..)"),
        }
    }
}

impl<T> SyncMode<T> {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, SyncMode::Off)
    }

    pub(crate) fn recipe(&self) -> Option<&SharedRecipe<T>> {
        match self {
            SyncMode::Transform(recipe) => Some(recipe),
            _ => None,
        }
    }

    /// Same variant, and for `Transform` the same recipe allocation.
    pub fn same_as(&self, other: &SyncMode<T>) -> bool {
        match (self, other) {
            (SyncMode::Off, SyncMode::Off) => true,
            (SyncMode::Mirror, SyncMode::Mirror) => true,
            (SyncMode::Transform(a), SyncMode::Transform(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Construction-time configuration for [`SyncedState`](crate::SyncedState).
///
/// ```rust
/// use tether_core::{SyncOptions, SyncedState};
///
/// let volume = SyncedState::with_options(
///     30u8,
///     SyncOptions::new()
///         .mirror_with(|v: &mut u8| *v = (*v).min(100))
///         .sync_if(|v: &u8| *v > 0),
/// );
///
/// volume.source_changed(&140);
/// assert_eq!(volume.get(), 100); // clamped on the way in
///
/// volume.source_changed(&0);
/// assert_eq!(volume.get(), 100); // rejected by the condition
/// ```
pub struct SyncOptions<T> {
    pub(crate) sync: SyncMode<T>,
    pub(crate) condition: Option<SharedCondition<T>>,
    pub(crate) transform: Option<SharedRecipe<T>>,
    pub(crate) on_commit: Option<SharedObserver<T>>,
}

impl<T> Default for SyncOptions<T> {
    fn default() -> Self {
        Self {
            sync: SyncMode::Off,
            condition: None,
            transform: None,
            on_commit: None,
        }
    }
}

impl<T> Clone for SyncOptions<T> {
    fn clone(&self) -> Self {
        Self {
            sync: self.sync.clone(),
            condition: self.condition.clone(),
            transform: self.transform.clone(),
            on_commit: self.on_commit.clone(),
        }
    }
}

impl<T> SyncOptions<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirror accepted source values into the local value as-is.
    pub fn mirror(mut self) -> Self {
        self.sync = SyncMode::Mirror;
        self
    }

    /// Mirror accepted source values through `recipe` — enable flag and
    /// transform in one. Also pre-shapes the initial value at construction.
    pub fn mirror_with(mut self, recipe: impl Fn(&mut T) + 'static) -> Self {
        self.sync = SyncMode::Transform(Rc::new(recipe));
        self
    }

    pub fn sync_mode(mut self, mode: SyncMode<T>) -> Self {
        self.sync = mode;
        self
    }

    /// Gate sync cycles: source values `pred` rejects never land locally.
    pub fn sync_if(mut self, pred: impl Fn(&T) -> bool + 'static) -> Self {
        self.condition = Some(Rc::new(pred));
        self
    }

    /// Copy incoming source values through `recipe` before they land, and
    /// pre-shape the initial value the same way. When a [`mirror_with`]
    /// recipe is also set, that one wins.
    ///
    /// [`mirror_with`]: SyncOptions::mirror_with
    pub fn transform_incoming(mut self, recipe: impl Fn(&mut T) + 'static) -> Self {
        self.transform = Some(Rc::new(recipe));
        self
    }

    /// Forward every committed value to `f`. Sync writes never reach it.
    pub fn on_commit(mut self, f: impl Fn(&T) + 'static) -> Self {
        self.on_commit = Some(Rc::new(f));
        self
    }

    /// The transform a cycle would apply right now, honoring precedence.
    pub(crate) fn effective_transform(&self) -> Option<SharedRecipe<T>> {
        self.sync.recipe().cloned().or_else(|| self.transform.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_identity() {
        let a: SyncMode<i32> = SyncMode::Mirror;
        assert!(a.same_as(&SyncMode::Mirror));
        assert!(!a.same_as(&SyncMode::Off));

        let recipe: SharedRecipe<i32> = Rc::new(|v| *v += 1);
        let t1 = SyncMode::Transform(recipe.clone());
        let t2 = SyncMode::Transform(recipe);
        let t3: SyncMode<i32> = SyncMode::Transform(Rc::new(|v| *v += 1));

        assert!(t1.same_as(&t2));
        assert!(!t1.same_as(&t3)); // different allocation, different identity
    }

    #[test]
    fn test_effective_transform_precedence() {
        let opts: SyncOptions<i32> = SyncOptions::new()
            .transform_incoming(|v| *v += 1)
            .mirror_with(|v| *v *= 2);

        let t = opts.effective_transform().unwrap();
        let mut v = 10;
        t(&mut v);
        assert_eq!(v, 20); // the mirror_with recipe, not the incoming one

        let opts: SyncOptions<i32> = SyncOptions::new().mirror().transform_incoming(|v| *v += 1);
        let t = opts.effective_transform().unwrap();
        let mut v = 10;
        t(&mut v);
        assert_eq!(v, 11);
    }

    #[test]
    fn test_defaults_are_off() {
        let opts: SyncOptions<String> = SyncOptions::default();
        assert!(!opts.sync.is_enabled());
        assert!(opts.condition.is_none());
        assert!(opts.on_commit.is_none());
        assert!(opts.effective_transform().is_none());
    }
}
