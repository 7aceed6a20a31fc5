use std::cell::RefCell;
use std::rc::Rc;

use slotmap::SlotMap;
use smallvec::SmallVec;

use crate::cell::ValueCell;
use crate::options::{SharedCondition, SharedObserver, SyncMode, SyncOptions};
use crate::recipe::{SharedRecipe, revise, try_revise};

slotmap::new_key_type! {
    /// Handle to a registered commit observer.
    pub struct CommitKey;
}

/// Local state tethered to an external source of truth.
///
/// Two write paths exist, and they are deliberately asymmetric:
///
/// - the commit path (`set`, `update`, `try_update`) replaces the value and
///   then notifies every commit observer — "the component changed something,
///   tell the owner";
/// - the sync path (`resync`, `source_changed`) replaces the value and tells
///   no one — "the owner's data changed, the component merely caught up".
///
/// Observers never fire for a sync write. That is the invariant the whole
/// type exists for.
pub struct SyncedState<T> {
    cell: ValueCell<T>,
    mode: RefCell<SyncMode<T>>,
    condition: Option<SharedCondition<T>>,
    incoming: Option<SharedRecipe<T>>,
    observers: RefCell<SlotMap<CommitKey, SharedObserver<T>>>,
    last_source: RefCell<Option<T>>,
}

impl<T: Clone + Default> Default for SyncedState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone> SyncedState<T> {
    pub fn new(initial: T) -> Self {
        Self::with_options(initial, SyncOptions::new())
    }

    /// Build with sync/observer configuration. When the options carry a
    /// transform (either spelling), the very first value is the transform
    /// applied to `initial` — initialization and sync share that logic.
    pub fn with_options(initial: T, opts: SyncOptions<T>) -> Self {
        let first = match opts.effective_transform() {
            Some(t) => revise(&initial, |draft| t(draft)),
            None => initial.clone(),
        };

        let mut observers = SlotMap::with_key();
        if let Some(f) = opts.on_commit {
            observers.insert(f);
        }

        Self {
            cell: ValueCell::new(first),
            mode: RefCell::new(opts.sync),
            condition: opts.condition,
            incoming: opts.transform,
            observers: RefCell::new(observers),
            // The raw initial seeds change tracking, so feeding it back in
            // unchanged fires no cycle.
            last_source: RefCell::new(Some(initial)),
        }
    }

    pub fn get(&self) -> T {
        self.cell.get()
    }

    /// Borrowing read; no clone.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.cell.with(f)
    }

    /// Commit path: replace the value wholesale and notify observers.
    pub fn set(&self, value: T) {
        self.commit(value);
    }

    /// Revise the current value through `recipe` and commit the result.
    ///
    /// The recipe edits a draft copy; if it panics, nothing is committed and
    /// the current value stays exactly what it was. A recipe that edits
    /// nothing still commits (and still notifies observers).
    pub fn update(&self, recipe: impl FnOnce(&mut T)) {
        let next = self.cell.with(|current| revise(current, recipe));
        self.commit(next);
    }

    /// Fallible [`update`](SyncedState::update): on `Err` the draft is
    /// discarded, nothing commits, and the error comes back.
    pub fn try_update<E>(&self, recipe: impl FnOnce(&mut T) -> Result<(), E>) -> Result<(), E> {
        let next = self.cell.with(|current| try_revise(current, recipe))?;
        self.commit(next);
        Ok(())
    }

    /// Register an additional commit observer. Every observer sees every
    /// committed value exactly once; sync writes never reach any of them.
    pub fn observe(&self, f: impl Fn(&T) + 'static) -> CommitKey {
        self.observers.borrow_mut().insert(Rc::new(f))
    }

    pub fn unobserve(&self, key: CommitKey) {
        self.observers.borrow_mut().remove(key);
    }

    // The one place a caller-initiated write lands. Write first, notify
    // second: observers always see a value the cell already holds.
    fn commit(&self, value: T) {
        self.cell.put(value);

        // Snapshot before calling out; an observer may re-enter set/observe.
        let snapshot: SmallVec<[SharedObserver<T>; 2]> =
            self.observers.borrow().values().cloned().collect();
        if snapshot.is_empty() {
            return;
        }

        let committed = self.cell.get();
        for observer in &snapshot {
            observer(&committed);
        }
    }

    /// One synchronization cycle against `source`.
    ///
    /// Mode gate first, then the condition, then the transform; an accepted
    /// source lands via the raw cell write, so commit observers stay silent.
    /// Call this directly when the owner does its own change detection;
    /// otherwise prefer [`source_changed`](SyncedState::source_changed).
    pub fn resync(&self, source: &T) {
        let transform = {
            let mode = self.mode.borrow();
            if !mode.is_enabled() {
                log::trace!("resync skipped: sync off");
                return;
            }
            mode.recipe().cloned().or_else(|| self.incoming.clone())
        };

        if let Some(cond) = &self.condition
            && !cond(source)
        {
            log::trace!("resync skipped: condition rejected source");
            return;
        }

        let next = match &transform {
            Some(t) => revise(source, |draft| t(draft)),
            None => source.clone(),
        };
        self.cell.put(next);
    }

    pub fn sync_mode(&self) -> SyncMode<T> {
        self.mode.borrow().clone()
    }

    /// Replace the sync mode. When the mode actually changed (variant or
    /// recipe identity), one cycle replays against the most recent source on
    /// record — flipping mirroring on picks up the owner's current data
    /// without waiting for its next change.
    pub fn set_sync_mode(&self, mode: SyncMode<T>) {
        let changed = !self.mode.borrow().same_as(&mode);
        *self.mode.borrow_mut() = mode;
        if !changed {
            return;
        }

        let replay = self.last_source.borrow().clone();
        if let Some(source) = replay {
            log::debug!("sync mode changed; replaying last source");
            self.resync(&source);
        }
    }
}

impl<T: Clone + PartialEq> SyncedState<T> {
    /// Feed the owner's current source value.
    ///
    /// Runs a cycle only when `source` differs from the last one seen — the
    /// edge-triggered half of the contract. The value is recorded before the
    /// cycle runs, so a later [`set_sync_mode`](SyncedState::set_sync_mode)
    /// replays the newest source even if this cycle declines it.
    pub fn source_changed(&self, source: &T) {
        if self.last_source.borrow().as_ref() == Some(source) {
            return;
        }
        *self.last_source.borrow_mut() = Some(source.clone());
        self.resync(source);
    }
}
