use std::cell::RefCell;
use std::rc::Rc;

/// Owns the current value. Cloning a `ValueCell` clones the handle, not the
/// value: every clone reads and replaces the same storage.
///
/// The cell is storage only. Nothing observes a raw write; notification is
/// the commit path's job in [`SyncedState`](crate::SyncedState).
pub struct ValueCell<T>(Rc<RefCell<T>>);

impl<T> Clone for ValueCell<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> ValueCell<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().clone()
    }

    /// Borrowing read for values too large to clone casually.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow())
    }

    /// Raw replacement. Crate-internal so callers outside the crate can only
    /// write through the commit or sync paths.
    pub(crate) fn put(&self, value: T) {
        *self.0.borrow_mut() = value;
    }
}

pub fn cell<T>(value: T) -> ValueCell<T> {
    ValueCell::new(value)
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ValueCell<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.borrow().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for ValueCell<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(ValueCell::new)
    }
}
