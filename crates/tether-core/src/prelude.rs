pub use crate::cell::{ValueCell, cell};
pub use crate::options::{SharedCondition, SharedObserver, SyncMode, SyncOptions};
pub use crate::recipe::{SharedRecipe, revise, try_revise};
pub use crate::state::{CommitKey, SyncedState};
