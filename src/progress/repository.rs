use crate::progress::record::{ProgressPatch, ProgressRecord};
use crate::store::PersistentStore;

/// Key of the single persisted blob. Kept identical to the original web
/// release so existing saved progress keeps loading.
pub const STORAGE_KEY: &str = "programming-for-kids-progress";

/// Loads, merges and saves the progression record against a
/// [`PersistentStore`].
///
/// Storage problems never reach the caller: an absent or unparseable blob
/// loads as the default record, and a failed write is logged and dropped.
/// Constructed once at application start and handed to the engine; there is
/// no ambient global handle.
pub struct ProgressRepository<S> {
    store: S,
}

impl<S: PersistentStore> ProgressRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the current record, falling back to defaults when the blob is
    /// missing or corrupt.
    pub fn load(&self) -> ProgressRecord {
        let Some(raw) = self.store.read(STORAGE_KEY) else {
            return ProgressRecord::default();
        };
        match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("stored progress is unreadable, starting fresh: {e}");
                ProgressRecord::default()
            }
        }
    }

    /// Load-merge-write cycle: apply `patch` over the current record and
    /// persist the result in full.
    pub fn save(&self, patch: ProgressPatch) {
        let mut record = self.load();
        patch.apply(&mut record);

        let json = match serde_json::to_string(&record) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("failed to serialize progress: {e}");
                return;
            }
        };
        if let Err(e) = self.store.write(STORAGE_KEY, &json) {
            log::warn!("failed to save progress: {e}");
        }
    }

    /// Delete the stored blob; the next `load` yields defaults.
    pub fn reset(&self) {
        if let Err(e) = self.store.delete(STORAGE_KEY) {
            log::warn!("failed to reset progress: {e}");
        }
    }
}
