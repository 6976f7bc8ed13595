use std::path::Path;

use anyhow::Result;

/// Recovers the last used capture-sequence index so a fresh run continues
/// numbering where the previous one stopped.
pub trait SequenceRecovery: Send + Sync {
    fn recover_last_index(&self, folder: &Path, prefix: &str) -> Result<u32>;
}
