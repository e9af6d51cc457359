//! Persistence of the last synced day index.

pub mod file_index;

use anyhow::Result;
use async_trait::async_trait;

/// Key under which the last synced index lives. The value is the decimal
/// string form of the index.
pub const LAST_INDEX_KEY: &str = "LAST_WORD_INDEX";

/// Contract for the key/value store backing [LAST_INDEX_KEY]. The store is an
/// external collaborator, values are opaque strings to it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IndexStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
