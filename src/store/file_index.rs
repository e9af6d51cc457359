use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use super::IndexStore;

const STORE_FILE: &str = "index_store.json";

/// The main realization of [IndexStore]. Keeps the whole store as one small
/// json object that is rewritten on every set.
pub struct FileIndexStore {
    path: PathBuf,
}

impl FileIndexStore {
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(STORE_FILE),
        }
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path).await {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(v) => Ok(v),
                Err(e) => {
                    // Might happen after a shutdown cut a write short. The
                    // next sync rewrites the file.
                    warn!("Store file {:?} holds illegal json: {e}", self.path);
                    Ok(BTreeMap::new())
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read store file {:?}", self.path))
            }
        }
    }
}

#[async_trait]
impl IndexStore for FileIndexStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut all = self.read_all().await?;
        Ok(all.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut all = self.read_all().await?;
        all.insert(key.to_owned(), value.to_owned());
        let data = serde_json::to_string(&all)?;
        fs::write(&self.path, data)
            .await
            .with_context(|| format!("Failed to write store file {:?}", self.path))?;
        debug!("Stored {key}={value}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn missing_file_reads_as_absent() -> Result<()> {
        let dir = tempdir()?;
        let store = FileIndexStore::new(dir.path());

        assert_eq!(store.get("LAST_WORD_INDEX").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn set_then_get_roundtrips() -> Result<()> {
        let dir = tempdir()?;
        let store = FileIndexStore::new(dir.path());

        store.set("LAST_WORD_INDEX", "2").await?;
        assert_eq!(store.get("LAST_WORD_INDEX").await?, Some("2".into()));
        assert_eq!(store.get("OTHER").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn set_overwrites_previous_value() -> Result<()> {
        let dir = tempdir()?;
        let store = FileIndexStore::new(dir.path());

        store.set("LAST_WORD_INDEX", "2").await?;
        store.set("LAST_WORD_INDEX", "3").await?;
        assert_eq!(store.get("LAST_WORD_INDEX").await?, Some("3".into()));
        Ok(())
    }

    #[tokio::test]
    async fn values_survive_a_new_store_instance() -> Result<()> {
        let dir = tempdir()?;
        FileIndexStore::new(dir.path()).set("LAST_WORD_INDEX", "7").await?;

        let reopened = FileIndexStore::new(dir.path());
        assert_eq!(reopened.get("LAST_WORD_INDEX").await?, Some("7".into()));
        Ok(())
    }

    #[tokio::test]
    async fn corrupted_file_reads_as_absent() -> Result<()> {
        let dir = tempdir()?;
        std::fs::write(dir.path().join(STORE_FILE), "{not json")?;

        let store = FileIndexStore::new(dir.path());
        assert_eq!(store.get("LAST_WORD_INDEX").await?, None);

        // And a set repairs the file.
        store.set("LAST_WORD_INDEX", "0").await?;
        assert_eq!(store.get("LAST_WORD_INDEX").await?, Some("0".into()));
        Ok(())
    }
}
