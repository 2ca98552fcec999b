use std::path::PathBuf;

use anyhow::{Context, Result};

use super::Storage;

/// Directory name under the platform data dir
const APP_DIR: &str = "mostrador";

/// Stores each key as a plain file in a single directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create storage directory: {}", dir.display()))?;
        Ok(Self { dir })
    }

    /// Storage under the platform data directory
    /// (e.g. `~/.local/share/mostrador`).
    pub fn open_default() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Self::new(data_dir.join(APP_DIR))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read storage key: {}", key))?;
        Ok(Some(contents))
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        std::fs::write(self.key_path(key), value)
            .with_context(|| format!("Failed to write storage key: {}", key))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove storage key: {}", key))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_put_get_remove() {
        let dir = tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path()).unwrap();

        assert_eq!(storage.get("access_token").unwrap(), None);

        storage.put("access_token", "tok_a").unwrap();
        assert_eq!(storage.get("access_token").unwrap().as_deref(), Some("tok_a"));

        storage.put("access_token", "tok_b").unwrap();
        assert_eq!(storage.get("access_token").unwrap().as_deref(), Some("tok_b"));

        storage.remove("access_token").unwrap();
        assert_eq!(storage.get("access_token").unwrap(), None);
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let dir = tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path()).unwrap();
        storage.remove("refresh_token").unwrap();
    }

    #[test]
    fn test_new_creates_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("deep").join("storage");
        FileStorage::new(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
