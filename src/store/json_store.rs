use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use anyhow::Result;

/// Synchronous key-value storage backed by one JSON file per key.
pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(default_data_dir())
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }

    /// Raw contents stored under `key`, or `None` if nothing was ever written.
    pub fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.file_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the value under `key`. The write goes to a temp file first so a
    /// crash never leaves a half-written record behind.
    pub fn write(&self, key: &str, content: &str) -> Result<()> {
        let path = self.file_path(key);
        let tmp_path = path.with_extension("json.tmp");

        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.file_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

}

pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mysaathi")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_test_store() -> (TempDir, JsonStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_read_missing_key_is_none() {
        let (_dir, store) = make_test_store();
        assert_eq!(store.read("nothing").unwrap(), None);
    }

    #[test]
    fn test_write_overwrites_previous_value() {
        let (_dir, store) = make_test_store();
        store.write("k", "{\"a\":1}").unwrap();
        store.write("k", "{\"a\":2}").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("{\"a\":2}"));
    }

    #[test]
    fn test_write_leaves_no_tmp_files() {
        let (dir, store) = make_test_store();
        store.write("k", "{}").unwrap();
        let tmp_files: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("tmp"))
            .collect();
        assert!(tmp_files.is_empty(), "no residual .tmp files");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_dir, store) = make_test_store();
        store.write("k", "{}").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.read("k").unwrap(), None);
        store.remove("k").unwrap();
    }

    #[test]
    fn test_with_base_dir_creates_missing_dirs() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = JsonStore::with_base_dir(nested.clone()).unwrap();
        assert!(nested.exists());
        store.write("k", "{}").unwrap();
        assert!(nested.join("k.json").exists());
    }
}
