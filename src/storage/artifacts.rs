use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;

/// Writes JSON artifacts into a single output directory.
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Opens `dir`, creating it and any missing parents.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Serializes `payload` as pretty-printed JSON and replaces `name` with it.
    ///
    /// The content goes to a temporary sibling first and is renamed into
    /// place, so readers see either the previous file or the new one.
    pub fn write<T: Serialize + ?Sized>(&self, name: &str, payload: &T) -> Result<PathBuf> {
        let json = serde_json::to_string_pretty(payload)?;
        let target = self.path_for(name);
        let staging = self.dir.join(format!(".{}.tmp", name));

        fs::write(&staging, json)?;
        if let Err(e) = fs::rename(&staging, &target) {
            let _ = fs::remove_file(&staging);
            return Err(e.into());
        }

        tracing::debug!("Wrote {}", target.display());
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_creates_missing_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("public").join("data");

        let storage = Storage::new(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(storage.dir(), dir.as_path());
    }

    #[test]
    fn test_write_pretty_json() {
        let root = tempfile::tempdir().unwrap();
        let storage = Storage::new(root.path()).unwrap();

        let path = storage.write("projects.json", &json!({"projects": [], "lastUpdated": "x"})).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n  \"projects\""));
        let value: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["lastUpdated"], "x");
    }

    #[test]
    fn test_write_replaces_previous_content() {
        let root = tempfile::tempdir().unwrap();
        let storage = Storage::new(root.path()).unwrap();

        storage.write("stats.json", &json!({"stats": [1, 2, 3], "error": "old"})).unwrap();
        storage.write("stats.json", &json!({"stats": []})).unwrap();

        let value: Value =
            serde_json::from_str(&fs::read_to_string(storage.path_for("stats.json")).unwrap()).unwrap();
        assert_eq!(value, json!({"stats": []}));

        let leftovers: Vec<_> = fs::read_dir(root.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_new_fails_when_path_is_a_file() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("occupied");
        fs::write(&file, "not a directory").unwrap();

        assert!(Storage::new(&file).is_err());
    }
}
