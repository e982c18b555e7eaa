use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use super::KeyValueBackend;
use crate::errors::{BudgetError, Result};
use crate::utils::paths::{ensure_dir, PathResolver};

const VALUE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Stores each key as `<key>.json` inside a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    data_dir: PathBuf,
}

impl JsonFileBackend {
    /// Opens (creating when needed) the data directory under `root`, or the
    /// default application directory when `root` is `None`.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let app_root = PathResolver::resolve_base(root);
        let data_dir = PathResolver::data_dir_in(&app_root);
        ensure_dir(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn value_path(&self, key: &str) -> Result<PathBuf> {
        let name = canonical_key(key)?;
        Ok(self
            .data_dir
            .join(format!("{}.{}", name, VALUE_EXTENSION)))
    }
}

impl KeyValueBackend for JsonFileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key)?;
        match fs::read_to_string(&path) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.value_path(key)?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

fn canonical_key(key: &str) -> Result<String> {
    let trimmed = key.trim();
    let valid = !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_'));
    if !valid {
        return Err(BudgetError::Storage(format!(
            "`{}` is not a valid storage key",
            key
        )));
    }
    Ok(trimmed.to_string())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn get_missing_key_is_none() {
        let temp = tempdir().unwrap();
        let backend = JsonFileBackend::new(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(backend.get("budgetTrackerGoals").unwrap(), None);
    }

    #[test]
    fn set_overwrites_and_leaves_no_tmp_file() {
        let temp = tempdir().unwrap();
        let backend = JsonFileBackend::new(Some(temp.path().to_path_buf())).unwrap();
        backend.set("budgetTrackerGoals", "[1]").unwrap();
        backend.set("budgetTrackerGoals", "[2]").unwrap();
        assert_eq!(
            backend.get("budgetTrackerGoals").unwrap().as_deref(),
            Some("[2]")
        );
        let path = backend.value_path("budgetTrackerGoals").unwrap();
        assert!(path.ends_with("data/budgetTrackerGoals.json"));
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn rejects_path_like_keys() {
        let temp = tempdir().unwrap();
        let backend = JsonFileBackend::new(Some(temp.path().to_path_buf())).unwrap();
        assert!(backend.set("../escape", "[]").is_err());
        assert!(backend.get("").is_err());
    }

    #[test]
    fn tmp_path_appends_suffix() {
        let path = Path::new("/tmp/values/goals.json");
        assert_eq!(tmp_path(path), PathBuf::from("/tmp/values/goals.json.tmp"));
    }
}
