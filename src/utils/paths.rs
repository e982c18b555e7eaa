use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use dirs::home_dir;

const DEFAULT_DIR_NAME: &str = ".budget_tracker";
const DATA_DIR: &str = "data";
const CONFIG_FILE: &str = "config.json";

pub const HOME_ENV: &str = "BUDGET_TRACKER_HOME";

/// Resolves where configuration and stored collections live.
pub struct PathResolver;

impl PathResolver {
    /// `$BUDGET_TRACKER_HOME`, else `~/.budget_tracker`.
    pub fn base_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    pub fn resolve_base(root: Option<PathBuf>) -> PathBuf {
        root.unwrap_or_else(Self::base_dir)
    }

    pub fn data_dir_in(base: &Path) -> PathBuf {
        base.join(DATA_DIR)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        base.join(CONFIG_FILE)
    }
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_root_wins() {
        let root = PathBuf::from("/tmp/budget-root");
        assert_eq!(PathResolver::resolve_base(Some(root.clone())), root);
        assert_eq!(
            PathResolver::data_dir_in(&root),
            PathBuf::from("/tmp/budget-root/data")
        );
        assert_eq!(
            PathResolver::config_file_in(&root),
            PathBuf::from("/tmp/budget-root/config.json")
        );
    }
}
