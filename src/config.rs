//! YAML configuration
//!
//! Every field is optional; a missing config file means built-in defaults.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::Framework;
use crate::model::{PageOverrides, SortState, UserProfile};
use crate::ViewMode;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mock signed-in user, used as uploader/approver/audit actor
    pub current_user: UserProfile,
    /// View mode for pages without their own `initial_view_mode`
    pub initial_view_mode: Option<ViewMode>,
    pub default_sort: SortState,
    pub vim_mode: bool,
    pub prune_selection_on_navigate: bool,
    /// JSON seed file replacing the built-in data
    pub data_path: Option<PathBuf>,
    pub pages: HashMap<Framework, PageOverrides>,
    /// `--view` from the command line; beats every per-page setting
    #[serde(skip)]
    pub forced_view_mode: Option<ViewMode>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            current_user: UserProfile::default(),
            initial_view_mode: None,
            default_sort: SortState::default(),
            vim_mode: false,
            prune_selection_on_navigate: true,
            data_path: None,
            pages: HashMap::new(),
            forced_view_mode: None,
        }
    }
}

impl Config {
    /// Parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty file is valid and means "all defaults"
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load from the located config file, or defaults if there is none
    pub fn load_or_default(cli_path: Option<&str>) -> Result<(Self, Option<PathBuf>)> {
        match locate(cli_path)? {
            Some(path) => Ok((Self::load(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    /// Overrides for one framework (empty if none configured)
    pub fn page_overrides(&self, framework: Framework) -> PageOverrides {
        self.pages.get(&framework).cloned().unwrap_or_default()
    }
}

/// Determine the config file path with fallback logic
///
/// 1. `--config <path>` (must exist)
/// 2. `<config_dir>/docdeck/config.yaml`
/// 3. `./config.yaml`
///
/// Returns `Ok(None)` when no file is found in the default locations.
pub fn locate(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("docdeck").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SortDirection, SortKey};
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.prune_selection_on_navigate);
        assert!(!config.vim_mode);
        assert_eq!(config.default_sort, SortState::default());
        assert!(config.pages.is_empty());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = Config::from_yaml("  \n").unwrap();
        assert!(config.prune_selection_on_navigate);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
current_user:
  name: Alex Chen
  title: Auditor
initial_view_mode: grid
default_sort:
  key: uploadedAt
  direction: desc
vim_mode: true
prune_selection_on_navigate: false
data_path: /tmp/seed.json
pages:
  iso2:
    bulk_actions: true
  edc:
    title: Engineering
    initial_view_mode: tree
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.current_user.name, "Alex Chen");
        // Unset profile fields keep their defaults
        assert_eq!(config.current_user.id, "user-1");
        assert_eq!(config.initial_view_mode, Some(ViewMode::Grid));
        assert_eq!(config.default_sort.key, SortKey::UploadedAt);
        assert_eq!(config.default_sort.direction, SortDirection::Desc);
        assert!(config.vim_mode);
        assert!(!config.prune_selection_on_navigate);
        assert_eq!(config.data_path, Some(PathBuf::from("/tmp/seed.json")));
        assert_eq!(config.page_overrides(Framework::Iso2).bulk_actions, Some(true));
        assert_eq!(
            config.page_overrides(Framework::Edc).initial_view_mode,
            Some(ViewMode::Tree)
        );
        assert_eq!(config.page_overrides(Framework::Ce), PageOverrides::default());
    }

    #[test]
    fn test_status_alias_for_sort_key() {
        let config = Config::from_yaml("default_sort:\n  key: status\n").unwrap();
        assert_eq!(config.default_sort.key, SortKey::ApprovalStatus);
        assert_eq!(config.default_sort.direction, SortDirection::Asc);
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(Config::from_yaml("initial_view_mode: sideways").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "vim_mode: true").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(config.vim_mode);
    }

    #[test]
    fn test_locate_explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let err = locate(Some(missing.to_str().unwrap())).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_locate_explicit_path() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap().to_string();
        assert_eq!(locate(Some(&path)).unwrap(), Some(PathBuf::from(&path)));
    }
}
