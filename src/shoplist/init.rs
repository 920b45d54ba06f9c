use crate::api::ListStateStore;
use crate::config::{ensure_config_dir, ShoplistConfig};
use crate::error::{Result, ShopError};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the platform config directory when set.
pub const HOME_ENV: &str = "SHOPLIST_HOME";

/// Picks the config directory: explicit override, then `SHOPLIST_HOME`,
/// then the platform config dir.
pub fn resolve_config_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "shoplist", "shoplist")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ShopError::Config("Could not determine config dir".to_string()))
}

/// Resolves the config directory, loads its settings and returns an empty
/// list configured with them.
pub fn initialize(override_dir: Option<&Path>) -> Result<ListStateStore> {
    let config_dir = resolve_config_dir(override_dir)?;
    ensure_config_dir(&config_dir)?;
    let config = ShoplistConfig::load(&config_dir)?;
    tracing::debug!(dir = %config_dir.display(), "context initialized");

    Ok(ListStateStore::in_memory(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_dir_wins() {
        let temp = TempDir::new().unwrap();
        let dir = resolve_config_dir(Some(temp.path())).unwrap();
        assert_eq!(dir, temp.path());
    }

    #[test]
    fn initialize_loads_config_into_list() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("config.json"),
            r#"{"default_quantity": "4"}"#,
        )
        .unwrap();

        let mut list = initialize(Some(temp.path())).unwrap();
        assert_eq!(list.config().default_quantity, "4");
        assert!(list.is_empty());

        list.add_with_default_quantity("Pears").unwrap();
        assert_eq!(list.items()[0].quantity, 4);
    }

    #[test]
    fn initialize_fails_on_file_instead_of_dir() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("not-a-dir");
        fs::write(&file, "").unwrap();
        assert!(matches!(
            initialize(Some(&file)),
            Err(ShopError::Config(_))
        ));
    }

    #[test]
    fn initialize_rejects_invalid_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("config.json"),
            r#"{"default_quantity": "0"}"#,
        )
        .unwrap();
        assert!(matches!(
            initialize(Some(temp.path())),
            Err(ShopError::Config(_))
        ));
    }
}
