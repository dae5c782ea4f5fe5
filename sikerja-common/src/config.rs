//! Configuration loading and root folder resolution
//!
//! The root folder holds everything the dashboard persists or loads:
//! the sqlite database (`sikerja.db`) and the pre-trained cluster model
//! artifact (`kmeans_model.json`).

use crate::{Error, Result};
use std::path::PathBuf;

/// Database file name inside the root folder
pub const DATABASE_FILE: &str = "sikerja.db";

/// Cluster model artifact file name inside the root folder
pub const MODEL_FILE: &str = "kmeans_model.json";

/// Root folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file (`root_folder` key)
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_root_folder(cli_arg: Option<&str>, env_var_name: &str) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = locate_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(root_folder) = config.get("root_folder").and_then(|v| v.as_str()) {
                    return PathBuf::from(root_folder);
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    default_root_folder()
}

/// Create the root folder if it does not exist yet
pub fn ensure_root_folder(root: &PathBuf) -> Result<()> {
    std::fs::create_dir_all(root)?;
    Ok(())
}

/// Path of the sqlite database inside the root folder
pub fn database_path(root: &PathBuf) -> PathBuf {
    root.join(DATABASE_FILE)
}

/// Path of the cluster model artifact inside the root folder
pub fn model_path(root: &PathBuf) -> PathBuf {
    root.join(MODEL_FILE)
}

/// Locate the platform configuration file (`sikerja/config.toml`)
fn locate_config_file() -> Result<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("sikerja").join("config.toml"));

    if let Some(path) = user_config {
        if path.exists() {
            return Ok(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/sikerja/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
    }

    Err(Error::Config("No config file found".to_string()))
}

/// OS-dependent default root folder path
fn default_root_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("sikerja"))
        .unwrap_or_else(|| PathBuf::from("./sikerja_data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_arg_wins() {
        let root = resolve_root_folder(Some("/tmp/sikerja-test"), "SIKERJA_TEST_UNSET");
        assert_eq!(root, PathBuf::from("/tmp/sikerja-test"));
    }

    #[test]
    fn test_env_var_used_when_no_cli_arg() {
        std::env::set_var("SIKERJA_TEST_ROOT", "/tmp/sikerja-env");
        let root = resolve_root_folder(None, "SIKERJA_TEST_ROOT");
        assert_eq!(root, PathBuf::from("/tmp/sikerja-env"));
        std::env::remove_var("SIKERJA_TEST_ROOT");
    }

    #[test]
    fn test_derived_paths() {
        let root = PathBuf::from("/data/sikerja");
        assert_eq!(database_path(&root), PathBuf::from("/data/sikerja/sikerja.db"));
        assert_eq!(
            model_path(&root),
            PathBuf::from("/data/sikerja/kmeans_model.json")
        );
    }
}
