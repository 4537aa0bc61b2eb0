//! Load configuration from XDG `config.toml` and project `.env`, then apply to the process
//! environment with priority: **existing env > .env > XDG**.
//!
//! The XDG file keeps its variables under an `[env]` table:
//!
//! ```toml
//! [env]
//! GOOGLE_API_KEY = "..."
//! TRIPTYCH_MEMORY_SCOPE = "per-run"
//! ```

mod dotenv_file;
mod xdg_toml;

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use thiserror::Error;

pub use xdg_toml::config_path;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("xdg config path: {0}")]
    XdgPath(String),
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    DotenvRead(String),
    #[error("parse .env: {0}")]
    DotenvParse(String),
}

/// Loads `$XDG_CONFIG_HOME/<app_name>/config.toml` and the project `.env`, then sets
/// environment variables only for keys that are **not** already set.
///
/// For a key missing from the process environment, `.env` (in `override_dir`, or the
/// current directory) wins over the XDG file. Returns the keys that were set, sorted.
pub fn load_and_apply(app_name: &str, override_dir: Option<&Path>) -> Result<Vec<String>, LoadError> {
    let xdg_map = xdg_toml::read_env_table(&xdg_toml::config_path(app_name)?)?;
    let dotenv_map = dotenv_file::load_env_map(override_dir)?;
    Ok(apply_maps(dotenv_map, xdg_map))
}

/// Same as [`load_and_apply`] with an explicit XDG file path instead of the XDG lookup.
pub fn load_and_apply_from(
    xdg_file: &Path,
    override_dir: Option<&Path>,
) -> Result<Vec<String>, LoadError> {
    let xdg_map = xdg_toml::read_env_table(xdg_file)?;
    let dotenv_map = dotenv_file::load_env_map(override_dir)?;
    Ok(apply_maps(dotenv_map, xdg_map))
}

fn apply_maps(dotenv_map: HashMap<String, String>, xdg_map: HashMap<String, String>) -> Vec<String> {
    let keys: BTreeSet<&String> = dotenv_map.keys().chain(xdg_map.keys()).collect();
    let mut applied = Vec::new();
    for key in keys {
        if std::env::var_os(key).is_some() {
            continue;
        }
        if let Some(value) = dotenv_map.get(key).or_else(|| xdg_map.get(key)) {
            std::env::set_var(key, value);
            applied.push(key.clone());
        }
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    fn xdg_file(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    fn dotenv_dir(content: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), content).unwrap();
        dir
    }

    #[test]
    fn existing_env_wins() {
        env::set_var("TRIPTYCH_CFG_TEST_EXISTING", "from_env");
        let dir = dotenv_dir("TRIPTYCH_CFG_TEST_EXISTING=from_dotenv\n");
        let (_x, xdg) = xdg_file("[env]\nTRIPTYCH_CFG_TEST_EXISTING = \"from_xdg\"\n");

        let applied = load_and_apply_from(&xdg, Some(dir.path())).unwrap();
        let val = env::var("TRIPTYCH_CFG_TEST_EXISTING").unwrap();
        env::remove_var("TRIPTYCH_CFG_TEST_EXISTING");

        assert_eq!(val, "from_env");
        assert!(!applied.contains(&"TRIPTYCH_CFG_TEST_EXISTING".to_string()));
    }

    #[test]
    fn dotenv_overrides_xdg() {
        env::remove_var("TRIPTYCH_CFG_TEST_PRIORITY");
        let dir = dotenv_dir("TRIPTYCH_CFG_TEST_PRIORITY=from_dotenv\n");
        let (_x, xdg) = xdg_file("[env]\nTRIPTYCH_CFG_TEST_PRIORITY = \"from_xdg\"\n");

        let applied = load_and_apply_from(&xdg, Some(dir.path())).unwrap();
        let val = env::var("TRIPTYCH_CFG_TEST_PRIORITY").unwrap();
        env::remove_var("TRIPTYCH_CFG_TEST_PRIORITY");

        assert_eq!(val, "from_dotenv");
        assert_eq!(applied, ["TRIPTYCH_CFG_TEST_PRIORITY"]);
    }

    #[test]
    fn xdg_applied_when_no_dotenv() {
        env::remove_var("TRIPTYCH_CFG_TEST_XDG_ONLY");
        let empty = tempfile::tempdir().unwrap();
        let (_x, xdg) = xdg_file("[env]\nTRIPTYCH_CFG_TEST_XDG_ONLY = \"from_xdg\"\n");

        load_and_apply_from(&xdg, Some(empty.path())).unwrap();
        let val = env::var("TRIPTYCH_CFG_TEST_XDG_ONLY").unwrap();
        env::remove_var("TRIPTYCH_CFG_TEST_XDG_ONLY");

        assert_eq!(val, "from_xdg");
    }

    #[test]
    fn dotenv_only_when_no_xdg() {
        env::remove_var("TRIPTYCH_CFG_TEST_DOTENV_ONLY");
        let dir = dotenv_dir("TRIPTYCH_CFG_TEST_DOTENV_ONLY=from_dotenv_only\n");
        let missing = dir.path().join("no-such-config.toml");

        load_and_apply_from(&missing, Some(dir.path())).unwrap();
        let val = env::var("TRIPTYCH_CFG_TEST_DOTENV_ONLY").unwrap();
        env::remove_var("TRIPTYCH_CFG_TEST_DOTENV_ONLY");

        assert_eq!(val, "from_dotenv_only");
    }

    #[test]
    fn invalid_xdg_toml_fails_with_xdg_parse_error() {
        let empty = tempfile::tempdir().unwrap();
        let (_x, xdg) = xdg_file("invalid [[[\n");
        let result = load_and_apply_from(&xdg, Some(empty.path()));
        assert!(matches!(result, Err(LoadError::XdgParse(_))));
    }

    #[test]
    fn load_and_apply_no_config_ok() {
        let empty = tempfile::tempdir().unwrap();
        let r = load_and_apply("triptych-config-test-nonexistent-app", Some(empty.path()));
        assert!(r.unwrap().is_empty());
    }
}
