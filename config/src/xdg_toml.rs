//! Load the `[env]` table from `$XDG_CONFIG_HOME/<app>/config.toml`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::LoadError;

/// Path of the app's XDG config file, whether or not it exists.
pub fn config_path(app_name: &str) -> Result<PathBuf, LoadError> {
    let base = cross_xdg::BaseDirs::new().map_err(|e| LoadError::XdgPath(e.to_string()))?;
    Ok(base.config_home().join(app_name).join("config.toml"))
}

#[derive(serde::Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    env: HashMap<String, String>,
}

/// Returns the `[env]` pairs of `path`. Missing file or missing section returns an empty map.
pub fn read_env_table(path: &Path) -> Result<HashMap<String, String>, LoadError> {
    if !path.is_file() {
        return Ok(HashMap::new());
    }
    let content = std::fs::read_to_string(path).map_err(LoadError::XdgRead)?;
    let config: ConfigFile = toml::from_str(&content)?;
    Ok(config.env)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn reads_env_table() {
        let (_dir, path) = write_config(
            r#"
[env]
GOOGLE_API_KEY = "g-key"
TRIPTYCH_MEMORY_SCOPE = "per-run"
"#,
        );
        let map = read_env_table(&path).unwrap();
        assert_eq!(map.get("GOOGLE_API_KEY").map(String::as_str), Some("g-key"));
        assert_eq!(map.get("TRIPTYCH_MEMORY_SCOPE").map(String::as_str), Some("per-run"));
    }

    #[test]
    fn missing_file_returns_empty_map() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_env_table(&dir.path().join("config.toml")).unwrap().is_empty());
    }

    #[test]
    fn config_without_env_section_returns_empty_map() {
        let (_dir, path) = write_config("[other]\nkey = \"ignored\"\n");
        assert!(read_env_table(&path).unwrap().is_empty());
    }

    #[test]
    fn invalid_toml_returns_xdg_parse_error() {
        let (_dir, path) = write_config("not valid toml [[[\n");
        assert!(matches!(read_env_table(&path), Err(LoadError::XdgParse(_))));
    }

    #[test]
    fn config_path_ends_with_app_dir() {
        let path = config_path("triptych").unwrap();
        assert!(path.ends_with("triptych/config.toml"), "{}", path.display());
    }
}
