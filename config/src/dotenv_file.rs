//! Read the project `.env` into a key-value map (applying to the env happens in lib).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::LoadError;

/// `.env` in `override_dir` if given, else in the current directory; `None` if absent.
fn dotenv_path(override_dir: Option<&Path>) -> Option<PathBuf> {
    let dir = override_dir
        .map(Path::to_path_buf)
        .or_else(|| std::env::current_dir().ok())?;
    let path = dir.join(".env");
    path.is_file().then_some(path)
}

/// Parses `path` with the `dotenv` crate (quotes, `export`, comments, `${VAR}`
/// substitution). A malformed line fails the whole file.
pub fn parse_file(path: &Path) -> Result<HashMap<String, String>, LoadError> {
    let iter = ::dotenv::from_path_iter(path).map_err(|e| LoadError::DotenvRead(e.to_string()))?;
    let mut out = HashMap::new();
    for item in iter {
        let (key, value) = item.map_err(|e| LoadError::DotenvParse(e.to_string()))?;
        out.insert(key, value);
    }
    Ok(out)
}

/// Loads `.env` from `override_dir` or the current directory. Missing file returns an empty map.
pub fn load_env_map(override_dir: Option<&Path>) -> Result<HashMap<String, String>, LoadError> {
    match dotenv_path(override_dir) {
        Some(path) => parse_file(&path),
        None => Ok(HashMap::new()),
    }
}
