//! Configuration loading for Leadscore

mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".leadscorerc.json";

/// Find and load a config file. Searches the working directory then its
/// parents; a missing file is the default config, not an error.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        Some(path)
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON in config: {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

/// Walk up from `start` looking for the config file
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut dir = if start.is_file() {
        start.parent()?
    } else {
        start
    };
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// Default config contents written by `leadscore init`
pub fn default_config_contents() -> &'static str {
    r#"{
  "threshold": 0,
  "weights": {},
  "industrySpend": {}
}
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_config_is_default_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.threshold, None);
        assert!(config.weights.is_empty());
    }

    #[test]
    fn config_found_in_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = fs::File::create(dir.path().join(CONFIG_FILENAME)).unwrap();
        f.write_all(br#"{"threshold": 65}"#).unwrap();
        let child = dir.path().join("nested");
        fs::create_dir(&child).unwrap();

        let config = load_config(&child, None).unwrap();
        assert_eq!(config.threshold, Some(65));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path(), Some(Path::new("nope.json")));
        assert!(err.is_err());
    }

    #[test]
    fn invalid_json_is_an_error_with_context() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{not json").unwrap();
        let err = load_config(dir.path(), None).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON"));
    }

    #[test]
    fn default_contents_parse() {
        let _: Config = serde_json::from_str(default_config_contents()).unwrap();
    }
}
