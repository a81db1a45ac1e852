//! Themekit configuration file handling

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use themekit::EngineConfig;

/// File looked up in the working directory when `--config` is absent
pub const CONFIG_FILE: &str = "themekit.toml";

/// Load engine settings from `path`, or from `./themekit.toml`.
///
/// An explicit path must exist. The implicit file is optional; without it
/// the defaults apply.
pub fn load_engine_config(path: Option<&Path>) -> Result<EngineConfig> {
    let (config_path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (Path::new(CONFIG_FILE).to_path_buf(), false),
    };

    if !config_path.exists() {
        if required {
            anyhow::bail!("Config file {} does not exist", config_path.display());
        }
        tracing::debug!("No {} found, using defaults", CONFIG_FILE);
        return Ok(EngineConfig::default());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    let config = EngineConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_engine_config(Some(&missing)).is_err());
    }

    #[test]
    fn reads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "builtin_presets = true\n[history]\ncapacity = 5").unwrap();

        let config = load_engine_config(Some(file.path())).unwrap();
        assert!(config.builtin_presets);
        assert_eq!(config.history.capacity, 5);
    }

    #[test]
    fn malformed_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "history = [").unwrap();

        let err = load_engine_config(Some(file.path())).unwrap_err();
        assert!(format!("{err}").contains("Failed to parse"));
    }
}
