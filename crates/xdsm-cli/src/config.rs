//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use xdsm::{XdsmError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for XdsmError {
    fn from(err: ConfigError) -> Self {
        XdsmError::Io(std::io::Error::other(err.to_string()))
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (xdsm/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed or is invalid
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, XdsmError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("xdsm/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("org", "xdsm", "xdsm") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(
                path = system_config.display().to_string();
                "Loading configuration from system path"
            );
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load and validate configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, XdsmError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;

    Ok(config)
}

/// Parse configuration text and check its values.
fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    if config.style().diagram_styles_path().trim().is_empty() {
        return Err(ConfigError::Validation(
            "style.diagram_styles_path can not be empty".to_string(),
        ));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
            [layout]
            row_comments = false
            allow_cell_overwrite = true

            [style]
            diagram_styles_path = "../tex/diagram_styles"

            [export]
            standalone = false
            "#,
        )
        .unwrap();

        assert!(!config.layout().row_comments());
        assert!(config.layout().allow_cell_overwrite());
        assert_eq!(config.style().diagram_styles_path(), "../tex/diagram_styles");
        assert!(!config.export().standalone());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config("[layout]\nallow_cell_overwrite = true\n").unwrap();

        assert!(config.layout().row_comments());
        assert!(config.layout().allow_cell_overwrite());
        assert_eq!(config.style().diagram_styles_path(), "diagram_styles");
        assert!(config.export().standalone());
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            parse_config("[layout]\nrow_comments = \"yes\"\n"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            parse_config("[style]\ndiagram_styles_path = \" \"\n"),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_explicit_config() {
        let dir = tempfile::tempdir().unwrap();

        let err = load_config(Some(dir.path().join("absent.toml"))).unwrap_err();

        assert!(err.to_string().contains("Missing configuration file"));
    }

    #[test]
    fn test_explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[export]\nstandalone = false\n").unwrap();

        let config = load_config(Some(&path)).unwrap();

        assert!(!config.export().standalone());
    }
}
