use std::path::{Path, PathBuf};
use std::fs;
use log::debug;

use crate::config::types::Config;
use crate::utils::error::{BoxResult, JsonLdError};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 3] = ["_config.yml", "_config.yaml", "_config.toml"];

/// Load site configuration from config files
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>
) -> BoxResult<Config> {
    let mut config = Config::default();

    let config_paths = match config_files {
        Some(paths) => paths,
        None => find_default_config_files(&source_dir),
    };

    if config_paths.is_empty() {
        debug!("No configuration files found in {}", source_dir.as_ref().display());
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            merge_config_file(&mut config, &path)?;
        }
    }

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files<P: AsRef<Path>>(source_dir: P) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .filter(|path| path.exists())
        .collect()
}

/// Merge a configuration file into the current configuration
fn merge_config_file(config: &mut Config, config_path: &Path) -> BoxResult<()> {
    if !config_path.exists() {
        return Err(JsonLdError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )).into());
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| JsonLdError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    let file_config = parse_config(&content, config_path)?;
    merge_configs(config, file_config);

    Ok(())
}

/// Parse configuration text, picking the format from the file extension
fn parse_config(content: &str, path: &Path) -> BoxResult<Config> {
    let Some(ext) = path.extension() else {
        // Assume YAML if no extension
        return parse_yaml_config(content, path);
    };

    match ext.to_string_lossy().to_lowercase().as_str() {
        "yml" | "yaml" => parse_yaml_config(content, path),
        "toml" => parse_toml_config(content, path),
        "json" => parse_json_config(content, path),
        other => Err(JsonLdError::Config(format!(
            "Unsupported configuration file format: {}", other
        )).into()),
    }
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> BoxResult<Config> {
    // An empty _config.yml is valid and means "no settings"
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(content)
        .map_err(|e| JsonLdError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )).into())
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> BoxResult<Config> {
    toml::from_str(content)
        .map_err(|e| JsonLdError::Config(format!(
            "Failed to parse TOML configuration ({}): {}", path.display(), e
        )).into())
}

/// Parse a JSON configuration file
fn parse_json_config(content: &str, path: &Path) -> BoxResult<Config> {
    serde_json::from_str(content)
        .map_err(|e| JsonLdError::Config(format!(
            "Failed to parse JSON configuration ({}): {}", path.display(), e
        )).into())
}

/// Merge two configurations; values set in `source` win
fn merge_configs(target: &mut Config, source: Config) {
    if source.url.is_some() {
        target.url = source.url;
    }

    if source.baseurl.is_some() {
        target.baseurl = source.baseurl;
    }

    if source.title.is_some() {
        target.title = source.title;
    }

    if source.description.is_some() {
        target.description = source.description;
    }

    if source.author.is_some() {
        debug!("Merging author: {:?}", source.author);
        target.author = source.author;
    }
}
