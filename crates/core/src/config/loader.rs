use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::{Path, PathBuf};

use super::{types::Config, ConfigError};

/// Environment variable holding the config file path.
pub const CONFIG_PATH_ENV: &str = "POKEDEX_CONFIG";

/// Prefix for per-key overrides, nested with `__` (`POKEDEX_BROWSE__PAGE_LIMIT`).
const ENV_PREFIX: &str = "POKEDEX_";

/// Config file path from `POKEDEX_CONFIG`, or `config.toml`.
pub fn config_path_from_env() -> PathBuf {
    std::env::var(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"))
}

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    // POKEDEX_CONFIG shares the prefix but names the file, not a key
    let config: Config = Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__").ignore(&["config"]))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[server]
port = 9000

[browse]
page_limit = 50
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.browse.page_limit, 50);
    }

    #[test]
    fn test_load_config_from_str_bad_type() {
        let toml = r#"
[browse]
page_limit = "twenty"
"#;
        let result = load_config_from_str(toml);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[server]
host = "127.0.0.1"
port = 3000

[catalog]
base_url = "http://127.0.0.1:8000/api/v2"
"#
        )
        .unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host.to_string(), "127.0.0.1");
        assert_eq!(config.catalog.base_url, "http://127.0.0.1:8000/api/v2");
    }

    #[test]
    fn test_env_overrides_nested_key() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[browse]
title = "From file"
"#
        )
        .unwrap();

        std::env::set_var("POKEDEX_BROWSE__TITLE", "From env");
        let result = load_config(temp_file.path());
        std::env::remove_var("POKEDEX_BROWSE__TITLE");

        let config = result.unwrap();
        assert_eq!(config.browse.title, "From env");
        assert_eq!(config.browse.page_limit, 20);
    }
}
