use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Catalog base URL is set
/// - Page size, type list size and fetch parallelism are positive
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Catalog validation
    if config.catalog.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "catalog.base_url cannot be empty".to_string(),
        ));
    }

    // Browse validation
    if config.browse.page_limit == 0 {
        return Err(ConfigError::ValidationError(
            "browse.page_limit must be greater than 0".to_string(),
        ));
    }
    if config.browse.type_limit == 0 {
        return Err(ConfigError::ValidationError(
            "browse.type_limit must be greater than 0".to_string(),
        ));
    }
    if config.browse.max_concurrent_fetches == 0 {
        return Err(ConfigError::ValidationError(
            "browse.max_concurrent_fetches must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PokeApiConfig;
    use crate::config::ServerConfig;
    use crate::engine::BrowseConfig;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_port_zero_fails() {
        let config = Config {
            server: ServerConfig {
                port: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validate_empty_base_url_fails() {
        let config = Config {
            catalog: PokeApiConfig {
                base_url: "  ".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_page_limit_fails() {
        let config = Config {
            browse: BrowseConfig {
                page_limit: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("page_limit"));
    }

    #[test]
    fn test_validate_zero_type_limit_fails() {
        let config = Config {
            browse: BrowseConfig {
                type_limit: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_parallelism_fails() {
        let config = Config {
            browse: BrowseConfig {
                max_concurrent_fetches: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }
}
