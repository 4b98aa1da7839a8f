use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` from the workspace root, embedded at build time because the
/// web client has no filesystem to read it from.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Parse a config file. Falls back to defaults if it does not parse.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to parse config.toml, using defaults");
        AppConfig::default()
    })
}

/// The application config, parsed on first use.
///
/// `ECOLETA_API_URL`, when set at build time, overrides `api.base_url`.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let mut config = parse_config(EMBEDDED_CONFIG);
        if let Some(url) = option_env!("ECOLETA_API_URL") {
            config.api.base_url = url.to_string();
        }
        tracing::info!(
            api = %config.api.base_url,
            geography = %config.geography.base_url,
            "Loaded config"
        );
        config
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config: AppConfig = toml::from_str(EMBEDDED_CONFIG).unwrap();
        assert!(config.geography.base_url.contains("ibge"));
        assert_eq!(config.map.zoom, 15);
    }

    #[test]
    fn unparseable_config_falls_back_to_defaults() {
        assert_eq!(parse_config("[api\nbase_url = "), AppConfig::default());
    }

    #[test]
    fn app_config_is_cached() {
        let first = app_config() as *const AppConfig;
        let second = app_config() as *const AppConfig;
        assert_eq!(first, second);
    }
}
