use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the JSON corpus of heritage sites
    #[serde(default = "default_corpus_path")]
    pub corpus_path: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Default result count for site-to-site recommendations
    #[serde(default = "default_site_limit")]
    pub site_limit: usize,

    /// Default result count for personalized recommendations
    #[serde(default = "default_user_limit")]
    pub user_limit: usize,
}

fn default_corpus_path() -> String {
    "data/sites.json".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_site_limit() -> usize {
    5
}

fn default_user_limit() -> usize {
    10
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_for_missing_vars() {
        let config: Config = envy::from_iter(std::iter::empty::<(String, String)>()).unwrap();
        assert_eq!(config.corpus_path, "data/sites.json");
        assert_eq!(config.port, 5000);
        assert_eq!(config.site_limit, 5);
        assert_eq!(config.user_limit, 10);
    }

    #[test]
    fn test_env_overrides_defaults() {
        let vars = vec![
            ("CORPUS_PATH".to_string(), "/tmp/corpus.json".to_string()),
            ("PORT".to_string(), "8080".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.corpus_path, "/tmp/corpus.json");
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
    }
}
