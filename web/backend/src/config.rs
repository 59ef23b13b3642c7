use std::time::Duration;

pub const PRIMARY_API_BASE: &str = "https://groupietrackers.herokuapp.com/api";
pub const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";
pub const METADATA_TIMEOUT: Duration = Duration::from_secs(12);
pub const DEFAULT_REFERER: &str = "http://localhost:8080/";
pub const DEFAULT_PORT: u16 = 8080;

/// Names checked, in order, for the YouTube Data API key.
pub const API_KEY_VARS: [&str; 2] = ["YT_API_KEY", "YOUTUBE_API_KEY"];

#[derive(Debug, Clone)]
pub struct Config {
    pub primary_base: String,
    pub youtube_base: String,
    pub youtube_api_key: Option<String>,
    pub referer: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let youtube_api_key = API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty());

        let port = lookup("PORT")
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            primary_base: PRIMARY_API_BASE.to_string(),
            youtube_base: YOUTUBE_API_BASE.to_string(),
            youtube_api_key,
            referer: DEFAULT_REFERER.to_string(),
            port,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name: &str| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn primary_key_variable_wins() {
        let config = Config::from_lookup(lookup(&[("YT_API_KEY", "a"), ("YOUTUBE_API_KEY", "b")]));
        assert_eq!(config.youtube_api_key.as_deref(), Some("a"));
    }

    #[test]
    fn falls_back_to_second_variable() {
        let config = Config::from_lookup(lookup(&[("YT_API_KEY", "  "), ("YOUTUBE_API_KEY", "b")]));
        assert_eq!(config.youtube_api_key.as_deref(), Some("b"));
    }

    #[test]
    fn missing_key_and_default_port() {
        let config = Config::default();
        assert!(config.youtube_api_key.is_none());
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.primary_base, PRIMARY_API_BASE);
    }

    #[test]
    fn port_from_environment() {
        let config = Config::from_lookup(lookup(&[("PORT", "3000")]));
        assert_eq!(config.port, 3000);
    }
}
