use anyhow::{Context, Result};
use clap::Args;
use reqwest::Url;
use std::path::PathBuf;

/// Global client options, resolved as CLI > ENV > default
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Base URL of the kitchen inventory API
    #[arg(long, env = "LARDER_API_URL")]
    pub api_url: Option<String>,

    /// Path to the session file
    #[arg(long, env = "LARDER_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// HTTP connect timeout in seconds
    #[arg(long, env = "HTTP_CONNECT_TIMEOUT", default_value = "10")]
    pub connect_timeout: u64,

    /// HTTP request timeout in seconds
    #[arg(long, env = "HTTP_REQUEST_TIMEOUT", default_value = "30")]
    pub http_timeout: u64,

    /// Seconds the in-memory token cache is trusted before the session file
    /// is re-read
    #[arg(long, env = "TOKEN_FRESHNESS_WINDOW", default_value = "300")]
    pub token_freshness: u64,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: Url,
    pub session_file: PathBuf,
    pub log_level: String,
    pub http_connect_timeout: u64,
    pub http_request_timeout: u64,
    pub token_freshness: u64,
}

impl Config {
    /// Build the effective configuration from parsed arguments
    pub fn load(args: GlobalArgs) -> Result<Self> {
        let raw_url = args
            .api_url
            .context("LARDER_API_URL is required (use --api-url or set LARDER_API_URL)")?;

        // Relative endpoint joins need the trailing slash
        let normalized = if raw_url.ends_with('/') {
            raw_url
        } else {
            format!("{raw_url}/")
        };
        let api_url =
            Url::parse(&normalized).with_context(|| format!("Invalid API URL: {normalized}"))?;

        let session_file = match args.session_file {
            Some(path) => path,
            None => default_session_file()?,
        };

        Ok(Self {
            api_url,
            session_file,
            log_level: args.log_level,
            http_connect_timeout: args.connect_timeout,
            http_request_timeout: args.http_timeout,
            token_freshness: args.token_freshness,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.api_url.scheme(), "http" | "https") {
            anyhow::bail!("LARDER_API_URL must be an http(s) URL: {}", self.api_url);
        }

        if self.token_freshness == 0 {
            anyhow::bail!("TOKEN_FRESHNESS_WINDOW must be positive");
        }

        Ok(())
    }
}

fn default_session_file() -> Result<PathBuf> {
    let dir = dirs::config_dir().context("Could not determine the user config directory")?;
    Ok(dir.join("larder").join("session.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_url(url: &str) -> GlobalArgs {
        GlobalArgs {
            api_url: Some(url.to_string()),
            session_file: Some(PathBuf::from("/tmp/session.json")),
            log_level: "warn".to_string(),
            connect_timeout: 10,
            http_timeout: 30,
            token_freshness: 300,
        }
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = Config::load(args_with_url("http://localhost:8080/api")).unwrap();
        assert_eq!(config.api_url.as_str(), "http://localhost:8080/api/");
    }

    #[test]
    fn test_existing_trailing_slash_is_kept() {
        let config = Config::load(args_with_url("http://localhost:8080/api/")).unwrap();
        assert_eq!(config.api_url.as_str(), "http://localhost:8080/api/");
    }

    #[test]
    fn test_missing_url_is_an_error() {
        let mut args = args_with_url("http://localhost");
        args.api_url = None;
        assert!(Config::load(args).is_err());
    }

    #[test]
    fn test_validate_rejects_non_http_schemes() {
        let config = Config::load(args_with_url("ftp://localhost/api")).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_freshness() {
        let mut args = args_with_url("http://localhost:8080");
        args.token_freshness = 0;
        let config = Config::load(args).unwrap();
        assert!(config.validate().is_err());
    }
}
