use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::{fmt, path::Path};

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_GRAPH_API_URL: &str = "https://graph.facebook.com/v2.6/me/messages";

/// Optional `config.json`, shaped like `{"messenger4j": {"appSecret": "...", "verifyToken": "..."}}`.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    messenger4j: MessengerSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessengerSection {
    app_secret: Option<String>,
    verify_token: Option<String>,
}

/// Process-wide settings, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub app_secret: String,
    pub verify_token: String,
    pub page_access_token: String,
    pub port: u16,
    pub graph_api_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("app_secret", &"[REDACTED]")
            .field("verify_token", &"[REDACTED]")
            .field("page_access_token", &"[REDACTED]")
            .field("port", &self.port)
            .field("graph_api_url", &self.graph_api_url)
            .finish()
    }
}

impl Config {
    /// Reads the config file named by `TALKING_CHESS_CONFIG` (if it exists)
    /// and the process environment.
    pub fn load() -> Result<Self> {
        let path = std::env::var("TALKING_CHESS_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let file = if Path::new(&path).exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file {}", path))?;
            Some(raw)
        } else {
            None
        };

        Self::from_sources(file.as_deref(), |key| std::env::var(key).ok())
    }

    /// Builds the config from raw file contents plus an environment lookup.
    /// Environment values win over the file.
    pub fn from_sources<F>(file: Option<&str>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file: FileConfig = match file {
            Some(raw) => serde_json::from_str(raw).context("Config file is not valid JSON")?,
            None => FileConfig::default(),
        };
        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let Some(app_secret) = env("MESSENGER4J_APP_SECRET").or(file.messenger4j.app_secret) else {
            bail!("App secret not set: use messenger4j.appSecret or MESSENGER4J_APP_SECRET");
        };
        let Some(verify_token) = env("MESSENGER4J_VERIFY_TOKEN").or(file.messenger4j.verify_token)
        else {
            bail!("Verify token not set: use messenger4j.verifyToken or MESSENGER4J_VERIFY_TOKEN");
        };
        let Some(page_access_token) = env("pageAccessToken").or_else(|| env("PAGE_ACCESS_TOKEN"))
        else {
            bail!("Page access token not set: use pageAccessToken or PAGE_ACCESS_TOKEN");
        };

        let port = match env("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{}'", port))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            app_secret,
            verify_token,
            page_access_token,
            port,
            graph_api_url: env("GRAPH_API_URL").unwrap_or_else(|| DEFAULT_GRAPH_API_URL.to_string()),
        })
    }
}
