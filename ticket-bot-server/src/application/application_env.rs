use crate::service::id_generator::IdStrategy;
use anyhow::anyhow;
use std::{net::SocketAddr, path::PathBuf, time::Duration};
use webhook_client::Url;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    /// Base of links to tickets. Always ends with `/`
    pub public_url: String,

    pub db_connection_string: String,
    pub db_max_connections: u32,
    pub db_schema_path: PathBuf,

    pub id_strategy: IdStrategy,
    pub max_insert_attempts: u8,

    pub max_http_content_len: usize,

    pub webhook_timeout: Duration,
    pub webhook_retry_max_count: u8,
    pub webhook_retry_interval: Duration,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("TICKET_BOT_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("TICKET_BOT_LOG_FILENAME")?;
        let bind_address = Self::env_var("TICKET_BOT_BIND_ADDRESS")?.parse()?;
        let insecure = Self::env_var("TICKET_BOT_INSECURE")?.parse()?;
        let public_url = normalize_public_url(&Self::env_var("TICKET_BOT_PUBLIC_URL")?, insecure)?;
        let db_connection_string = Self::env_var("TICKET_BOT_DB_CONNECTION_STRING")?;
        let db_max_connections = Self::env_var("TICKET_BOT_DB_MAX_CONNECTIONS")?.parse()?;
        let db_schema_path = Self::env_var("TICKET_BOT_DB_SCHEMA_PATH")?.into();
        let id_strategy = Self::env_var("TICKET_BOT_ID_STRATEGY")?.parse()?;
        let max_insert_attempts = Self::env_var("TICKET_BOT_MAX_INSERT_ATTEMPTS")?.parse()?;
        if max_insert_attempts == 0 {
            return Err(anyhow!("TICKET_BOT_MAX_INSERT_ATTEMPTS must be at least 1"));
        }
        let max_http_content_len = Self::env_var("TICKET_BOT_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let webhook_timeout = Self::env_var("TICKET_BOT_WEBHOOK_TIMEOUT")?.parse()?;
        let webhook_timeout = Duration::from_secs(webhook_timeout);
        let webhook_retry_max_count = Self::env_var("TICKET_BOT_WEBHOOK_RETRY_MAX_COUNT")?.parse()?;
        if webhook_retry_max_count == 0 {
            return Err(anyhow!("TICKET_BOT_WEBHOOK_RETRY_MAX_COUNT must be at least 1"));
        }
        let webhook_retry_interval = Self::env_var("TICKET_BOT_WEBHOOK_RETRY_INTERVAL")?.parse()?;
        let webhook_retry_interval = Duration::from_millis(webhook_retry_interval);

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            public_url,
            db_connection_string,
            db_max_connections,
            db_schema_path,
            id_strategy,
            max_insert_attempts,
            max_http_content_len,
            webhook_timeout,
            webhook_retry_max_count,
            webhook_retry_interval,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}

///
/// Prefixes bare host with `https://` (`http://` when `insecure`)
/// and makes sure the url ends with `/`.
/// Urls that already have a scheme keep it.
///
pub fn normalize_public_url(public_url: &str, insecure: bool) -> anyhow::Result<String> {
    let public_url = public_url.trim();
    if public_url.is_empty() {
        return Err(anyhow!("public url is empty"));
    }

    let mut public_url = if public_url.contains("://") {
        public_url.to_string()
    } else if insecure {
        format!("http://{public_url}")
    } else {
        format!("https://{public_url}")
    };
    if !public_url.ends_with('/') {
        public_url.push('/');
    }

    Url::parse(&public_url).map_err(|err| anyhow!("invalid public url {public_url}: {err}"))?;

    Ok(public_url)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalize_public_url_secure() {
        let public_url = normalize_public_url("tickets.example.com", false).unwrap();

        assert_eq!(public_url, "https://tickets.example.com/");
    }

    #[test]
    fn normalize_public_url_insecure() {
        let public_url = normalize_public_url("localhost:8080", true).unwrap();

        assert_eq!(public_url, "http://localhost:8080/");
    }

    #[test]
    fn normalize_public_url_trailing_slash_kept() {
        let public_url = normalize_public_url("tickets.example.com/bot/", false).unwrap();

        assert_eq!(public_url, "https://tickets.example.com/bot/");
    }

    #[test]
    fn normalize_public_url_scheme_kept() {
        let public_url = normalize_public_url("http://tickets.example.com", false).unwrap();

        assert_eq!(public_url, "http://tickets.example.com/");
    }

    #[test]
    fn normalize_public_url_empty() {
        assert!(normalize_public_url("  ", false).is_err());
    }
}
