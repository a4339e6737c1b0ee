use anyhow::Result;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use whatsapp_client::{MessagesApiConfig, DEFAULT_MESSAGES_API_URL};

/// Bridge config, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// BIND_ADDR
    pub bind_addr: String,
    /// PORT
    pub port: u16,
    /// LOG_FILE
    pub log_file: String,
    /// MESSAGES_API_URL: provider send endpoint
    pub messages_api_url: String,
    /// MESSAGES_API_TIMEOUT_SECS: per-attempt timeout of a send
    pub messages_api_timeout_secs: u64,
    /// MESSAGES_API_MAX_RETRIES: retries after the first attempt
    pub messages_api_max_retries: u32,
    /// WHATSAPP_LOCALE
    pub whatsapp_locale: String,
}

impl BridgeConfig {
    /// Load from environment variables. `port` overrides PORT if provided.
    /// Call validate() after load to fail fast before serving.
    pub fn load(port: Option<u16>) -> Result<Self> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = port
            .or_else(|| env::var("PORT").ok().and_then(|s| s.parse().ok()))
            .unwrap_or(3000);
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/whatsapp-bridge.log".to_string());
        let messages_api_url = env::var("MESSAGES_API_URL")
            .unwrap_or_else(|_| DEFAULT_MESSAGES_API_URL.to_string());
        let messages_api_timeout_secs = env::var("MESSAGES_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);
        let messages_api_max_retries = env::var("MESSAGES_API_MAX_RETRIES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(2);
        let whatsapp_locale = env::var("WHATSAPP_LOCALE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "en".to_string());

        Ok(Self {
            bind_addr,
            port,
            log_file,
            messages_api_url,
            messages_api_timeout_secs,
            messages_api_max_retries,
            whatsapp_locale,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.messages_api_url).is_err() {
            anyhow::bail!(
                "MESSAGES_API_URL is not a valid URL: {}",
                self.messages_api_url
            );
        }
        if self.port == 0 {
            anyhow::bail!("PORT must be non-zero");
        }
        if self.messages_api_timeout_secs == 0 {
            anyhow::bail!("MESSAGES_API_TIMEOUT_SECS must be at least 1");
        }
        self.socket_addr()?;
        Ok(())
    }

    /// BIND_ADDR may be IPv4 or IPv6 (`::`, `::1`).
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .bind_addr
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid BIND_ADDR {}: {}", self.bind_addr, e))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn messages_api_config(&self) -> MessagesApiConfig {
        MessagesApiConfig {
            api_url: self.messages_api_url.clone(),
            timeout: Duration::from_secs(self.messages_api_timeout_secs),
            max_retries: self.messages_api_max_retries,
            locale: self.whatsapp_locale.clone(),
            ..MessagesApiConfig::default()
        }
    }
}
