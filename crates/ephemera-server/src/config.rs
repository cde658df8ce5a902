use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, bail};

use ephemera_api::auth::DEFAULT_SESSION_COOKIE;
use ephemera_store::DEFAULT_POST_LIFETIME_MINUTES;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub post_lifetime_minutes: i64,
    pub static_dir: PathBuf,
    pub session_cookie: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("EPHEMERA_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = lookup("EPHEMERA_PORT")
            .unwrap_or_else(|| "5000".into())
            .parse()
            .context("EPHEMERA_PORT must be a port number")?;
        let post_lifetime_minutes: i64 = match lookup("EPHEMERA_POST_LIFETIME_MINUTES") {
            Some(v) => v
                .parse()
                .context("EPHEMERA_POST_LIFETIME_MINUTES must be a whole number of minutes")?,
            None => DEFAULT_POST_LIFETIME_MINUTES,
        };
        if post_lifetime_minutes <= 0 {
            bail!("EPHEMERA_POST_LIFETIME_MINUTES must be positive, got {post_lifetime_minutes}");
        }
        let static_dir: PathBuf = lookup("EPHEMERA_STATIC_DIR")
            .unwrap_or_else(|| "./static".into())
            .into();
        let session_cookie =
            lookup("EPHEMERA_SESSION_COOKIE").unwrap_or_else(|| DEFAULT_SESSION_COOKIE.into());

        Ok(Self {
            host,
            port,
            post_lifetime_minutes,
            static_dir,
            session_cookie,
        })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}
