use std::{ops::Deref, path::PathBuf, sync::Arc};

use anyhow::{Context, anyhow};
use rand::{Rng, distr::Alphanumeric};
use tower_cookies::Key;

const DEFAULT_DB_URL: &str = "sqlite://podium.db?mode=rwc";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
/// `Key::try_from` needs at least this much key material.
const MIN_SECRET_LEN: usize = 64;

pub struct ConfigInner {
    pub db_url: String,
    pub host: String,
    pub port: u16,
    pub admin_password: String,
    /// Signs the per-competition ballot token cookies.
    pub cookie_key: Key,
    /// Directory searched for `candidates_{slug}.txt` at startup.
    pub candidates_dir: PathBuf,
}

#[derive(Clone)]
pub struct Config(Arc<ConfigInner>);

impl Config {
    /// Reads the process environment. Missing values fall back to
    /// development defaults.
    pub fn from_env() -> anyhow::Result<Config> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, e.g. a map in tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Config> {
        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT is not a number: {port}"))?,
            None => DEFAULT_PORT,
        };

        let secret_key = match lookup("SECRET_KEY") {
            Some(secret) => secret,
            None => {
                tracing::warn!("SECRET_KEY is not set, using a random key for this process");
                random_secret()
            }
        };
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(anyhow!(
                "SECRET_KEY must be at least {MIN_SECRET_LEN} bytes long"
            ));
        }
        let cookie_key = Key::try_from(secret_key.as_bytes())
            .map_err(|e| anyhow!("SECRET_KEY is not usable as a cookie key: {e}"))?;

        let v = ConfigInner {
            db_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DB_URL.to_string()),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            admin_password: lookup("ADMIN_PASSWORD")
                .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string()),
            cookie_key,
            candidates_dir: lookup("CANDIDATES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
        };

        Ok(Self(Arc::new(v)))
    }

    pub fn get_server_url(&self) -> String {
        format!("{}:{}", self.0.host, self.0.port)
    }
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn random_secret() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(MIN_SECRET_LEN)
        .map(char::from)
        .collect()
}
