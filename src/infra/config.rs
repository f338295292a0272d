use std::path::PathBuf;
use std::time::Duration;

use config::{ConfigError, Environment, File};
use nestify::nest;
use serde::Deserialize;
use url::Url;

use crate::constant::{
    DEFAULT_ENRICHMENT_QUEUE_SIZE, DEFAULT_ENRICHMENT_TIMEOUT_SECS,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SERVER_PORT,
};

nest! {
    #[derive(Clone, Debug, Deserialize)]*
    pub struct Config {
        pub db_host: String,
        pub db_port: u16,
        pub db_user: String,
        pub db_password: String,
        pub db_name: String,
        pub port: u16,
        #[serde(default)]
        pub external_api_url: Option<String>,
        pub log: pub struct LogConfig {
            pub level: String,
            #[serde(default)]
            pub file: Option<PathBuf>,
        },
        pub enrichment: pub struct EnrichmentConfig {
            pub queue_size: usize,
            pub timeout_secs: u64,
        },
        pub server: pub struct ServerConfig {
            pub request_timeout_secs: u64,
        },
    }
}

impl Config {
    /// Optional `config` file, then the process environment.
    ///
    /// Flat keys map to env vars directly (`DB_HOST`), nested ones use a
    /// double underscore (`LOG__LEVEL`).
    pub fn init() -> Result<Self, ConfigError> {
        Self::build(Environment::default())
    }

    pub fn build(env: Environment) -> Result<Self, ConfigError> {
        config::Config::builder()
            .set_default("db_host", "localhost")?
            .set_default("db_port", 5432)?
            .set_default("port", i64::from(DEFAULT_SERVER_PORT))?
            .set_default("log.level", "info")?
            .set_default("enrichment.queue_size", DEFAULT_ENRICHMENT_QUEUE_SIZE as u64)?
            .set_default("enrichment.timeout_secs", DEFAULT_ENRICHMENT_TIMEOUT_SECS)?
            .set_default(
                "server.request_timeout_secs",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?
            .add_source(File::with_name("config").required(false))
            .add_source(env.separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn database_url(&self) -> Result<String, ConfigError> {
        let invalid =
            |what: &str| ConfigError::Message(format!("invalid database {what}"));

        let mut url = Url::parse("postgres://localhost")
            .map_err(|e| ConfigError::Message(e.to_string()))?;

        url.set_host(Some(&self.db_host))
            .map_err(|_| invalid("host"))?;
        url.set_port(Some(self.db_port))
            .map_err(|()| invalid("port"))?;
        url.set_username(&self.db_user)
            .map_err(|()| invalid("user"))?;
        url.set_password(Some(&self.db_password))
            .map_err(|()| invalid("password"))?;
        url.set_path(&self.db_name);
        url.query_pairs_mut().append_pair("sslmode", "disable");

        Ok(url.into())
    }
}

impl EnrichmentConfig {
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ServerConfig {
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
