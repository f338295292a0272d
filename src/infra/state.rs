use std::time::Duration;

use config::ConfigError;
use derive_more::{Display, Error, From};
use sea_orm::{DatabaseConnection, DbErr};
use tracing::Span;

use super::config::Config;
use super::database::get_connection;
use super::database::sea_orm::SeaOrmRepository;
use super::logger::Logger;
use super::metadata::HttpMetadataProvider;
use crate::application::enrichment::{self, Queue};
use crate::application::song::Service;
use crate::constant::DEFAULT_REQUEST_TIMEOUT_SECS;

pub type SongService = Service<SeaOrmRepository>;

#[derive(Debug, Display, Error, From)]
pub enum InitError {
    #[display("invalid configuration: {_0}")]
    Config(ConfigError),
    #[display("database unavailable: {_0}")]
    Database(DbErr),
    #[display("failed to build http client: {_0}")]
    HttpClient(reqwest::Error),
}

#[derive(Clone)]
pub struct AppState {
    pub song_service: SongService,
    pub enrichment: Queue,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(conn: DatabaseConnection, enrichment: Queue, span: Span) -> Self {
        Self {
            song_service: Service::new(SeaOrmRepository::new(conn), span),
            enrichment,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Connects, migrates and starts the enrichment worker
    pub async fn init(config: &Config) -> Result<Self, InitError> {
        let url = config.database_url()?;
        let conn = get_connection(&url, &Logger::component("database")).await?;

        let song_service = Service::new(
            SeaOrmRepository::new(conn),
            Logger::component("song"),
        );

        let provider = HttpMetadataProvider::new(
            config.external_api_url.clone(),
            config.enrichment.timeout(),
        )?;

        let enrichment = enrichment::spawn()
            .service(song_service.clone())
            .provider(provider)
            .capacity(config.enrichment.queue_size)
            .span(Logger::component("enrichment"))
            .call();

        Ok(Self {
            song_service,
            enrichment,
            request_timeout: config.server.request_timeout(),
        })
    }
}
