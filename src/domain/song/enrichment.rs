use super::model::SongInfo;

#[derive(Debug, thiserror::Error)]
pub enum EnrichmentError {
    #[error("EXTERNAL_API_URL is not set")]
    NotConfigured,
    #[error("error making GET request: {0}")]
    Network(String),
    #[error("metadata provider responded with {0}")]
    Status(u16),
    #[error("error decoding: {0}")]
    Decode(String),
}

/// Source of lyrics, release date and link for a song
#[trait_variant::make(Send)]
pub trait MetadataProvider: Send + Sync {
    async fn fetch(
        &self,
        group: &str,
        song: &str,
    ) -> Result<SongInfo, EnrichmentError>;
}
