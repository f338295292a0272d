use super::model::{NewSong, Song, SongFilter};

#[trait_variant::make(Send)]
pub trait Repo: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn find_many(
        &self,
        filter: &SongFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Song>, Self::Error>;

    /// `None` when no row has this id
    async fn find_by_id(&self, id: i32) -> Result<Option<Song>, Self::Error>;

    async fn create(&self, song: &NewSong) -> Result<Song, Self::Error>;

    /// Overwrites every mutable column of the row
    async fn save(&self, song: &Song) -> Result<(), Self::Error>;

    /// Deleting a missing row is not an error
    async fn delete(&self, id: i32) -> Result<(), Self::Error>;
}
