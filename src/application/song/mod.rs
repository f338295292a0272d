use std::borrow::Cow;

use derive_more::{Display, From};
use tracing::Span;

use crate::domain::shared::Pagination;
use crate::domain::song::repo::Repo;
use crate::domain::song::{
    NewSong, Song, SongFilter, SongInfo, SongPatch, ValidationError,
};

/// Infrastructure details never leave this type, they are logged instead
#[derive(Debug, Display, From, derive_more::Error)]
pub enum Error {
    #[display("song with id {_0} not found")]
    #[from(ignore)]
    NotFound(#[error(not(source))] i64),
    #[from]
    Validation(ValidationError),
    #[display("{_0}")]
    #[from(ignore)]
    Internal(#[error(not(source))] Cow<'static, str>),
}

impl Error {
    const fn internal(msg: &'static str) -> Self {
        Self::Internal(Cow::Borrowed(msg))
    }
}

#[derive(Clone)]
pub struct Service<R> {
    repo: R,
    span: Span,
}

impl<R> Service<R>
where
    R: Repo,
{
    pub const fn new(repo: R, span: Span) -> Self {
        Self { repo, span }
    }

    pub async fn find_many(
        &self,
        filter: &SongFilter,
        pagination: Pagination,
    ) -> Result<Vec<Song>, Error> {
        self.repo
            .find_many(
                filter,
                pagination.offset(),
                pagination.limit(),
            )
            .await
            .map_err(|err| {
                tracing::error!(parent: &self.span, "failed to fetch songs: {err}");
                Error::internal("failed to fetch songs")
            })
    }

    pub async fn find_verses(
        &self,
        id: i64,
        pagination: Pagination,
    ) -> Result<Vec<String>, Error> {
        let song = self.find_existing(id).await?;

        Ok(song.verses(pagination))
    }

    /// Ids the store cannot hold are treated like any other missing row
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        let Ok(id) = i32::try_from(id) else {
            return Ok(());
        };

        self.repo.delete(id).await.map_err(|err| {
            tracing::error!(parent: &self.span, "deletion failed: {err}");
            Error::internal("deletion failed")
        })
    }

    pub async fn update(
        &self,
        id: i64,
        patch: SongPatch,
    ) -> Result<Song, Error> {
        patch.validate()?;

        let mut song = self.find_existing(id).await?;
        song.apply_patch(patch);

        self.save(&song).await?;

        Ok(song)
    }

    pub async fn create(&self, new_song: NewSong) -> Result<Song, Error> {
        new_song.validate()?;

        self.repo.create(&new_song).await.map_err(|err| {
            tracing::error!(parent: &self.span, "failed to save song: {err}");
            Error::internal("failed to save song")
        })
    }

    /// Overwrites text, release date and link of a stored song.
    ///
    /// The row is loaded again right before the write, so group and title
    /// changed since the creation are kept.
    pub async fn update_info(
        &self,
        id: i64,
        info: SongInfo,
    ) -> Result<Song, Error> {
        let mut song = self.find_existing(id).await?;
        song.apply_info(info);

        self.save(&song).await?;

        Ok(song)
    }

    async fn find_existing(&self, id: i64) -> Result<Song, Error> {
        let found = match i32::try_from(id) {
            Ok(key) => self.repo.find_by_id(key).await,
            Err(_) => Ok(None),
        };

        match found {
            Ok(Some(song)) => Ok(song),
            Ok(None) => {
                tracing::warn!(parent: &self.span, "song not found: {id}");
                Err(Error::NotFound(id))
            }
            Err(err) => {
                tracing::error!(parent: &self.span, "failed to retrieve data: {err}");
                Err(Error::internal("failed to retrieve data"))
            }
        }
    }

    async fn save(&self, song: &Song) -> Result<(), Error> {
        self.repo.save(song).await.map_err(|err| {
            tracing::error!(parent: &self.span, "failed to update data: {err}");
            Error::internal("failed to update data")
        })
    }
}
