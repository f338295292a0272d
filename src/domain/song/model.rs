use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constant::{GROUP_MAX_LENGTH, SONG_TITLE_MAX_LENGTH, VERSE_SEPARATOR};
use crate::domain::shared::Pagination;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: i32,
    pub group: String,
    pub song: String,
    /// Lyrics, one verse per line
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub link: String,
}

impl Song {
    /// Returns the verses inside the page window, an empty list when the
    /// window starts past the last verse.
    pub fn verses(&self, pagination: Pagination) -> Vec<String> {
        if self.text.is_empty() {
            return vec![];
        }

        let skip = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(pagination.limit()).unwrap_or(usize::MAX);

        self.text
            .split(VERSE_SEPARATOR)
            .skip(skip)
            .take(take)
            .map(ToOwned::to_owned)
            .collect()
    }

    /// Empty fields of the patch leave the current value untouched
    pub fn apply_patch(&mut self, patch: SongPatch) {
        if !patch.group.is_empty() {
            self.group = patch.group;
        }
        if !patch.song.is_empty() {
            self.song = patch.song;
        }
    }

    pub fn apply_info(&mut self, info: SongInfo) {
        self.text = info.text;
        self.release_date = info.release_date;
        self.link = info.link;
    }
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct NewSong {
    pub group: String,
    pub song: String,
}

impl NewSong {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.group.trim().is_empty() {
            return Err(ValidationError::EmptyGroup);
        }

        if self.song.trim().is_empty() {
            return Err(ValidationError::EmptySong);
        }

        check_length(&self.group, &self.song)
    }
}

/// Both fields are required in the body, an empty string means "keep"
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct SongPatch {
    pub group: String,
    pub song: String,
}

impl SongPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_length(&self.group, &self.song)
    }
}

fn check_length(group: &str, song: &str) -> Result<(), ValidationError> {
    if group.chars().count() > GROUP_MAX_LENGTH {
        return Err(ValidationError::GroupTooLong);
    }

    if song.chars().count() > SONG_TITLE_MAX_LENGTH {
        return Err(ValidationError::SongTooLong);
    }

    Ok(())
}

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("group must not be empty")]
    EmptyGroup,
    #[error("song must not be empty")]
    EmptySong,
    #[error("group must be at most 100 characters")]
    GroupTooLong,
    #[error("song must be at most 100 characters")]
    SongTooLong,
}

/// Equality filters, empty values are dropped
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SongFilter {
    pub group: Option<String>,
    pub song: Option<String>,
}

impl SongFilter {
    pub fn new(group: Option<String>, song: Option<String>) -> Self {
        Self {
            group: group.filter(|s| !s.is_empty()),
            song: song.filter(|s| !s.is_empty()),
        }
    }
}

/// Payload of the metadata provider
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SongInfo {
    pub text: String,
    pub release_date: Option<DateTime<Utc>>,
    pub link: String,
}
